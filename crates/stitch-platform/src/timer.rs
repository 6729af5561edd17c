//! Timer adapter over `setTimeout` (gloo-timers).

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use stitch_core::ports::TimerPort;

pub struct GlooTimer;

#[async_trait(?Send)]
impl TimerPort for GlooTimer {
    async fn sleep(&self, ms: u64) {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        TimeoutFuture::new(ms).await;
    }
}
