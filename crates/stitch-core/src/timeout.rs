use std::future::Future;
use futures::future::{select, Either};
use stitch_types::{Result, StitchError};
use crate::ports::TimerPort;

/// Race `fut` against a `ms` sleep on `timer`. The loser is dropped.
pub async fn with_timeout<T, F>(timer: &dyn TimerPort, ms: u64, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let fut = Box::pin(fut);
    let sleep = timer.sleep(ms);
    match select(fut, sleep).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(StitchError::Timeout(ms)),
    }
}
