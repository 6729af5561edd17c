//! Stitch App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapters and exposes the core to the
//! JavaScript presentation shell as a single `StitchClient` object.

mod client;

#[cfg(test)]
mod tests;

pub use client::{parse_config, StitchClient};

use wasm_bindgen::prelude::*;

/// WASM entry point: runs once when the module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Stitch client core loaded");
}
