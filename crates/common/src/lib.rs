//! Shared value types for the folio scene engine.
//!
//! # Invariants
//! - `SurfaceSize` dimensions are never zero.
//! - `MotionPreference` is sampled once per section mount and never re-polled.

mod rng;
mod types;

pub use rng::SplitMix64;
pub use types::{Color, MotionPreference, SurfaceSize};

pub fn crate_info() -> &'static str {
    "folio-common v0.1.0"
}
