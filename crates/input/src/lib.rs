//! Input mapping: raw key identifiers and pointer events mapped to the
//! vocabularies the scene controllers consume.
//!
//! # Invariants
//! - Key state is owned by one mounted drive section and cleared on its
//!   teardown; it never leaks across mounts.
//! - Controllers consume `DriveControls` snapshots, never raw events.

mod keys;
mod pointer;

pub use keys::{DriveControls, DriveKey, KeyState};
pub use pointer::{PointerDrag, DRAG_SENSITIVITY};

pub fn crate_info() -> &'static str {
    "folio-input v0.1.0"
}
