//! Scene core: object arena, camera, render-context lifecycle, and the
//! cooperative per-frame animation loop.
//!
//! # Invariants
//! - A `RenderContext` is exclusively owned by one mounted section and is
//!   released synchronously on unmount; it never outlives its canvas.
//! - Per-object simulation state lives in controller-side tables keyed by
//!   `ObjectHandle`, never on the scene object itself.
//! - Teardown order is fixed: cancel the animation loop, remove listeners,
//!   release the context. `SectionMount::unmount` enforces it.

mod arena;
mod camera;
mod frame;
mod lifecycle;
mod mount;

pub use arena::{GeometryKind, LineBatch, ObjectHandle, SceneArena, SceneObject, Transform};
pub use camera::Camera;
pub use frame::{Frame, FrameScheduler, FrameTimer, LoopHandle};
pub use lifecycle::{
    CanvasHandle, ListenerId, ListenerKind, ListenerRegistry, ReleaseReport, RenderContext,
    SceneError, SceneLifecycle,
};
pub use mount::SectionMount;

pub fn crate_info() -> &'static str {
    "folio-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
