use folio_common::SurfaceSize;

use crate::arena::{LineBatch, SceneArena};
use crate::camera::Camera;

/// Errors from scene construction.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Required rendering capability absent at mount time. The caller
    /// aborts scene construction for that section silently; the section
    /// simply shows no canvas content.
    #[error("graphics capability unavailable for canvas '{0}'")]
    GraphicsUnavailable(&'static str),
}

/// A mounted canvas element as the lifecycle manager sees it.
///
/// Carries the textual role/label the canvas exposes to assistive
/// technology, so every render context stays describable.
#[derive(Debug, Clone, Copy)]
pub struct CanvasHandle {
    pub label: &'static str,
    pub size: SurfaceSize,
    pub graphics_available: bool,
    pub aria_label: &'static str,
}

impl CanvasHandle {
    pub fn new(label: &'static str, size: SurfaceSize, aria_label: &'static str) -> Self {
        Self {
            label,
            size,
            graphics_available: true,
            aria_label,
        }
    }
}

/// Kinds of window-level listeners a section can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Resize,
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
    KeyUp,
}

/// Identifies one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Per-app registry of window-level listeners.
///
/// Listeners are per-section-instance resources: registered at mount,
/// removed at teardown, never leaked to other instances. Tests assert the
/// count returns to its pre-mount baseline after unmount.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    live: Vec<(ListenerId, ListenerKind)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.live.push((id, kind));
        tracing::trace!(?kind, "listener registered");
        id
    }

    /// Remove a listener. Removal of an already-removed id is a no-op.
    pub fn remove(&mut self, id: ListenerId) {
        self.live.retain(|(lid, _)| *lid != id);
    }

    pub fn count(&self) -> usize {
        self.live.len()
    }

    pub fn count_of(&self, kind: ListenerKind) -> usize {
        self.live.iter().filter(|(_, k)| *k == kind).count()
    }
}

/// One render context: scene graph root, camera, and canvas binding.
///
/// Exclusively owned by the section that acquired it. Never shared across
/// sections and never outlives its canvas element.
#[derive(Debug)]
pub struct RenderContext {
    pub canvas_label: &'static str,
    pub aria_label: &'static str,
    pub camera: Camera,
    pub arena: SceneArena,
    pub lines: Option<LineBatch>,
    size: SurfaceSize,
    resize_listener: ListenerId,
}

impl RenderContext {
    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// What `release` freed, for leak assertions in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseReport {
    pub objects_freed: usize,
    pub line_segments_freed: usize,
}

/// Owns creation and guaranteed disposal of render contexts.
///
/// `acquire` and `release` are the only points that touch window-level
/// resize listeners. Callers must cancel the section's animation loop
/// strictly before `release`.
#[derive(Debug, Default)]
pub struct SceneLifecycle;

impl SceneLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// Create a render context bound to a mounted canvas.
    ///
    /// Fails only when the platform lacks the required graphics
    /// capability; the caller treats that as a silent no-op for the
    /// section, not a user-visible error.
    pub fn acquire(
        &mut self,
        listeners: &mut ListenerRegistry,
        canvas: &CanvasHandle,
        size_hint: SurfaceSize,
    ) -> Result<RenderContext, SceneError> {
        if !canvas.graphics_available {
            tracing::debug!(canvas = canvas.label, "graphics unavailable, skipping scene");
            return Err(SceneError::GraphicsUnavailable(canvas.label));
        }

        let resize_listener = listeners.register(ListenerKind::Resize);
        let mut camera = Camera::default();
        camera.set_aspect(size_hint.aspect());

        tracing::debug!(canvas = canvas.label, "render context acquired");
        Ok(RenderContext {
            canvas_label: canvas.label,
            aria_label: canvas.aria_label,
            camera,
            arena: SceneArena::new(),
            lines: None,
            size: size_hint,
            resize_listener,
        })
    }

    /// Apply a viewport-size change. Idempotent; called on every resize
    /// event while the context is live.
    pub fn resize(&mut self, context: &mut RenderContext, new_size: SurfaceSize) {
        context.size = new_size;
        context.camera.set_aspect(new_size.aspect());
    }

    /// Synchronously free everything the context owns and deregister its
    /// listener. The owning section's animation loop must already be
    /// cancelled.
    pub fn release(
        &mut self,
        listeners: &mut ListenerRegistry,
        mut context: RenderContext,
    ) -> ReleaseReport {
        listeners.remove(context.resize_listener);
        let objects_freed = context.arena.clear();
        let line_segments_freed = context
            .lines
            .take()
            .map(|l| l.segment_count())
            .unwrap_or(0);

        tracing::debug!(
            canvas = context.canvas_label,
            objects_freed,
            line_segments_freed,
            "render context released"
        );
        ReleaseReport {
            objects_freed,
            line_segments_freed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{GeometryKind, SceneObject};
    use folio_common::Color;

    fn canvas() -> CanvasHandle {
        CanvasHandle::new("hero", SurfaceSize::new(800, 600), "Abstract 3D shapes")
    }

    #[test]
    fn acquire_registers_one_resize_listener() {
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();
        let ctx = lifecycle
            .acquire(&mut listeners, &canvas(), SurfaceSize::new(800, 600))
            .unwrap();
        assert_eq!(listeners.count_of(ListenerKind::Resize), 1);
        assert_eq!(ctx.canvas_label, "hero");
    }

    #[test]
    fn context_is_debug_formattable() {
        // Result combinators in callers and tests need Debug on the Ok arm.
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();
        let ctx = lifecycle
            .acquire(&mut listeners, &canvas(), SurfaceSize::new(800, 600))
            .unwrap();
        assert!(format!("{ctx:?}").contains("hero"));
    }

    #[test]
    fn acquire_fails_without_graphics() {
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();
        let mut c = canvas();
        c.graphics_available = false;

        let err = lifecycle
            .acquire(&mut listeners, &c, SurfaceSize::new(800, 600))
            .unwrap_err();
        assert!(matches!(err, SceneError::GraphicsUnavailable("hero")));
        // A failed acquire must not leak a listener.
        assert_eq!(listeners.count(), 0);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();
        let mut ctx = lifecycle
            .acquire(&mut listeners, &canvas(), SurfaceSize::new(800, 600))
            .unwrap();

        let new_size = SurfaceSize::new(1024, 512);
        lifecycle.resize(&mut ctx, new_size);
        let aspect_after_first = ctx.camera.aspect;
        lifecycle.resize(&mut ctx, new_size);

        assert_eq!(ctx.size(), new_size);
        assert_eq!(ctx.camera.aspect, aspect_after_first);
    }

    #[test]
    fn release_frees_everything_and_restores_baseline() {
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();
        let baseline = listeners.count();

        let mut ctx = lifecycle
            .acquire(&mut listeners, &canvas(), SurfaceSize::new(800, 600))
            .unwrap();
        for _ in 0..4 {
            ctx.arena
                .insert(SceneObject::new(GeometryKind::Sphere, Color(0x61dafb)));
        }
        ctx.lines = Some(LineBatch::new(6, Color(0xc77dff), 0.2));

        let report = lifecycle.release(&mut listeners, ctx);
        assert_eq!(report.objects_freed, 4);
        assert_eq!(report.line_segments_freed, 6);
        assert_eq!(listeners.count(), baseline);
    }

    #[test]
    fn contexts_are_independent_across_sections() {
        let mut lifecycle = SceneLifecycle::new();
        let mut listeners = ListenerRegistry::new();

        let a = lifecycle
            .acquire(&mut listeners, &canvas(), SurfaceSize::new(800, 600))
            .unwrap();
        let b = lifecycle
            .acquire(
                &mut listeners,
                &CanvasHandle::new("skills", SurfaceSize::new(800, 600), "Skill map"),
                SurfaceSize::new(800, 600),
            )
            .unwrap();
        assert_eq!(listeners.count(), 2);

        lifecycle.release(&mut listeners, a);
        // Releasing one section leaves the other's listener untouched.
        assert_eq!(listeners.count(), 1);
        lifecycle.release(&mut listeners, b);
        assert_eq!(listeners.count(), 0);
    }
}
