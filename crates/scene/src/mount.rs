use crate::frame::{FrameScheduler, LoopHandle};
use crate::lifecycle::{
    ListenerId, ListenerRegistry, ReleaseReport, RenderContext, SceneLifecycle,
};

/// Everything one mounted 3D section owns: its animation loop, the
/// window-level listeners it registered, and its render context.
///
/// `unmount` enforces the fixed teardown order (cancel the loop, remove
/// listeners, release the context) so a frame or listener callback can
/// never fire against a disposed resource.
pub struct SectionMount {
    pub loop_handle: LoopHandle,
    pub listeners: Vec<ListenerId>,
    pub context: RenderContext,
}

impl SectionMount {
    pub fn new(loop_handle: LoopHandle, context: RenderContext) -> Self {
        Self {
            loop_handle,
            listeners: Vec::new(),
            context,
        }
    }

    /// Record an extra listener this section registered (pointer, key).
    /// The lifecycle's own resize listener is handled by `release`.
    pub fn track_listener(&mut self, id: ListenerId) {
        self.listeners.push(id);
    }

    /// Tear the section down in the required order.
    pub fn unmount(
        self,
        scheduler: &mut FrameScheduler,
        lifecycle: &mut SceneLifecycle,
        registry: &mut ListenerRegistry,
    ) -> ReleaseReport {
        scheduler.cancel(self.loop_handle);
        for id in self.listeners {
            registry.remove(id);
        }
        lifecycle.release(registry, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{CanvasHandle, ListenerKind};
    use folio_common::SurfaceSize;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Instant;

    #[test]
    fn unmount_stops_ticks_and_restores_listener_baseline() {
        let mut scheduler = FrameScheduler::new();
        let mut lifecycle = SceneLifecycle::new();
        let mut registry = ListenerRegistry::new();
        let baseline = registry.count();

        let canvas = CanvasHandle::new("drive", SurfaceSize::new(800, 600), "Car simulation");
        let context = lifecycle
            .acquire(&mut registry, &canvas, canvas.size)
            .unwrap();

        let ticks = Rc::new(Cell::new(0u32));
        let t = ticks.clone();
        let handle = scheduler.start(Box::new(move |_| t.set(t.get() + 1)));

        let mut mount = SectionMount::new(handle, context);
        mount.track_listener(registry.register(ListenerKind::KeyDown));
        mount.track_listener(registry.register(ListenerKind::KeyUp));
        assert_eq!(registry.count(), baseline + 3);

        scheduler.pump(Instant::now());
        assert_eq!(ticks.get(), 1);

        let report = mount.unmount(&mut scheduler, &mut lifecycle, &mut registry);

        scheduler.pump(Instant::now());
        scheduler.pump(Instant::now());
        assert_eq!(ticks.get(), 1, "zero tick invocations after unmount");
        assert_eq!(registry.count(), baseline, "zero leaked listeners");
        assert_eq!(report.objects_freed, 0);
    }
}
