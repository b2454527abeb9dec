/// Horizontal drag distance to rotation angle, from the reference scene.
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Tracks a horizontal pointer drag on the neural-map canvas.
///
/// Press captures the pointer x; each move while dragging yields the
/// rotation delta `(x - last_x) * sensitivity`; release stops tracking.
/// No inertia: once released, nothing more is emitted.
#[derive(Debug, Clone, Default)]
pub struct PointerDrag {
    dragging: bool,
    last_x: f32,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
    }

    /// Returns the rotation delta if a drag is in progress.
    pub fn move_to(&mut self, x: f32) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let delta = (x - self.last_x) * DRAG_SENSITIVITY;
        self.last_x = x;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_without_press_emits_nothing() {
        let mut drag = PointerDrag::new();
        assert_eq!(drag.move_to(100.0), None);
    }

    #[test]
    fn drag_emits_scaled_deltas() {
        let mut drag = PointerDrag::new();
        drag.begin(100.0);
        assert_eq!(drag.move_to(140.0), Some(40.0 * DRAG_SENSITIVITY));
        // Delta is relative to the last position, not the press point.
        assert_eq!(drag.move_to(130.0), Some(-10.0 * DRAG_SENSITIVITY));
    }

    #[test]
    fn release_stops_tracking() {
        let mut drag = PointerDrag::new();
        drag.begin(0.0);
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.move_to(50.0), None);
    }

    #[test]
    fn new_press_rebases_position() {
        let mut drag = PointerDrag::new();
        drag.begin(0.0);
        drag.move_to(10.0);
        drag.end();

        drag.begin(500.0);
        assert_eq!(drag.move_to(510.0), Some(10.0 * DRAG_SENSITIVITY));
    }
}
