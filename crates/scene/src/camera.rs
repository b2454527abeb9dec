use glam::{Mat4, Vec3};

/// Perspective look-at camera.
///
/// All three portfolio scenes drive their camera through a position and a
/// look target; the chase camera lerps `position` toward a moving target.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 15.0),
            target: Vec3::ZERO,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_produces_valid_matrix() {
        let cam = Camera::default();
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn set_aspect_changes_projection() {
        let mut cam = Camera::default();
        let before = cam.projection_matrix();
        cam.set_aspect(1.0);
        assert_ne!(before, cam.projection_matrix());
    }

    #[test]
    fn look_at_moves_target() {
        let mut cam = Camera::default();
        cam.look_at(Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(cam.target, Vec3::new(5.0, 0.0, 5.0));
    }
}
