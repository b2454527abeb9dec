//! Chase camera: a fixed offset behind the car, rotated by the car's
//! heading and blended toward each frame so cuts are never visible.

use folio_scene::Camera;
use glam::{Quat, Vec3};

use crate::vehicle::VehicleState;

pub struct ChaseCamera {
    /// Offset from the car in its local frame: above and behind.
    offset: Vec3,
    /// Per-frame blend factor toward the target position.
    lerp: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 5.0, -10.0),
            lerp: 0.1,
        }
    }
}

impl ChaseCamera {
    /// Moves the camera a fraction of the way toward its ideal pose
    /// behind the vehicle, then aims it at the car.
    pub fn follow(&self, camera: &mut Camera, vehicle: &VehicleState) {
        let rotated = Quat::from_rotation_y(vehicle.heading) * self.offset;
        let desired = vehicle.position + rotated;
        camera.position = camera.position.lerp(desired, self.lerp);
        camera.look_at(vehicle.position);
    }

    /// Snaps directly behind the vehicle, used on mount.
    pub fn snap(&self, camera: &mut Camera, vehicle: &VehicleState) {
        let rotated = Quat::from_rotation_y(vehicle.heading) * self.offset;
        camera.position = vehicle.position + rotated;
        camera.look_at(vehicle.position);
    }
}
