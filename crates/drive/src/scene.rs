//! City scene for the drive section: ground plane, the car's body
//! parts, and a field of randomly sized buildings kept clear of the
//! driving strip.
//!
//! The car is modeled as a rigid group: body, cabin, and four wheels
//! share the vehicle pose, with wheel spin accumulating separately.

use folio_common::{Color, SplitMix64};
use folio_scene::{GeometryKind, ObjectHandle, SceneArena, SceneObject, Transform};
use glam::{Quat, Vec3};

use crate::vehicle::VehicleState;

const GROUND_COLOR: Color = Color(0x2a2a3e);
const BODY_COLOR: Color = Color(0x9d4edd);
const CABIN_COLOR: Color = Color(0x0a0a0a);
const WHEEL_COLOR: Color = Color(0x1a1a1a);
const BUILDING_COLOR: Color = Color(0x151520);

const BUILDING_COUNT: usize = 40;
/// Buildings spawned inside this half-width of the spawn strip get
/// pushed out so the car always has a clear lane.
const KEEP_OUT_HALF_WIDTH: f32 = 10.0;

/// Height of the car group above the ground plane.
const RIDE_HEIGHT: f32 = 0.3;

/// Wheel spin accumulated per frame, in radians per unit of speed.
const WHEEL_SPIN_RATE: f32 = 2.0;

/// Local offsets of the four wheels from the group origin.
const WHEEL_OFFSETS: [Vec3; 4] = [
    Vec3::new(-1.0, 0.3, 1.5),
    Vec3::new(1.0, 0.3, 1.5),
    Vec3::new(-1.0, 0.3, -1.5),
    Vec3::new(1.0, 0.3, -1.5),
];

pub struct DriveScene {
    ground: ObjectHandle,
    body: ObjectHandle,
    cabin: ObjectHandle,
    wheels: [ObjectHandle; 4],
    buildings: Vec<ObjectHandle>,
    wheel_spin: f32,
}

impl DriveScene {
    /// Populates the arena with the full city and car, returning the
    /// handle table used for per-frame sync.
    pub fn build(arena: &mut SceneArena, seed: u64) -> Self {
        let ground = arena.insert(SceneObject {
            geometry: GeometryKind::Plane,
            transform: Transform {
                scale: Vec3::new(400.0, 1.0, 400.0),
                ..Transform::default()
            },
            color: GROUND_COLOR,
            opacity: 1.0,
            wireframe: false,
        });

        let body = arena.insert(SceneObject {
            geometry: GeometryKind::Cube,
            transform: Transform {
                scale: Vec3::new(2.0, 0.8, 4.0),
                ..Transform::default()
            },
            color: BODY_COLOR,
            opacity: 1.0,
            wireframe: false,
        });

        let cabin = arena.insert(SceneObject {
            geometry: GeometryKind::Cube,
            transform: Transform {
                scale: Vec3::new(1.6, 0.6, 2.0),
                ..Transform::default()
            },
            color: CABIN_COLOR,
            opacity: 1.0,
            wireframe: false,
        });

        let wheels = WHEEL_OFFSETS.map(|_| {
            arena.insert(SceneObject {
                geometry: GeometryKind::Cylinder,
                transform: Transform {
                    scale: Vec3::new(0.4, 0.3, 0.4),
                    rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
                    ..Transform::default()
                },
                color: WHEEL_COLOR,
                opacity: 1.0,
                wireframe: false,
            })
        });

        let mut rng = SplitMix64::new(seed);
        let mut buildings = Vec::with_capacity(BUILDING_COUNT);
        for _ in 0..BUILDING_COUNT {
            let width = 3.0 + rng.next_f32() * 5.0;
            let height = 5.0 + rng.next_f32() * 20.0;
            let depth = 3.0 + rng.next_f32() * 5.0;
            let mut x = rng.next_range(-100.0, 100.0);
            let z = rng.next_range(-100.0, 100.0);
            // Shift anything straddling the lane out of the way.
            if x.abs() < KEEP_OUT_HALF_WIDTH {
                x += 20.0;
            }
            buildings.push(arena.insert(SceneObject {
                geometry: GeometryKind::Cube,
                transform: Transform {
                    position: Vec3::new(x, height / 2.0, z),
                    scale: Vec3::new(width, height, depth),
                    ..Transform::default()
                },
                color: BUILDING_COLOR,
                opacity: 1.0,
                wireframe: false,
            }));
        }

        let mut scene = Self {
            ground,
            body,
            cabin,
            wheels,
            buildings,
            wheel_spin: 0.0,
        };
        scene.sync(arena, &VehicleState::default());
        tracing::debug!(seed, objects = arena.len(), "drive scene populated");
        scene
    }

    pub fn ground(&self) -> ObjectHandle {
        self.ground
    }

    pub fn body(&self) -> ObjectHandle {
        self.body
    }

    pub fn building_handles(&self) -> &[ObjectHandle] {
        &self.buildings
    }

    /// Writes the vehicle pose into the car's scene objects. Buildings
    /// and ground never move after build.
    pub fn sync(&mut self, arena: &mut SceneArena, vehicle: &VehicleState) {
        let rotation = Quat::from_rotation_y(vehicle.heading);
        let origin = vehicle.position + Vec3::new(0.0, RIDE_HEIGHT, 0.0);

        if let Some(body) = arena.get_mut(self.body) {
            body.transform.position = origin + rotation * Vec3::new(0.0, 0.4, 0.0);
            body.transform.rotation = Vec3::new(0.0, vehicle.heading, 0.0);
        }
        if let Some(cabin) = arena.get_mut(self.cabin) {
            cabin.transform.position = origin + rotation * Vec3::new(0.0, 1.1, -0.5);
            cabin.transform.rotation = Vec3::new(0.0, vehicle.heading, 0.0);
        }

        self.wheel_spin += vehicle.speed * WHEEL_SPIN_RATE;
        for (handle, offset) in self.wheels.iter().zip(WHEEL_OFFSETS) {
            if let Some(wheel) = arena.get_mut(*handle) {
                wheel.transform.position = origin + rotation * offset;
                wheel.transform.rotation = Vec3::new(
                    self.wheel_spin,
                    vehicle.heading,
                    std::f32::consts::FRAC_PI_2,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_populates_full_object_count() {
        let mut arena = SceneArena::new();
        let scene = DriveScene::build(&mut arena, 7);
        // Ground, body, cabin, 4 wheels, 40 buildings.
        assert_eq!(arena.len(), 7 + BUILDING_COUNT);
        assert_eq!(scene.building_handles().len(), BUILDING_COUNT);
    }

    #[test]
    fn buildings_avoid_the_driving_lane() {
        let mut arena = SceneArena::new();
        let scene = DriveScene::build(&mut arena, 42);
        for &handle in scene.building_handles() {
            let x = arena.get(handle).unwrap().transform.position.x;
            assert!(x.abs() >= KEEP_OUT_HALF_WIDTH);
        }
    }

    #[test]
    fn building_field_is_deterministic_per_seed() {
        let mut a = SceneArena::new();
        let mut b = SceneArena::new();
        let scene_a = DriveScene::build(&mut a, 99);
        let scene_b = DriveScene::build(&mut b, 99);
        for (&ha, &hb) in scene_a
            .building_handles()
            .iter()
            .zip(scene_b.building_handles())
        {
            assert_eq!(a.get(ha).unwrap().transform, b.get(hb).unwrap().transform);
        }
    }

    #[test]
    fn sync_moves_car_parts_with_vehicle() {
        let mut arena = SceneArena::new();
        let mut scene = DriveScene::build(&mut arena, 1);
        let vehicle = VehicleState {
            position: Vec3::new(5.0, 0.0, -3.0),
            heading: 0.0,
            speed: 0.0,
        };
        scene.sync(&mut arena, &vehicle);
        let body = arena.get(scene.body()).unwrap();
        assert!((body.transform.position.x - 5.0).abs() < 1e-5);
        assert!((body.transform.position.z - (-3.0)).abs() < 1e-5);
        // Ground stays put.
        assert_eq!(arena.get(scene.ground()).unwrap().transform.position, Vec3::ZERO);
    }

    #[test]
    fn wheel_spin_accumulates_with_speed() {
        let mut arena = SceneArena::new();
        let mut scene = DriveScene::build(&mut arena, 1);
        let vehicle = VehicleState {
            speed: 0.5,
            ..VehicleState::default()
        };
        scene.sync(&mut arena, &vehicle);
        scene.sync(&mut arena, &vehicle);
        let wheel = arena.get(scene.wheels[0]).unwrap();
        assert!((wheel.transform.rotation.x - 2.0 * 0.5 * WHEEL_SPIN_RATE).abs() < 1e-5);
    }
}
