//! Orbit field: the ambient hero background of slowly rotating abstract
//! shapes. No user input.
//!
//! # Invariants
//! - Angular velocities are drawn once at creation, even under reduced
//!   motion; they are simply never applied in that case.
//! - The motion preference is read once at mount, not re-polled per frame.

use folio_common::{Color, MotionPreference, SplitMix64};
use folio_scene::{GeometryKind, ObjectHandle, SceneArena, SceneObject};
use glam::Vec3;

/// Number of floating shapes in the reference scene.
pub const OBJECT_COUNT: usize = 12;

/// Per-object angular velocity, radians per frame on two axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

const BASE_GEOMETRIES: [GeometryKind; 3] = [
    GeometryKind::Torus,
    GeometryKind::Octahedron,
    GeometryKind::Icosahedron,
];

const PALETTE: [Color; 2] = [Color(0x9d4edd), Color(0xc77dff)];

/// Controller for the hero background.
///
/// Holds handles into the owning section's arena plus a spin side table
/// parallel to them; simulation state never lives on the scene objects.
pub struct OrbitField {
    handles: Vec<ObjectHandle>,
    spins: Vec<Spin>,
    motion: MotionPreference,
}

impl OrbitField {
    /// Populate the arena with the floating shapes.
    ///
    /// Geometry cycles round-robin over torus/octahedron/icosahedron,
    /// colors alternate over the palette, every third object renders as
    /// wireframe, and positions are uniform in `[-10, 10]^3`. Each object
    /// draws its spin from `[-0.01, 0.01]^2` exactly once.
    pub fn new(arena: &mut SceneArena, seed: u64, motion: MotionPreference) -> Self {
        let mut rng = SplitMix64::new(seed);
        let mut handles = Vec::with_capacity(OBJECT_COUNT);
        let mut spins = Vec::with_capacity(OBJECT_COUNT);

        for i in 0..OBJECT_COUNT {
            let mut object = SceneObject::new(
                BASE_GEOMETRIES[i % BASE_GEOMETRIES.len()],
                PALETTE[i % PALETTE.len()],
            );
            object.opacity = 0.7;
            object.wireframe = i % 3 == 0;
            object.transform.position = Vec3::new(
                rng.next_range(-10.0, 10.0),
                rng.next_range(-10.0, 10.0),
                rng.next_range(-10.0, 10.0),
            );
            handles.push(arena.insert(object));
            spins.push(Spin {
                x: rng.next_range(-0.01, 0.01),
                y: rng.next_range(-0.01, 0.01),
            });
        }

        tracing::debug!(objects = OBJECT_COUNT, reduced = motion.is_reduced(), "orbit field built");
        Self {
            handles,
            spins,
            motion,
        }
    }

    /// Advance each object's rotation by its own velocity. Pure kinematic
    /// spin: no forces, no collisions. A no-op under reduced motion.
    pub fn update(&self, arena: &mut SceneArena) {
        if self.motion.is_reduced() {
            return;
        }
        for (handle, spin) in self.handles.iter().zip(&self.spins) {
            if let Some(object) = arena.get_mut(*handle) {
                object.transform.rotation.x += spin.x;
                object.transform.rotation.y += spin.y;
            }
        }
    }

    pub fn handles(&self) -> &[ObjectHandle] {
        &self.handles
    }

    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }
}

pub fn crate_info() -> &'static str {
    "folio-orbit v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(motion: MotionPreference) -> (SceneArena, OrbitField) {
        let mut arena = SceneArena::new();
        let field = OrbitField::new(&mut arena, 42, motion);
        (arena, field)
    }

    #[test]
    fn builds_twelve_objects_round_robin() {
        let (arena, field) = build(MotionPreference::Full);
        assert_eq!(arena.len(), OBJECT_COUNT);
        assert_eq!(field.handles().len(), OBJECT_COUNT);

        for (i, handle) in field.handles().iter().enumerate() {
            let object = arena.get(*handle).unwrap();
            assert_eq!(object.geometry, BASE_GEOMETRIES[i % 3]);
            assert_eq!(object.wireframe, i % 3 == 0);
            assert_eq!(object.color, PALETTE[i % 2]);
        }
    }

    #[test]
    fn spins_are_within_bounds_and_deterministic() {
        let (_, a) = build(MotionPreference::Full);
        let (_, b) = build(MotionPreference::Full);
        for (sa, sb) in a.spins().iter().zip(b.spins()) {
            assert_eq!(sa, sb);
            assert!((-0.01..0.01).contains(&sa.x));
            assert!((-0.01..0.01).contains(&sa.y));
        }
    }

    #[test]
    fn update_advances_rotation_by_spin() {
        let (mut arena, field) = build(MotionPreference::Full);
        field.update(&mut arena);
        field.update(&mut arena);

        for (handle, spin) in field.handles().iter().zip(field.spins()) {
            let rot = arena.get(*handle).unwrap().transform.rotation;
            assert!((rot.x - 2.0 * spin.x).abs() < 1e-6);
            assert!((rot.y - 2.0 * spin.y).abs() < 1e-6);
        }
    }

    #[test]
    fn reduced_motion_leaves_rotation_unchanged_forever() {
        let (mut arena, field) = build(MotionPreference::Reduced);
        // Velocities are still assigned under reduced motion.
        assert_eq!(field.spins().len(), OBJECT_COUNT);

        for _ in 0..250 {
            field.update(&mut arena);
        }
        for handle in field.handles() {
            assert_eq!(arena.get(*handle).unwrap().transform.rotation, Vec3::ZERO);
        }
    }
}
