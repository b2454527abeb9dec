use folio_common::Color;
use glam::Vec3;

/// Stable index of an object within one `SceneArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(pub usize);

/// Procedural geometry selection for a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Torus,
    Octahedron,
    Icosahedron,
    Sphere,
    Cube,
    Cylinder,
    Plane,
}

/// Spatial transform with Euler rotation, which is what the per-frame
/// spin updates accumulate into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A positioned, rotated visual entity. Always owned by exactly one arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub geometry: GeometryKind,
    pub transform: Transform,
    pub color: Color,
    pub opacity: f32,
    pub wireframe: bool,
}

impl SceneObject {
    pub fn new(geometry: GeometryKind, color: Color) -> Self {
        Self {
            geometry,
            transform: Transform::default(),
            color,
            opacity: 1.0,
            wireframe: false,
        }
    }
}

/// Index arena owning every object of one render context.
///
/// Handles are stable for the lifetime of the arena; objects are only
/// removed wholesale via `clear` when the owning context is released.
#[derive(Debug, Default)]
pub struct SceneArena {
    objects: Vec<SceneObject>,
}

impl SceneArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: SceneObject) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len());
        self.objects.push(object);
        handle
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        self.objects.get_mut(handle.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &SceneObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectHandle(i), o))
    }

    /// Remove every object. Returns how many were freed.
    pub fn clear(&mut self) -> usize {
        let freed = self.objects.len();
        self.objects.clear();
        freed
    }
}

/// A fixed-size batch of line segments (2 vertices per segment).
///
/// Created once with its final segment count; endpoint positions are
/// rewritten every frame from the positions of the objects they connect.
#[derive(Debug, Clone)]
pub struct LineBatch {
    positions: Vec<Vec3>,
    pub color: Color,
    pub opacity: f32,
}

impl LineBatch {
    pub fn new(segment_count: usize, color: Color, opacity: f32) -> Self {
        Self {
            positions: vec![Vec3::ZERO; segment_count * 2],
            color,
            opacity,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Rewrite one segment's endpoints.
    pub fn set_segment(&mut self, index: usize, a: Vec3, b: Vec3) {
        self.positions[index * 2] = a;
        self.positions[index * 2 + 1] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn insert_returns_sequential_handles() {
        let mut arena = SceneArena::new();
        let a = arena.insert(SceneObject::new(GeometryKind::Cube, Color(0xffffff)));
        let b = arena.insert(SceneObject::new(GeometryKind::Sphere, Color(0x000000)));
        assert_eq!(a, ObjectHandle(0));
        assert_eq!(b, ObjectHandle(1));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut arena = SceneArena::new();
        let h = arena.insert(SceneObject::new(GeometryKind::Torus, Color(0x9d4edd)));
        arena.get_mut(h).unwrap().transform.position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(arena.get(h).unwrap().transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn clear_reports_freed_count() {
        let mut arena = SceneArena::new();
        for _ in 0..5 {
            arena.insert(SceneObject::new(GeometryKind::Cube, Color(0)));
        }
        assert_eq!(arena.clear(), 5);
        assert!(arena.is_empty());
    }

    #[test]
    fn line_batch_fixed_size() {
        let mut batch = LineBatch::new(3, Color(0xc77dff), 0.2);
        assert_eq!(batch.segment_count(), 3);
        assert_eq!(batch.positions().len(), 6);

        batch.set_segment(1, Vec3::X, Vec3::Y);
        assert_eq!(batch.positions()[2], Vec3::X);
        assert_eq!(batch.positions()[3], Vec3::Y);
        assert_eq!(batch.segment_count(), 3);
    }
}
