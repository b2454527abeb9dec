//! Neural map: one node per skill on a horizontal circle, edges between
//! same-category nodes, pointer-drag rotation of the whole ring.
//!
//! # Invariants
//! - Layout and the edge set are computed once at mount; the O(K^2) pair
//!   scan never runs per frame.
//! - The edge vertex buffer is rewritten from current node positions every
//!   frame, even under reduced motion: reduced motion suppresses the
//!   oscillation sources, not the geometry sync.
//! - Drag rotation is cumulative and invertible; there is no inertia.

use folio_common::{Color, MotionPreference};
use folio_content::Skill;
use folio_scene::{Frame, GeometryKind, LineBatch, ObjectHandle, SceneArena, SceneObject};
use glam::Vec3;

/// Radius of the node circle.
pub const RING_RADIUS: f32 = 6.0;
/// Node sphere radius.
pub const NODE_RADIUS: f32 = 0.5;
/// Per-frame own-axis rotation increment.
const NODE_SPIN: f32 = 0.01;
/// Vertical bob: `y = base + sin(t * BOB_OMEGA + i) * BOB_AMPLITUDE`.
const BOB_OMEGA: f32 = 1.0;
const BOB_AMPLITUDE: f32 = 0.15;
/// Edge opacity pulse: `0.15 + sin(3 t) * 0.15`.
const EDGE_OPACITY_BASE: f32 = 0.15;
const EDGE_OPACITY_AMPLITUDE: f32 = 0.15;
const EDGE_PULSE_RATE: f32 = 3.0;

const EDGE_COLOR: Color = Color(0xc77dff);

/// Skill visualizer controller. Owns node handles, the fixed base
/// heights, and the edge index pairs; positions live in the arena.
pub struct NeuralMap {
    nodes: Vec<ObjectHandle>,
    base_heights: Vec<f32>,
    edges: Vec<(usize, usize)>,
    motion: MotionPreference,
}

impl NeuralMap {
    /// Lay the skills out on the ring and materialize the edge batch.
    ///
    /// Node i sits at angle `2 pi i / K` with the fixed deterministic wave
    /// `y = sin(1.2 i) * 2`, so a given skill list always reproduces the
    /// same layout. Edges connect every unordered same-category pair.
    pub fn new(
        arena: &mut SceneArena,
        skills: &[Skill],
        motion: MotionPreference,
    ) -> (Self, LineBatch) {
        let count = skills.len();
        let mut nodes = Vec::with_capacity(count);
        let mut base_heights = Vec::with_capacity(count);

        for (i, skill) in skills.iter().enumerate() {
            let angle = i as f32 / count as f32 * std::f32::consts::TAU;
            let y = (i as f32 * 1.2).sin() * 2.0;

            let mut node = SceneObject::new(GeometryKind::Sphere, skill.color);
            node.transform.position =
                Vec3::new(angle.cos() * RING_RADIUS, y, angle.sin() * RING_RADIUS);
            node.transform.scale = Vec3::splat(NODE_RADIUS);

            nodes.push(arena.insert(node));
            base_heights.push(y);
        }

        let mut edges = Vec::new();
        for i in 0..count {
            for j in (i + 1)..count {
                if skills[i].category == skills[j].category {
                    edges.push((i, j));
                }
            }
        }

        let mut batch = LineBatch::new(edges.len(), EDGE_COLOR, EDGE_OPACITY_BASE);
        let map = Self {
            nodes,
            base_heights,
            edges,
            motion,
        };
        map.sync_edges(arena, &mut batch);

        tracing::debug!(nodes = count, edges = map.edges.len(), "neural map built");
        (map, batch)
    }

    /// Per-frame update: bob, spin, and opacity pulse (motion permitting),
    /// then the unconditional edge sync.
    pub fn update(&self, arena: &mut SceneArena, lines: &mut LineBatch, frame: Frame) {
        if !self.motion.is_reduced() {
            let t = frame.seconds();
            for (i, handle) in self.nodes.iter().enumerate() {
                if let Some(node) = arena.get_mut(*handle) {
                    node.transform.rotation.y += NODE_SPIN;
                    node.transform.position.y = self.base_heights[i]
                        + (t * BOB_OMEGA + i as f32).sin() * BOB_AMPLITUDE;
                }
            }
            lines.opacity =
                EDGE_OPACITY_BASE + (t * EDGE_PULSE_RATE).sin() * EDGE_OPACITY_AMPLITUDE;
        }
        self.sync_edges(arena, lines);
    }

    /// Rotate every node's (x, z) about the vertical axis by `delta`
    /// radians. Cumulative across drags; this is the only way the ring's
    /// absolute orientation changes.
    pub fn drag(&self, arena: &mut SceneArena, delta: f32) {
        let (sin, cos) = delta.sin_cos();
        for handle in &self.nodes {
            if let Some(node) = arena.get_mut(*handle) {
                let p = node.transform.position;
                node.transform.position.x = p.x * cos - p.z * sin;
                node.transform.position.z = p.x * sin + p.z * cos;
            }
        }
    }

    /// Rewrite the edge vertex buffer from current node positions.
    fn sync_edges(&self, arena: &SceneArena, lines: &mut LineBatch) {
        for (seg, (i, j)) in self.edges.iter().enumerate() {
            let a = arena
                .get(self.nodes[*i])
                .map(|n| n.transform.position)
                .unwrap_or(Vec3::ZERO);
            let b = arena
                .get(self.nodes[*j])
                .map(|n| n.transform.position)
                .unwrap_or(Vec3::ZERO);
            lines.set_segment(seg, a, b);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[ObjectHandle] {
        &self.nodes
    }
}

pub fn crate_info() -> &'static str {
    "folio-neural v0.1.0"
}
