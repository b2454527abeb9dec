//! Procedural unit meshes for every geometry kind. Object size comes
//! from the transform scale, so every mesh here is unit-sized.

use bytemuck::{Pod, Zeroable};
use folio_scene::GeometryKind;
use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub const ALL_GEOMETRIES: [GeometryKind; 7] = [
    GeometryKind::Torus,
    GeometryKind::Octahedron,
    GeometryKind::Icosahedron,
    GeometryKind::Sphere,
    GeometryKind::Cube,
    GeometryKind::Cylinder,
    GeometryKind::Plane,
];

/// Vertices and triangle indices for one geometry kind.
pub fn mesh(kind: GeometryKind) -> (Vec<Vertex>, Vec<u16>) {
    match kind {
        GeometryKind::Cube => cube(),
        GeometryKind::Plane => plane(),
        GeometryKind::Sphere => sphere(16, 12),
        GeometryKind::Torus => torus(1.0, 0.4, 24, 12),
        GeometryKind::Cylinder => cylinder(16),
        GeometryKind::Octahedron => faceted(&octahedron_faces()),
        GeometryKind::Icosahedron => faceted(&icosahedron_faces()),
    }
}

fn cube() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// Unit quad in the XZ plane, facing +Y.
fn plane() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let n = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex { position: [-p, 0.0, -p], normal: n },
        Vertex { position: [-p, 0.0, p], normal: n },
        Vertex { position: [p, 0.0, p], normal: n },
        Vertex { position: [p, 0.0, -p], normal: n },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Latitude/longitude sphere of radius 1.
fn sphere(segments: u16, rings: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let p = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex {
                position: p.to_array(),
                normal: p.to_array(),
            });
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

/// Torus around the Y axis.
fn torus(major: f32, tube: f32, major_segments: u16, tube_segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for i in 0..=major_segments {
        let u = TAU * i as f32 / major_segments as f32;
        let ring_center = Vec3::new(u.cos() * major, 0.0, u.sin() * major);
        for j in 0..=tube_segments {
            let v = TAU * j as f32 / tube_segments as f32;
            let normal = Vec3::new(u.cos() * v.cos(), v.sin(), u.sin() * v.cos());
            let position = ring_center + normal * tube;
            vertices.push(Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let stride = tube_segments + 1;
    for i in 0..major_segments {
        for j in 0..tube_segments {
            let a = i * stride + j;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

/// Closed cylinder of radius 1 and height 1 along Y.
fn cylinder(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let h = 0.5_f32;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side wall, normals radial.
    for i in 0..=segments {
        let theta = TAU * i as f32 / segments as f32;
        let (x, z) = (theta.cos(), theta.sin());
        vertices.push(Vertex {
            position: [x, -h, z],
            normal: [x, 0.0, z],
        });
        vertices.push(Vertex {
            position: [x, h, z],
            normal: [x, 0.0, z],
        });
    }
    for i in 0..segments {
        let a = i * 2;
        indices.extend_from_slice(&[a, a + 2, a + 1, a + 1, a + 2, a + 3]);
    }

    // Caps as triangle fans around center vertices.
    for (y, ny) in [(-h, -1.0_f32), (h, 1.0)] {
        let center = vertices.len() as u16;
        vertices.push(Vertex {
            position: [0.0, y, 0.0],
            normal: [0.0, ny, 0.0],
        });
        let first_rim = vertices.len() as u16;
        for i in 0..=segments {
            let theta = TAU * i as f32 / segments as f32;
            vertices.push(Vertex {
                position: [theta.cos(), y, theta.sin()],
                normal: [0.0, ny, 0.0],
            });
        }
        for i in 0..segments {
            let rim = first_rim + i;
            if ny > 0.0 {
                indices.extend_from_slice(&[center, rim, rim + 1]);
            } else {
                indices.extend_from_slice(&[center, rim + 1, rim]);
            }
        }
    }
    (vertices, indices)
}

/// Build a flat-shaded mesh from triangle corner positions.
fn faceted(faces: &[[Vec3; 3]]) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for face in faces {
        let normal = (face[1] - face[0]).cross(face[2] - face[0]).normalize();
        for corner in face {
            indices.push(vertices.len() as u16);
            vertices.push(Vertex {
                position: corner.to_array(),
                normal: normal.to_array(),
            });
        }
    }
    (vertices, indices)
}

fn octahedron_faces() -> Vec<[Vec3; 3]> {
    let (x, y, z) = (Vec3::X, Vec3::Y, Vec3::Z);
    vec![
        [x, y, z],
        [z, y, -x],
        [-x, y, -z],
        [-z, y, x],
        [z, -y, x],
        [-x, -y, z],
        [-z, -y, -x],
        [x, -y, -z],
    ]
}

fn icosahedron_faces() -> Vec<[Vec3; 3]> {
    // Vertices from three orthogonal golden rectangles, normalized to
    // the unit sphere.
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let v = |a: f32, b: f32, c: f32| Vec3::new(a, b, c).normalize();
    let verts = [
        v(-1.0, phi, 0.0),
        v(1.0, phi, 0.0),
        v(-1.0, -phi, 0.0),
        v(1.0, -phi, 0.0),
        v(0.0, -1.0, phi),
        v(0.0, 1.0, phi),
        v(0.0, -1.0, -phi),
        v(0.0, 1.0, -phi),
        v(phi, 0.0, -1.0),
        v(phi, 0.0, 1.0),
        v(-phi, 0.0, -1.0),
        v(-phi, 0.0, 1.0),
    ];
    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];
    FACES
        .iter()
        .map(|f| [verts[f[0]], verts[f[1]], verts[f[2]]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_produces_a_mesh() {
        for kind in ALL_GEOMETRIES {
            let (vertices, indices) = mesh(kind);
            assert!(!vertices.is_empty(), "{kind:?}");
            assert!(!indices.is_empty(), "{kind:?}");
            assert_eq!(indices.len() % 3, 0, "{kind:?}");
        }
    }

    #[test]
    fn indices_stay_in_range() {
        for kind in ALL_GEOMETRIES {
            let (vertices, indices) = mesh(kind);
            let max = *indices.iter().max().unwrap() as usize;
            assert!(max < vertices.len(), "{kind:?}");
        }
    }

    #[test]
    fn normals_are_unit_length() {
        for kind in ALL_GEOMETRIES {
            let (vertices, _) = mesh(kind);
            for v in vertices {
                let n = Vec3::from_array(v.normal);
                assert!((n.length() - 1.0).abs() < 1e-4, "{kind:?}");
            }
        }
    }

    #[test]
    fn icosahedron_has_twenty_faces() {
        let (vertices, indices) = mesh(GeometryKind::Icosahedron);
        assert_eq!(indices.len(), 20 * 3);
        assert_eq!(vertices.len(), 20 * 3);
    }

    #[test]
    fn sphere_vertices_sit_on_the_unit_sphere() {
        let (vertices, _) = mesh(GeometryKind::Sphere);
        for v in vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 1.0).abs() < 1e-4);
        }
    }
}
