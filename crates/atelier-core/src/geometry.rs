//! Mesh geometry types
//!
//! The synthesizer emits a `Mesh`: a flat vertex/index buffer partitioned into
//! named parts, each with its own local-to-piece transform. Export and render
//! collaborators consume this representation read-only; the engine never
//! performs file encoding itself.

use serde::{Deserialize, Serialize};

/// Column-major 4x4 transform
pub type Transform = [[f32; 4]; 4];

/// Identity transform
pub const IDENTITY: Transform = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Translation transform
pub fn translation(x: f32, y: f32, z: f32) -> Transform {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ]
}

/// Apply a transform to a point
pub fn apply(transform: &Transform, p: [f32; 3]) -> [f32; 3] {
    [
        transform[0][0] * p[0] + transform[1][0] * p[1] + transform[2][0] * p[2] + transform[3][0],
        transform[0][1] * p[0] + transform[1][1] * p[1] + transform[2][1] * p[2] + transform[3][1],
        transform[0][2] * p[0] + transform[1][2] * p[1] + transform[2][2] * p[2] + transform[3][2],
    ]
}

/// A named region of a mesh with its placement transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPart {
    /// Part name, e.g. "seat", "leg-front-left"
    pub name: String,
    /// Local-to-piece placement
    pub transform: Transform,
    /// First index in the mesh index buffer belonging to this part
    pub index_start: u32,
    /// Number of indices belonging to this part
    pub index_count: u32,
}

/// Triangle mesh for one furniture piece.
///
/// Vertices are in part-local space; `MeshPart::transform` places each part in
/// piece space. Indices form a triangle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub parts: Vec<MeshPart>,
}

impl Mesh {
    /// An empty mesh
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            parts: Vec::new(),
        }
    }

    /// Append a named part. Triangle indices are local to `vertices` and are
    /// offset into the shared buffers.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
        vertices: &[[f32; 3]],
        triangles: &[[u32; 3]],
    ) {
        let base = self.vertices.len() as u32;
        let index_start = self.indices.len() as u32;

        self.vertices.extend_from_slice(vertices);
        for tri in triangles {
            self.indices.push(base + tri[0]);
            self.indices.push(base + tri[1]);
            self.indices.push(base + tri[2]);
        }

        self.parts.push(MeshPart {
            name: name.into(),
            transform,
            index_start,
            index_count: (triangles.len() * 3) as u32,
        });
    }

    /// Number of triangles
    pub fn polygon_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Estimated memory footprint in bytes
    pub fn memory_size(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<[f32; 3]>()
            + self.indices.len() * std::mem::size_of::<u32>()
            + self.parts.len() * std::mem::size_of::<MeshPart>()
    }

    /// Piece-space bounding box, if the mesh has any vertices
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        let mut any = false;

        for part in &self.parts {
            let start = (part.index_start / 3) as usize;
            let count = (part.index_count / 3) as usize;
            // Walk this part's indices so each vertex is placed by its transform
            for tri in start..start + count {
                for k in 0..3 {
                    let v = self.vertices[self.indices[tri * 3 + k] as usize];
                    let p = apply(&part.transform, v);
                    for axis in 0..3 {
                        min[axis] = min[axis].min(p[axis]);
                        max[axis] = max[axis].max(p[axis]);
                    }
                    any = true;
                }
            }
        }

        any.then_some((min, max))
    }

    /// Summarize the mesh for scoring
    pub fn summary(&self) -> MeshSummary {
        let (width, height, depth) = match self.bounds() {
            Some((min, max)) => (
                (max[0] - min[0]) as f64,
                (max[1] - min[1]) as f64,
                (max[2] - min[2]) as f64,
            ),
            None => (0.0, 0.0, 0.0),
        };
        MeshSummary {
            width,
            height,
            depth,
            polygon_count: self.polygon_count(),
        }
    }
}

/// Compact description of synthesized geometry, consumed by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    /// Bounding width in meters
    pub width: f64,
    /// Bounding height in meters
    pub height: f64,
    /// Bounding depth in meters
    pub depth: f64,
    /// Triangle count
    pub polygon_count: usize,
}
