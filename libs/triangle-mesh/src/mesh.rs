//! # Mesh Buffers
//!
//! Immutable output of the builder: positions, normals, optional UVs and
//! triangle indices.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh produced by [`TriangleMeshBuilder`](crate::TriangleMeshBuilder).
///
/// All geometry is stored as f64. Export to f32 only happens at the
/// rendering boundary. The buffers cannot be modified once built; use
/// [`MeshBuffers::into_parts`] to take ownership of them.
///
/// # Example
///
/// ```rust
/// let mesh = triangle_mesh::build(1, true).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Vertex normals, one per vertex
    normals: Vec<DVec3>,
    /// Texture coordinates, one per vertex or empty
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

/// Owned buffers of a [`MeshBuffers`], in declaration order.
pub type MeshParts = (Vec<DVec3>, Vec<DVec3>, Vec<DVec2>, Vec<[u32; 3]>);

impl MeshBuffers {
    pub(crate) fn from_parts(
        vertices: Vec<DVec3>,
        normals: Vec<DVec3>,
        uvs: Vec<DVec2>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert!(uvs.is_empty() || uvs.len() == vertices.len());
        Self {
            vertices,
            normals,
            uvs,
            triangles,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if UV coordinates were generated.
    #[inline]
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the UV coordinates; empty when UVs are disabled.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Consumes the mesh, returning `(vertices, normals, uvs, triangles)`.
    pub fn into_parts(self) -> MeshParts {
        (self.vertices, self.normals, self.uvs, self.triangles)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns the unnormalized geometric normal of a triangle,
    /// `(v1 - v0) × (v2 - v0)`.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.vertex(a);
        (self.vertex(b) - v0).cross(self.vertex(c) - v0)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every per-vertex buffer matches the vertex count
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        if self.normals.len() != vertex_count {
            return false;
        }
        if !self.uvs.is_empty() && self.uvs.len() != vertex_count {
            return false;
        }

        self.triangles.iter().enumerate().all(|(i, tri)| {
            let in_range = tri.iter().all(|&v| (v as usize) < vertex_count);
            let distinct = tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2];
            in_range && distinct && self.face_normal(i).length() >= EPSILON
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_vec3(&self.normals)
    }

    /// Exports UVs as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array, empty when UVs are disabled.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_vec3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
