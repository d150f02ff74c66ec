//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use triangle_mesh::MeshBuffers;
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_triangle_mesh(64, true);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// if (mesh.has_uvs()) {
///     geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// }
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Name the host installed the mesh under
    name: String,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, ...], empty when disabled
    uvs: Vec<f32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the mesh name.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the UVs as a Float32Array, if they were generated.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Option<js_sys::Float32Array> {
        self.has_uvs()
            .then(|| js_sys::Float32Array::from(&self.uvs[..]))
    }

    /// Returns true if the mesh has UVs.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a handle from mesh buffers, converting them to f32.
    pub fn from_mesh(name: impl Into<String>, mesh: &MeshBuffers) -> Self {
        Self {
            name: name.into(),
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            uvs: mesh.uvs_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Flat vertex buffer, for host-side callers.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Flat index buffer, for host-side callers.
    ///
    /// # Examples
    /// ```
    /// use triangle_mesh_wasm::generate_triangle_mesh_internal;
    ///
    /// let mesh = generate_triangle_mesh_internal(1, true).unwrap();
    /// assert_eq!(mesh.index_buffer(), &[0, 1, 2]);
    /// ```
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Flat normal buffer, for host-side callers.
    pub fn normal_buffer(&self) -> &[f32] {
        &self.normals
    }

    /// Flat UV buffer, for host-side callers.
    pub fn uv_buffer(&self) -> &[f32] {
        &self.uvs
    }
}
