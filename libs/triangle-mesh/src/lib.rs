//! # Triangle Mesh
//!
//! Procedural tessellation of an equilateral triangle into a flat grid mesh.
//!
//! ## Architecture
//!
//! ```text
//! subdivisions (i64) → SubdivisionLevel → TriangleMeshBuilder → MeshBuffers
//!                                                                    ↓
//!                                  TriangularMeshGenerator → MeshTarget (host renderer)
//! ```
//!
//! ## Guarantees
//!
//! For `n` subdivisions the mesh has `(n + 1)(n + 2) / 2` vertices and `n²`
//! triangles. Vertex `(row, column)` always lives at
//! [`index::vertex_index`]`(row, column)`, every index is in range, all
//! normals point along `+Y` and all triangles share one winding.
//!
//! ## Usage
//!
//! ```rust
//! let mesh = triangle_mesh::build(2, true)?;
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.triangle_count(), 4);
//! assert_eq!(mesh.uvs().len(), 6);
//! # Ok::<(), triangle_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod index;
pub mod mesh;
pub mod subdivision;

pub use builder::{build, BuildOptions, TriangleMeshBuilder, Winding, ZeroSubdivisionPolicy};
pub use error::MeshError;
pub use generator::{
    CallbackTarget, CompletionCallback, GeneratorSettings, GeneratorState, MeshTarget, NoCallback,
    StartOutcome, TriangularMeshGenerator,
};
pub use mesh::{MeshBuffers, MeshParts};
pub use subdivision::SubdivisionLevel;
