//! # Triangle Mesh Builder
//!
//! Tessellates an equilateral triangle with unit side length into `n` rows.
//!
//! ## Layout
//!
//! The apex sits at the origin and the triangle grows toward `-Z` in the
//! `Y = 0` plane. Vertex `(i, j)` (row `i`, column `j <= i`) is placed at
//!
//! ```text
//! x = (j - i / 2) / n
//! z = -sqrt(3) * i / (2n)
//! ```
//!
//! so every row is centered on `x = 0` and the bottom row spans
//! `x ∈ [-0.5, 0.5]` at `z = -sqrt(3) / 2`.
//!
//! ## Triangles
//!
//! Each cell between rows `i` and `i + 1` contributes an upward triangle
//! per column and a downward triangle between neighbouring columns, giving
//! `2i + 1` triangles for row `i` and `n²` in total.

use config::constants::{MeshConfig, APEX_UV, DEFAULT_GENERATE_UVS, UP_NORMAL};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::index::{row_start, vertex_index};
use crate::mesh::MeshBuffers;
use crate::subdivision::SubdivisionLevel;

/// What to do when zero subdivisions are requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSubdivisionPolicy {
    /// Return the apex vertex alone, with no triangles.
    #[default]
    SingleApex,
    /// Fail with [`MeshError::DegenerateInput`].
    Reject,
}

/// Triangle index order as seen from the `+Y` side, where the normals point.
///
/// The geometric normal of a triangle `[a, b, c]` is `(b - a) × (c - a)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winding {
    /// The grid's native order. Its geometric normals point to `-Y`,
    /// opposite the stored vertex normals.
    #[default]
    Clockwise,
    /// Last two indices swapped. Geometric normals point to `+Y` and agree
    /// with the stored vertex normals.
    CounterClockwise,
}

/// Options controlling what the builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Emit one UV per vertex.
    pub generate_uvs: bool,
    /// Behaviour for zero subdivisions.
    pub zero_policy: ZeroSubdivisionPolicy,
    /// Triangle index order.
    pub winding: Winding,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            generate_uvs: DEFAULT_GENERATE_UVS,
            zero_policy: ZeroSubdivisionPolicy::default(),
            winding: Winding::default(),
        }
    }
}

impl BuildOptions {
    /// Returns these options with UV generation set to `generate_uvs`.
    pub fn with_uvs(mut self, generate_uvs: bool) -> Self {
        self.generate_uvs = generate_uvs;
        self
    }
}

/// Builds triangulated meshes from a subdivision level.
///
/// The builder holds only its options and limits; every call allocates and
/// returns fresh buffers, so one builder can be shared freely.
///
/// # Example
///
/// ```rust
/// use triangle_mesh::{BuildOptions, SubdivisionLevel, TriangleMeshBuilder};
///
/// let builder = TriangleMeshBuilder::new(BuildOptions::default());
/// let mesh = builder.build(SubdivisionLevel::new(2).unwrap()).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriangleMeshBuilder {
    options: BuildOptions,
    limits: MeshConfig,
}

impl TriangleMeshBuilder {
    /// Creates a builder with the default limits.
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            limits: MeshConfig::default(),
        }
    }

    /// Replaces the vertex and triangle limits.
    pub fn with_limits(mut self, limits: MeshConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the options this builder was created with.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds the mesh for `level`.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateInput`] for level zero under
    ///   [`ZeroSubdivisionPolicy::Reject`]
    /// - [`MeshError::TooManyVertices`] / [`MeshError::TooManyTriangles`]
    ///   when the level exceeds the configured limits
    pub fn build(&self, level: SubdivisionLevel) -> Result<MeshBuffers, MeshError> {
        self.check(level)?;

        let mesh = if level.is_degenerate() {
            self.apex_only()
        } else {
            let n = level.get();
            let (vertices, normals, uvs) = self.grid_vertices(n);
            let triangles = self.grid_triangles(n);
            MeshBuffers::from_parts(vertices, normals, uvs, triangles)
        };

        log::debug!(
            "built triangle mesh: n={}, {} vertices, {} triangles, uvs={}",
            level.get(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.has_uvs(),
        );
        Ok(mesh)
    }

    fn check(&self, level: SubdivisionLevel) -> Result<(), MeshError> {
        if level.is_degenerate() && self.options.zero_policy == ZeroSubdivisionPolicy::Reject {
            return Err(MeshError::degenerate(
                "zero subdivisions produce a single vertex and no triangles",
            ));
        }

        // Indices are stored as u32 whatever the configured limit says.
        let max_vertices = self.limits.max_vertices.min(u32::MAX as usize);
        let vertex_count = level.vertex_count();
        if vertex_count > max_vertices as u64 {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: max_vertices,
            });
        }

        let triangle_count = level.triangle_count();
        if triangle_count > self.limits.max_triangles as u64 {
            return Err(MeshError::TooManyTriangles {
                count: triangle_count,
                max: self.limits.max_triangles,
            });
        }

        Ok(())
    }

    fn apex_only(&self) -> MeshBuffers {
        let uvs = if self.options.generate_uvs {
            vec![DVec2::from_array(APEX_UV)]
        } else {
            Vec::new()
        };
        MeshBuffers::from_parts(
            vec![DVec3::ZERO],
            vec![DVec3::from_array(UP_NORMAL)],
            uvs,
            Vec::new(),
        )
    }

    /// Emits positions, normals and UVs row by row, so that vertex `(i, j)`
    /// lands at `vertex_index(i, j)`. Requires `n > 0`.
    fn grid_vertices(&self, n: u32) -> (Vec<DVec3>, Vec<DVec3>, Vec<DVec2>) {
        let count = SubdivisionLevel::from(n).vertex_count() as usize;
        let n_f = n as f64;
        let sqrt3 = 3f64.sqrt();

        let mut vertices = Vec::with_capacity(count);
        let mut uvs = Vec::with_capacity(if self.options.generate_uvs { count } else { 0 });

        for i in 0..=n {
            let i_f = i as f64;
            let row_z = -sqrt3 * i_f / (2.0 * n_f);
            let v = i_f / n_f;

            for j in 0..=i {
                let j_f = j as f64;
                let row_x = (j_f - i_f / 2.0) / n_f;
                debug_assert_eq!(vertices.len(), vertex_index(i, j) as usize);
                vertices.push(DVec3::new(row_x, 0.0, row_z));

                if self.options.generate_uvs {
                    let u = if i == 0 { APEX_UV[0] } else { j_f / i_f };
                    uvs.push(DVec2::new(u, v));
                }
            }
        }

        let normals = vec![DVec3::from_array(UP_NORMAL); count];
        (vertices, normals, uvs)
    }

    fn grid_triangles(&self, n: u32) -> Vec<[u32; 3]> {
        let count = SubdivisionLevel::from(n).triangle_count() as usize;
        let mut triangles = Vec::with_capacity(count);

        // The vertex limit has been checked, so every index fits in u32.
        for i in 0..n {
            let start = row_start(i) as u32;
            let next_start = row_start(i + 1) as u32;

            for j in 0..=i {
                let v0 = start + j;
                let v1 = next_start + j;
                let v2 = next_start + j + 1;
                triangles.push(self.wind(v0, v1, v2));

                if j < i {
                    let v3 = start + j + 1;
                    triangles.push(self.wind(v0, v2, v3));
                }
            }
        }

        debug_assert_eq!(triangles.len(), count);
        triangles
    }

    #[inline]
    fn wind(&self, a: u32, b: u32, c: u32) -> [u32; 3] {
        match self.options.winding {
            Winding::Clockwise => [a, b, c],
            Winding::CounterClockwise => [a, c, b],
        }
    }
}

/// Builds a mesh with `n` subdivisions using the default options.
///
/// Level zero yields the apex vertex alone.
///
/// # Errors
///
/// Returns [`MeshError::InvalidArgument`] if `n` is negative, before
/// anything is allocated.
///
/// # Example
///
/// ```rust
/// let mesh = triangle_mesh::build(2, false).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert!(mesh.uvs().is_empty());
///
/// assert!(triangle_mesh::build(-1, true).is_err());
/// ```
pub fn build(n: i64, generate_uvs: bool) -> Result<MeshBuffers, MeshError> {
    let level = SubdivisionLevel::new(n)?;
    TriangleMeshBuilder::new(BuildOptions::default().with_uvs(generate_uvs)).build(level)
}
