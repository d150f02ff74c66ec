//! # Configuration Constants
//!
//! Centralized constants for the triangular mesh pipeline. Precision values,
//! generator defaults and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Generator Defaults**: Values the host generator starts from
//! - **Limits**: Maximum values for safety bounds
//! - **Geometry**: Fixed vectors shared by every generated mesh

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and as the zero-area threshold when validating
/// triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// GENERATOR DEFAULTS
// =============================================================================

/// Default subdivision level of the host generator.
///
/// A level of `n` produces `n + 1` rows, `(n + 1)(n + 2) / 2` vertices and
/// `n²` triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SUBDIVISIONS;
///
/// let n = DEFAULT_SUBDIVISIONS as usize;
/// assert_eq!(n * n, 90_000);
/// ```
pub const DEFAULT_SUBDIVISIONS: u32 = 300;

/// Whether the host generator emits UV coordinates unless told otherwise.
pub const DEFAULT_GENERATE_UVS: bool = true;

/// Name given to meshes installed by the host generator.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MESH_NAME;
///
/// assert!(!DEFAULT_MESH_NAME.is_empty());
/// ```
pub const DEFAULT_MESH_NAME: &str = "TriangularMesh";

/// Method invoked on the completion target once a mesh is installed.
pub const DEFAULT_CALLBACK_METHOD: &str = "OnMeshGenerated";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion. It also keeps every vertex
/// index representable as `u32`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// With `n²` triangles per mesh this caps the subdivision level at 3162.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Normal shared by every vertex of the flat mesh (the `+Y` axis).
pub const UP_NORMAL: [f64; 3] = [0.0, 1.0, 0.0];

/// UV assigned to the apex vertex, where `u = j / i` is undefined.
///
/// # Example
///
/// ```rust
/// use config::constants::APEX_UV;
///
/// assert_eq!(APEX_UV, [0.0, 0.0]);
/// ```
pub const APEX_UV: [f64; 2] = [0.0, 0.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true if two values are equal within [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if a value is zero within [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(1e-3));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// MESH CONFIG
// =============================================================================

/// Immutable snapshot of the limits and defaults used when building meshes.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.max_vertices > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshConfig {
    /// Subdivision level used when the host supplies none.
    pub default_subdivisions: u32,
    /// Upper bound on the vertex count of a generated mesh.
    pub max_vertices: usize,
    /// Upper bound on the triangle count of a generated mesh.
    pub max_triangles: usize,
}

impl MeshConfig {
    /// Builds a configuration, rejecting limits that are zero or that would
    /// overflow `u32` vertex indices.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let cfg = MeshConfig::new(16, 1_000, 1_000).expect("valid config");
    /// assert_eq!(cfg.default_subdivisions, 16);
    /// ```
    pub fn new(
        default_subdivisions: u32,
        max_vertices: usize,
        max_triangles: usize,
    ) -> Result<Self, ConfigError> {
        if max_vertices == 0 || max_vertices > u32::MAX as usize {
            return Err(ConfigError::InvalidVertexLimit(max_vertices));
        }
        if max_triangles == 0 {
            return Err(ConfigError::InvalidTriangleLimit(max_triangles));
        }
        Ok(Self {
            default_subdivisions,
            max_vertices,
            max_triangles,
        })
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            default_subdivisions: DEFAULT_SUBDIVISIONS,
            max_vertices: MAX_VERTICES,
            max_triangles: MAX_TRIANGLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the vertex limit is zero or exceeds the `u32` index range.
    InvalidVertexLimit(usize),
    /// Raised when the triangle limit is zero.
    InvalidTriangleLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVertexLimit(value) => {
                write!(f, "max_vertices must be in 1..=u32::MAX: {value}")
            }
            ConfigError::InvalidTriangleLimit(value) => {
                write!(f, "max_triangles must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
