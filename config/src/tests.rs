//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// GENERATOR DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_subdivisions_matches_generator() {
    assert_eq!(DEFAULT_SUBDIVISIONS, 300);
}

#[test]
fn test_default_generator_names() {
    assert_eq!(DEFAULT_MESH_NAME, "TriangularMesh");
    assert_eq!(DEFAULT_CALLBACK_METHOD, "OnMeshGenerated");
    assert!(DEFAULT_GENERATE_UVS);
}

#[test]
fn test_default_subdivisions_within_limits() {
    let n = DEFAULT_SUBDIVISIONS as usize;
    assert!((n + 1) * (n + 2) / 2 <= MAX_VERTICES);
    assert!(n * n <= MAX_TRIANGLES);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_vertex_limit_fits_u32_indices() {
    assert!(MAX_VERTICES <= u32::MAX as usize);
}

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_up_normal_is_unit_y() {
    let [x, y, z] = UP_NORMAL;
    assert_eq!((x, y, z), (0.0, 1.0, 0.0));
}

#[test]
fn test_apex_uv_is_origin() {
    assert_eq!(APEX_UV, [0.0, 0.0]);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}

// =============================================================================
// MESH CONFIG TESTS
// =============================================================================

#[test]
fn test_mesh_config_default_uses_constants() {
    let cfg = MeshConfig::default();
    assert_eq!(cfg.default_subdivisions, DEFAULT_SUBDIVISIONS);
    assert_eq!(cfg.max_vertices, MAX_VERTICES);
    assert_eq!(cfg.max_triangles, MAX_TRIANGLES);
}

#[test]
fn test_mesh_config_rejects_zero_limits() {
    assert_eq!(
        MeshConfig::new(10, 0, 100).unwrap_err(),
        ConfigError::InvalidVertexLimit(0)
    );
    assert_eq!(
        MeshConfig::new(10, 100, 0).unwrap_err(),
        ConfigError::InvalidTriangleLimit(0)
    );
}

#[test]
fn test_mesh_config_rejects_oversized_vertex_limit() {
    let too_many = u32::MAX as usize + 1;
    assert_eq!(
        MeshConfig::new(10, too_many, 100).unwrap_err(),
        ConfigError::InvalidVertexLimit(too_many)
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidTriangleLimit(0);
    assert_eq!(err.to_string(), "max_triangles must be positive: 0");
}
