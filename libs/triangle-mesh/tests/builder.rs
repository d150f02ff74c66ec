use std::thread;

use triangle_mesh::index::{row_column, vertex_index};
use triangle_mesh::{build, BuildOptions, MeshError, SubdivisionLevel, TriangleMeshBuilder};

#[test]
fn builds_through_public_api() {
    let mesh = build(5, true).unwrap();
    assert_eq!(mesh.vertex_count(), 21);
    assert_eq!(mesh.triangle_count(), 25);
    assert_eq!(mesh.vertices_f32().len(), 63);
    assert_eq!(mesh.normals_f32().len(), 63);
    assert_eq!(mesh.uvs_f32().len(), 42);
    assert_eq!(mesh.indices_u32().len(), 75);
}

#[test]
fn bounding_box_spans_unit_triangle() {
    let mesh = build(10, false).unwrap();
    let (min, max) = mesh.bounding_box();
    assert!((min.x + 0.5).abs() < 1e-12);
    assert!((max.x - 0.5).abs() < 1e-12);
    assert_eq!(min.y, 0.0);
    assert_eq!(max.y, 0.0);
    assert!((min.z + 3f64.sqrt() / 2.0).abs() < 1e-12);
    assert_eq!(max.z, 0.0);
}

#[test]
fn vertex_positions_match_grid_index() {
    let n = 7;
    let mesh = build(n as i64, false).unwrap();
    for row in 0..=n {
        for column in 0..=row {
            let v = mesh.vertex(vertex_index(row, column) as u32);
            let expected_x = (column as f64 - row as f64 / 2.0) / n as f64;
            assert!((v.x - expected_x).abs() < 1e-12, "({row}, {column})");
            assert_eq!(row_column(vertex_index(row, column)), (row, column));
        }
    }
}

#[test]
fn every_edge_is_shared_by_at_most_two_triangles() {
    use std::collections::HashMap;

    let mesh = build(6, false).unwrap();
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.triangles() {
        for k in 0..3 {
            let (a, b) = (tri[k], tri[(k + 1) % 3]);
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
    }
    assert!(edges.values().all(|&count| count <= 2));

    // Boundary edges: 3 sides of n segments each.
    let boundary = edges.values().filter(|&&count| count == 1).count();
    assert_eq!(boundary, 18);
}

#[test]
fn builder_is_shareable_across_threads() {
    let builder = TriangleMeshBuilder::new(BuildOptions::default());
    let reference = builder.build(SubdivisionLevel::from(12)).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| builder.build(SubdivisionLevel::from(12)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}

#[test]
fn negative_subdivisions_are_rejected() {
    match build(-1, true) {
        Err(MeshError::InvalidArgument { message }) => assert!(message.contains("-1")),
        other => panic!("expected invalid argument, got {other:?}"),
    }
}
