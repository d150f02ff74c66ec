//! # Triangular Indexing
//!
//! Closed-form mapping between `(row, column)` grid positions and flat
//! vertex indices. Vertices are stored row-major, row `i` holding `i + 1`
//! vertices, so row `i` starts at the triangular number `i(i + 1) / 2`.
//!
//! ```text
//! row 0:        0
//! row 1:      1   2
//! row 2:    3   4   5
//! row 3:  6   7   8   9
//! ```

/// Returns the `k`-th triangular number, `k(k + 1) / 2`.
///
/// # Example
///
/// ```rust
/// use triangle_mesh::index::triangular_number;
///
/// assert_eq!(triangular_number(0), 0);
/// assert_eq!(triangular_number(4), 10);
/// ```
#[inline]
pub const fn triangular_number(k: u32) -> u64 {
    let k = k as u64;
    k * (k + 1) / 2
}

/// Returns the flat index of the first vertex of `row`.
#[inline]
pub const fn row_start(row: u32) -> u64 {
    triangular_number(row)
}

/// Returns the flat index of the vertex at `(row, column)`.
///
/// `column` must not exceed `row`. The result is exact for every `u32` row;
/// meshes that pass the builder's vertex limit always fit in `u32`.
///
/// # Example
///
/// ```rust
/// use triangle_mesh::index::vertex_index;
///
/// assert_eq!(vertex_index(0, 0), 0);
/// assert_eq!(vertex_index(2, 1), 4);
/// assert_eq!(vertex_index(3, 3), 9);
/// assert_eq!(vertex_index(100_000, 0), 5_000_050_000);
/// ```
#[inline]
pub fn vertex_index(row: u32, column: u32) -> u64 {
    debug_assert!(column <= row, "column {column} outside row {row}");
    row_start(row) + column as u64
}

/// Returns the `(row, column)` grid position of a flat vertex index.
///
/// Inverse of [`vertex_index`]. `index` must not exceed
/// `vertex_index(u32::MAX, u32::MAX)`.
///
/// # Example
///
/// ```rust
/// use triangle_mesh::index::{row_column, vertex_index};
///
/// assert_eq!(row_column(4), (2, 1));
/// assert_eq!(row_column(vertex_index(7, 3)), (7, 3));
/// ```
pub fn row_column(index: u64) -> (u32, u32) {
    debug_assert!(index <= vertex_index(u32::MAX, u32::MAX), "index {index} past the last row");
    let k = index as u128;
    let t = |row: u128| row * (row + 1) / 2;

    // Largest row with T(row) <= k, estimated in floating point then corrected.
    let mut row = (((8.0 * index as f64 + 1.0).sqrt() - 1.0) / 2.0) as u128;
    while t(row) > k {
        row -= 1;
    }
    while t(row + 1) <= k {
        row += 1;
    }

    (row as u32, (k - t(row)) as u32)
}
