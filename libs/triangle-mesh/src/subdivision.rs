//! # Subdivision Level
//!
//! Validated subdivision count `n` and the buffer sizes it implies.

use crate::error::MeshError;
use crate::index::triangular_number;

/// Number of rows (minus one) in the triangular grid.
///
/// Level `n` has `n + 1` rows; row `i` holds `i + 1` vertices. A level can
/// only be built from a non-negative integer.
///
/// # Example
///
/// ```rust
/// use triangle_mesh::SubdivisionLevel;
///
/// let level = SubdivisionLevel::new(2).unwrap();
/// assert_eq!(level.vertex_count(), 6);
/// assert_eq!(level.triangle_count(), 4);
/// assert!(SubdivisionLevel::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubdivisionLevel(u32);

impl SubdivisionLevel {
    /// Creates a level from a signed count, rejecting negatives and values
    /// beyond `u32`.
    pub fn new(n: i64) -> Result<Self, MeshError> {
        if n < 0 {
            return Err(MeshError::invalid_argument(format!(
                "subdivisions must be >= 0, got {n}"
            )));
        }
        u32::try_from(n).map(Self).map_err(|_| {
            MeshError::invalid_argument(format!("subdivisions out of range: {n}"))
        })
    }

    /// Returns the raw subdivision count.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns true for level zero, which has a single vertex and no triangles.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.0 == 0
    }

    /// Number of rows, `n + 1`.
    #[inline]
    pub fn row_count(self) -> u64 {
        self.0 as u64 + 1
    }

    /// Number of vertices, `(n + 1)(n + 2) / 2`.
    #[inline]
    pub fn vertex_count(self) -> u64 {
        triangular_number(self.0) + self.0 as u64 + 1
    }

    /// Number of triangles, `n²`.
    #[inline]
    pub fn triangle_count(self) -> u64 {
        let n = self.0 as u64;
        n * n
    }
}

impl From<u32> for SubdivisionLevel {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

impl TryFrom<i64> for SubdivisionLevel {
    type Error = MeshError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_counts() {
        let cases = [(0, 1, 0), (1, 3, 1), (2, 6, 4), (3, 10, 9), (300, 45_451, 90_000)];
        for (n, vertices, triangles) in cases {
            let level = SubdivisionLevel::from(n);
            assert_eq!(level.vertex_count(), vertices, "n = {n}");
            assert_eq!(level.triangle_count(), triangles, "n = {n}");
            assert_eq!(level.row_count(), n as u64 + 1);
        }
    }

    #[test]
    fn test_level_rejects_negative() {
        let err = SubdivisionLevel::new(-1).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { .. }));
        assert!(SubdivisionLevel::try_from(i64::MIN).is_err());
    }

    #[test]
    fn test_level_rejects_out_of_range() {
        let err = SubdivisionLevel::new(u32::MAX as i64 + 1).unwrap_err();
        assert!(matches!(err, MeshError::InvalidArgument { .. }));
    }

    #[test]
    fn test_level_zero_is_degenerate() {
        assert!(SubdivisionLevel::new(0).unwrap().is_degenerate());
        assert!(!SubdivisionLevel::new(1).unwrap().is_degenerate());
    }

    #[test]
    fn test_counts_do_not_overflow_at_max() {
        let level = SubdivisionLevel::from(u32::MAX);
        assert!(level.vertex_count() > u32::MAX as u64);
        assert_eq!(level.triangle_count(), (u32::MAX as u64).pow(2));
    }
}
