use super::node::Coordinate;

/// Manhattan (L1) distance. Admissible and consistent for 4-directional
/// unit-cost moves.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
