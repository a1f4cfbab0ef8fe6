//! The operation surface shared by every point container in the crate.

use crate::geometry::{Point, Rect};

/// A set of distinct points answering membership, range and nearest queries.
///
/// [`KdTree`](crate::KdTree) implements it with a space-partitioning tree;
/// [`PointSet`](crate::PointSet) implements it by exhaustive scan. Code written
/// against the trait can swap one for the other, which is how the tree is
/// checked against the scan in tests and benchmarks.
pub trait PointIndex {
    /// Stores `point` unless an equal point is already present.
    ///
    /// Returns `true` if the point was newly stored.
    fn insert(&mut self, point: Point) -> bool;

    /// Whether a point equal to `point` is stored.
    fn contains(&self, point: &Point) -> bool;

    /// Number of distinct stored points.
    fn size(&self) -> usize;

    /// Whether no points are stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// All stored points inside or on the boundary of `rect`.
    fn range(&self, rect: &Rect) -> Vec<Point>;

    /// The stored point closest to `query`, or `None` when empty.
    fn nearest(&self, query: &Point) -> Option<Point>;
}
