//! Brute-force reference point set.
//!
//! Stores points in an ordered set and answers range and nearest queries by
//! scanning every point. It exists to check [`KdTree`](crate::KdTree) results
//! against, and as a baseline in benchmarks.
//!
//! # Note
//! This is a reference implementation. For production use, see [`KdTree`](crate::KdTree).

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::geometry::{Point, Rect};
use crate::index::PointIndex;

/// Unindexed point collection with the same surface as the tree.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `point` unless an equal point is already present.
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    /// Whether an equal point is stored.
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Number of stored points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points inside `rect`, in (y, x) order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        self.points.iter().filter(|p| rect.contains(p)).copied().collect()
    }

    /// Closest point and its squared distance, scanning all points.
    pub fn nearest_with_distance(&self, query: &Point) -> Option<(Point, f64)> {
        let mut best: Option<(Point, f64)> = None;
        for p in &self.points {
            let d = query.distance_squared_to(p);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((*p, d));
            }
        }
        best
    }

    /// Closest point to `query`, or `None` when empty.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(p, _)| p)
    }

    /// Iterates the stored points in (y, x) order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl PointIndex for PointSet {
    fn insert(&mut self, point: Point) -> bool {
        Self::insert(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        Self::contains(self, point)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        Self::range(self, rect)
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        Self::nearest(self, query)
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
