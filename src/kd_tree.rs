//! 2-d tree over points in the unit square.
//!
//! Nodes are kept in a single arena and reference their children by `u32`
//! index, with `NIL` marking an empty slot. The root is node 0. Nodes are
//! only ever appended, so an index stays valid for the life of the tree and
//! every node is owned by exactly one parent slot.
//!
//! Each node owns a region: the rectangle handed to it when it was inserted.
//! The root owns the unit square; a node at even depth splits its region with
//! a vertical line through its point, a node at odd depth with a horizontal
//! line. Points strictly below the split go to `left_or_bottom`, the rest
//! (ties included) to `right_or_top`. The split orientation is not stored; it
//! flips on every step of a descent, starting vertical at the root.
//!
//! Points outside the unit square can be stored, but the regions created
//! beneath them stop bounding their subtrees. While any such point is
//! present, range and nearest queries prune with the splitting lines alone,
//! which is always exact but skips less.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::index::PointIndex;

/// Empty child slot.
pub(crate) const NIL: u32 = u32::MAX;

/// One stored point and the region its subtree is responsible for.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) region: Rect,
    pub(crate) left_or_bottom: u32,
    pub(crate) right_or_top: u32,
}

/// Space-partitioning tree answering membership, range and nearest-neighbor
/// queries over a set of distinct points.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree = KdTree::new();
/// for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
///     tree.insert(Point::new(x, y).unwrap());
/// }
/// assert_eq!(tree.size(), 5);
///
/// let query = Point::new(0.6, 0.6).unwrap();
/// assert_eq!(tree.nearest(&query), Some(Point::new(0.5, 0.4).unwrap()));
///
/// let rect = Rect::new(0.1, 0.1, 0.6, 0.6).unwrap();
/// assert_eq!(tree.range(&rect).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    /// Node arena; index 0 is the root
    pub(crate) nodes: Vec<Node>,
    /// Stored points lying outside the unit square
    pub(crate) outliers: usize,
}

impl KdTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity), outliers: 0 }
    }

    /// Number of stored points.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Alias of [`size`](Self::size) for callers expecting `Vec`-like naming.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut height = 0;
        let mut stack = vec![(0u32, 1usize)];
        while let Some((index, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[index as usize];
            for child in [node.left_or_bottom, node.right_or_top] {
                if child != NIL {
                    stack.push((child, level + 1));
                }
            }
        }
        height
    }

    /// Adds `point` unless an equal point is already stored.
    ///
    /// Returns `true` if the point was added. Points outside the unit square
    /// are accepted; see the module docs for how regions treat them.
    ///
    /// # Panics
    /// Panics if the tree already holds `u32::MAX` points.
    pub fn insert(&mut self, point: Point) -> bool {
        if self.nodes.is_empty() {
            let _root = self.push_node(point, Rect::UNIT);
            log::trace!("kd-tree: inserted root {point}");
            return true;
        }

        let mut index = 0usize;
        let mut vertical = true;
        let mut depth = 0usize;
        loop {
            let node = &self.nodes[index];
            if node.point == point {
                log::trace!("kd-tree: {point} already stored, insert ignored");
                return false;
            }

            let split = node.point.coord(vertical);
            let goes_lower = point.coord(vertical) < split;
            let (child, child_region) = if goes_lower {
                (node.left_or_bottom, node.region.lower_part(vertical, split))
            } else {
                (node.right_or_top, node.region.upper_part(vertical, split))
            };
            depth += 1;

            if child == NIL {
                let new_index = self.push_node(point, child_region);
                let parent = &mut self.nodes[index];
                if goes_lower {
                    parent.left_or_bottom = new_index;
                } else {
                    parent.right_or_top = new_index;
                }
                log::trace!("kd-tree: inserted {point} at depth {depth} in {child_region}");
                return true;
            }

            index = child as usize;
            vertical = !vertical;
        }
    }

    /// Whether a point equal to `point` is stored.
    pub fn contains(&self, point: &Point) -> bool {
        let mut index = if self.nodes.is_empty() { NIL } else { 0 };
        let mut vertical = true;
        while index != NIL {
            let node = &self.nodes[index as usize];
            if node.point == *point {
                return true;
            }
            index = if point.coord(vertical) < node.point.coord(vertical) {
                node.left_or_bottom
            } else {
                node.right_or_top
            };
            vertical = !vertical;
        }
        false
    }

    /// All stored points inside or on the boundary of `rect`.
    ///
    /// Points come out in tree pre-order: a node, then its left/bottom
    /// subtree, then its right/top subtree.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results);
        results
    }

    /// Appends every stored point inside `rect` to `results`.
    ///
    /// Results are appended to the output vector (not cleared first), so one
    /// buffer can serve many queries.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let tree: KdTree = [(0.2, 0.2), (0.8, 0.8)]
    ///     .into_iter()
    ///     .map(|p| Point::try_from(p).unwrap())
    ///     .collect();
    ///
    /// let mut results = Vec::new();
    /// tree.range_into(&Rect::new(0.0, 0.0, 0.5, 0.5).unwrap(), &mut results);
    /// assert_eq!(results, vec![Point::new(0.2, 0.2).unwrap()]);
    /// ```
    pub fn range_into(&self, rect: &Rect, results: &mut Vec<Point>) {
        let _visited = self.range_visit(rect, results);
    }

    /// Range search returning how many nodes were visited.
    pub(crate) fn range_visit(&self, rect: &Rect, results: &mut Vec<Point>) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let regions_bound = self.outliers == 0;
        let found_before = results.len();
        let mut visited = 0usize;
        let mut stack: Vec<(u32, bool)> = vec![(0, true)];

        while let Some((index, vertical)) = stack.pop() {
            let node = &self.nodes[index as usize];
            if regions_bound && !rect.intersects(&node.region) {
                continue;
            }
            visited += 1;

            if rect.contains(&node.point) {
                results.push(node.point);
            }

            // Without trustworthy regions, fall back to the splitting line:
            // left/bottom holds coordinates < split, right/top holds >= split.
            let split = node.point.coord(vertical);
            if node.right_or_top != NIL && (regions_bound || rect.max_on(vertical) >= split) {
                stack.push((node.right_or_top, !vertical));
            }
            if node.left_or_bottom != NIL && (regions_bound || rect.min_on(vertical) < split) {
                stack.push((node.left_or_bottom, !vertical));
            }
        }

        log::trace!(
            "kd-tree: range {rect} visited {visited}/{} nodes, found {}",
            self.nodes.len(),
            results.len() - found_before
        );
        visited
    }

    /// The stored point closest to `query`, or `None` when the tree is empty.
    ///
    /// When several stored points are equally close, the one reached first
    /// in the search order is returned.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_with_distance(query).map(|(point, _)| point)
    }

    /// The stored point closest to `query` with its squared distance.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new();
    /// tree.insert(Point::new(0.5, 0.4).unwrap());
    /// tree.insert(Point::new(0.9, 0.6).unwrap());
    ///
    /// let (p, d2) = tree.nearest_with_distance(&Point::new(0.6, 0.6).unwrap()).unwrap();
    /// assert_eq!(p, Point::new(0.5, 0.4).unwrap());
    /// assert!((d2 - 0.05).abs() < 1e-12);
    /// ```
    pub fn nearest_with_distance(&self, query: &Point) -> Option<(Point, f64)> {
        self.nearest_visit(query, true).0
    }

    /// Nearest search returning how many nodes were visited.
    ///
    /// `near_first` picks which side of each split is searched first; only
    /// `true` gives the intended pruning, `false` exists for comparison.
    pub(crate) fn nearest_visit(&self, query: &Point, near_first: bool) -> (Option<(Point, f64)>, usize) {
        let Some(root) = self.nodes.first() else {
            return (None, 0);
        };
        let mut best = root.point;
        let mut best_d = query.distance_squared_to(&best);

        let regions_bound = self.outliers == 0;
        let mut visited = 0usize;
        // (node, vertical, lower bound on squared distance from the splitting lines above)
        let mut stack: Vec<(u32, bool, f64)> = vec![(0, true, 0.0)];

        while let Some((index, vertical, gap)) = stack.pop() {
            let node = &self.nodes[index as usize];
            let lower_bound = if regions_bound {
                node.region.distance_squared_to(query)
            } else {
                gap
            };
            if lower_bound > best_d {
                continue;
            }
            visited += 1;

            let d = query.distance_squared_to(&node.point);
            if d < best_d {
                best = node.point;
                best_d = d;
            }

            // The side of the split holding the query goes on the stack last
            // so it is searched first and tightens best_d before the other
            // side is tested.
            let delta = query.coord(vertical) - node.point.coord(vertical);
            let (near, far) = if delta < 0.0 {
                (node.left_or_bottom, node.right_or_top)
            } else {
                (node.right_or_top, node.left_or_bottom)
            };
            let near = (near, !vertical, gap);
            let far = (far, !vertical, gap.max(delta * delta));
            let (first, second) = if near_first { (near, far) } else { (far, near) };
            for entry in [second, first] {
                if entry.0 != NIL {
                    stack.push(entry);
                }
            }
        }

        log::trace!(
            "kd-tree: nearest to {query} is {best} (d2 = {best_d}), visited {visited}/{} nodes",
            self.nodes.len()
        );
        (Some((best, best_d)), visited)
    }

    /// Iterates all stored points in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        let stack = if self.nodes.is_empty() { Vec::new() } else { vec![0] };
        Iter { nodes: &self.nodes, stack }
    }

    fn push_node(&mut self, point: Point, region: Rect) -> u32 {
        assert!(self.nodes.len() < NIL as usize, "kd-tree is full");
        if !Rect::UNIT.contains(&point) {
            self.outliers += 1;
            if self.outliers == 1 {
                log::debug!("kd-tree: {point} lies outside the unit square, region pruning disabled");
            }
        }
        let index = self.nodes.len() as u32;
        self.nodes.push(Node { point, region, left_or_bottom: NIL, right_or_top: NIL });
        index
    }
}

impl PointIndex for KdTree {
    fn insert(&mut self, point: Point) -> bool {
        Self::insert(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        Self::contains(self, point)
    }

    fn size(&self) -> usize {
        Self::size(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        Self::range(self, rect)
    }

    fn nearest(&self, query: &Point) -> Option<Point> {
        Self::nearest(self, query)
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            let _inserted = self.insert(point);
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`].
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    stack: Vec<u32>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let index = self.stack.pop()?;
        let node = &self.nodes[index as usize];
        if node.right_or_top != NIL {
            self.stack.push(node.right_or_top);
        }
        if node.left_or_bottom != NIL {
            self.stack.push(node.left_or_bottom);
        }
        Some(node.point)
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("pending", &self.stack.len()).finish_non_exhaustive()
    }
}
