//! # kdtree2d - 2-d Tree Point Index
//!
//! A Rust library providing a 2-d tree (two-dimensional k-d tree) over points
//! in the unit square, answering membership, orthogonal range and
//! nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental Insertion**: Points are added one at a time; duplicates are ignored
//! - **Range Queries**: All points inside an axis-aligned rectangle, boundary inclusive
//! - **Nearest Neighbor**: Closest stored point to any query point
//! - **Validated Inputs**: Non-finite coordinates and inverted rectangles are rejected up front
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! let mut tree = KdTree::new();
//! for (x, y) in [(0.7, 0.2), (0.5, 0.4), (0.2, 0.3), (0.4, 0.7), (0.9, 0.6)] {
//!     tree.insert(Point::new(x, y)?);
//! }
//! assert_eq!(tree.size(), 5);
//! assert!(tree.contains(&Point::new(0.5, 0.4)?));
//!
//! // Points inside a rectangle (bounds are xmin, ymin, xmax, ymax)
//! let mut found = tree.range(&Rect::new(0.1, 0.1, 0.6, 0.6)?);
//! found.sort();
//! assert_eq!(found, vec![Point::new(0.2, 0.3)?, Point::new(0.5, 0.4)?]);
//!
//! // Closest stored point
//! let nearest = tree.nearest(&Point::new(0.6, 0.6)?);
//! assert_eq!(nearest, Some(Point::new(0.5, 0.4)?));
//! # Ok::<(), kdtree2d::Error>(())
//! ```
//!
//! ## How It Works
//!
//! Every stored point splits the region it was inserted into: points at even
//! depth split with a vertical line, points at odd depth with a horizontal
//! line. Each node remembers its region, so a range query skips any subtree
//! whose region misses the query rectangle, and a nearest-neighbor query skips
//! any subtree whose region is farther away than the best point found so far.
//! The nearest search always descends first into the side of a split that
//! holds the query point, which shrinks the best distance early and lets more
//! of the far side be skipped.
//!
//! The tree is never rebalanced. Inserting points in sorted order produces a
//! list-shaped tree and linear query times; random insertion order keeps the
//! expected depth logarithmic.

pub mod error;
pub mod geometry;
pub mod index;
pub mod kd_tree;
pub mod point_set;
pub mod prelude;

pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use index::PointIndex;
pub use kd_tree::KdTree;
#[doc(hidden)]
pub use point_set::PointSet;
