//! Point and rectangle value types.
//!
//! Both types validate their coordinates on construction, so every `Point`
//! and `Rect` reachable from safe code is well-formed: coordinates of a point
//! are finite and bounded by [`Point::MAX_COORDINATE`], and rectangle bounds
//! are ordered. Negative zero is normalized to positive zero so that
//! equality, ordering and hashing agree.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// An immutable point in the plane with finite, bounded `f64` coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Largest accepted coordinate magnitude.
    ///
    /// Keeps the squared distance between any two points finite: with both
    /// coordinates bounded by `M`, it is at most `8 * M^2`, well below `f64::MAX`.
    pub const MAX_COORDINATE: f64 = 3.0e153;

    /// Creates a point.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if either coordinate is NaN or infinite,
    /// or larger in magnitude than [`Point::MAX_COORDINATE`].
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::Point;
    ///
    /// let p = Point::new(0.25, 0.75).unwrap();
    /// assert_eq!(p.x(), 0.25);
    /// assert!(Point::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "point coordinates must be finite, got ({x}, {y})"
            )));
        }
        if x.abs() > Self::MAX_COORDINATE || y.abs() > Self::MAX_COORDINATE {
            return Err(Error::InvalidArgument(format!(
                "point coordinates must not exceed {:e} in magnitude, got ({x}, {y})",
                Self::MAX_COORDINATE
            )));
        }
        // + 0.0 maps -0.0 to 0.0
        Ok(Self { x: x + 0.0, y: y + 0.0 })
    }

    /// The x-coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y-coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate on the split axis: x when `vertical`, y otherwise.
    #[inline]
    pub(crate) fn coord(&self, vertical: bool) -> f64 {
        if vertical { self.x } else { self.y }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

// Coordinates are always finite, so `==` is a total equivalence.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// Orders by y, then by x.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = Error;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Self::new(x, y)
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = Error;

    fn try_from([x, y]: [f64; 2]) -> Result<Self> {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`, boundary inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Self = Self { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 };

    /// Creates a rectangle from its bounds `(xmin, ymin, xmax, ymax)`.
    ///
    /// Infinite bounds are accepted, so half-planes and strips can be used as
    /// range queries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if a bound is NaN or if
    /// `xmin > xmax` or `ymin > ymax`.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::Rect;
    ///
    /// let r = Rect::new(0.1, 0.1, 0.6, 0.6).unwrap();
    /// assert!((r.width() - 0.5).abs() < 1e-12);
    /// assert!(Rect::new(0.6, 0.0, 0.1, 1.0).is_err());
    /// ```
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        if xmin.is_nan() || ymin.is_nan() || xmax.is_nan() || ymax.is_nan() {
            return Err(Error::InvalidArgument(format!(
                "rectangle bounds must not be NaN, got [{xmin}, {xmax}] x [{ymin}, {ymax}]"
            )));
        }
        if xmin > xmax || ymin > ymax {
            return Err(Error::InvalidArgument(format!(
                "rectangle bounds are inverted: [{xmin}, {xmax}] x [{ymin}, {ymax}]"
            )));
        }
        Ok(Self { xmin: xmin + 0.0, ymin: ymin + 0.0, xmax: xmax + 0.0, ymax: ymax + 0.0 })
    }

    /// Minimum x.
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Minimum y.
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Maximum x.
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Maximum y.
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Lower bound on the split axis: xmin when `vertical`, ymin otherwise.
    #[inline]
    pub(crate) fn min_on(&self, vertical: bool) -> f64 {
        if vertical { self.xmin } else { self.ymin }
    }

    /// Upper bound on the split axis: xmax when `vertical`, ymax otherwise.
    #[inline]
    pub(crate) fn max_on(&self, vertical: bool) -> f64 {
        if vertical { self.xmax } else { self.ymax }
    }

    /// The part of this rectangle below `split` on the given axis.
    ///
    /// Does not validate: a split outside the rectangle yields inverted
    /// bounds, which only happens for points stored outside the unit square.
    #[inline]
    pub(crate) fn lower_part(&self, vertical: bool, split: f64) -> Self {
        if vertical {
            Self { xmax: split, ..*self }
        } else {
            Self { ymax: split, ..*self }
        }
    }

    /// The part of this rectangle at or above `split` on the given axis.
    #[inline]
    pub(crate) fn upper_part(&self, vertical: bool, split: f64) -> Self {
        if vertical {
            Self { xmin: split, ..*self }
        } else {
            Self { ymin: split, ..*self }
        }
    }

    /// Whether `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Whether the rectangles overlap. Touching edges or corners count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Squared distance from `p` to the closest point of the rectangle;
    /// zero when `p` is inside or on the boundary.
    #[inline]
    pub fn distance_squared_to(&self, p: &Point) -> f64 {
        let dx = axis_distance(p.x, self.xmin, self.xmax);
        let dy = axis_distance(p.y, self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Distance from `p` to the closest point of the rectangle.
    pub fn distance_to(&self, p: &Point) -> f64 {
        self.distance_squared_to(p).sqrt()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// Distance along an axis from `coordinate` to the interval `[min, max]`.
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
