//! Point and pair types.
//!
//! - `Point`: `nalgebra::Point2<f64>`, an immutable coordinate pair.
//! - `PairResult`: two points plus their Euclidean distance.

/// A point in the plane.
pub type Point = nalgebra::Point2<f64>;

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn dist(p: &Point, q: &Point) -> f64 {
    nalgebra::distance(p, q)
}

/// Best pair found so far (final answer at the top level).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairResult {
    pub a: Point,
    pub b: Point,
    pub dist: f64,
}

impl PairResult {
    /// Pair `(a, b)` with its distance computed.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            dist: dist(&a, &b),
        }
    }

    /// Sentinel with infinite distance; any real pair improves on it.
    #[inline]
    pub(crate) fn unbounded() -> Self {
        Self {
            a: Point::origin(),
            b: Point::origin(),
            dist: f64::INFINITY,
        }
    }

    /// True if `p` equals either endpoint (coordinate equality).
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.a == *p || self.b == *p
    }

    /// Unordered pair equality: `{a, b} == {p, q}`.
    pub fn is_pair(&self, p: &Point, q: &Point) -> bool {
        (self.a == *p && self.b == *q) || (self.a == *q && self.b == *p)
    }

    /// Replace `self` with `(p, q)` if strictly closer. Returns whether it did.
    #[inline]
    pub(crate) fn improve(&mut self, p: &Point, q: &Point) -> bool {
        let d = dist(p, q);
        if d < self.dist {
            *self = Self { a: *p, b: *q, dist: d };
            true
        } else {
            false
        }
    }
}
