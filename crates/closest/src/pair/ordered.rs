//! The two orderings of a point set and the membership-based y split.
//!
//! `by_x` holds the points sorted by (x, y). Every point is identified by its
//! x-rank: its index in `by_x`. The y-ordering is a list of x-ranks sorted by
//! (y, x). Subproblems of the recursion are contiguous rank ranges of `by_x`,
//! so whether a point belongs to the left half of a split is the integer test
//! `rank < split`. Points sharing the split x-coordinate therefore land on
//! exactly the side their position in `by_x` puts them on, duplicates included.

use std::cmp::Ordering;

use super::types::Point;

/// Lexicographic (x, y).
#[inline]
pub(crate) fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Lexicographic (y, x).
#[inline]
pub(crate) fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}

/// Points sorted by x, plus the y-ordering expressed as x-ranks.
#[derive(Clone, Debug)]
pub struct Orderings {
    by_x: Vec<Point>,
    by_y: Vec<usize>,
}

impl Orderings {
    /// Sort `points` once by (x, y) and once by (y, x).
    pub fn new(points: &[Point]) -> Self {
        let mut by_x = points.to_vec();
        by_x.sort_by(cmp_xy);
        let mut by_y: Vec<usize> = (0..by_x.len()).collect();
        by_y.sort_by(|&i, &j| cmp_yx(&by_x[i], &by_x[j]));
        Self { by_x, by_y }
    }

    /// Points in (x, y) order.
    #[inline]
    pub fn by_x(&self) -> &[Point] {
        &self.by_x
    }

    /// x-ranks in (y, x) order.
    #[inline]
    pub fn by_y_ranks(&self) -> &[usize] {
        &self.by_y
    }

    /// Points in (y, x) order.
    pub fn by_y(&self) -> impl Iterator<Item = &Point> + '_ {
        self.by_y.iter().map(move |&r| &self.by_x[r])
    }

    /// Point with x-rank `rank`.
    #[inline]
    pub fn point(&self, rank: usize) -> &Point {
        &self.by_x[rank]
    }

    /// Partition a y-ordered rank list at x-rank `split`.
    ///
    /// Ranks `< split` go left, the rest go right; relative y-order is kept on
    /// both sides.
    pub fn split(ys: &[usize], split: usize) -> (Vec<usize>, Vec<usize>) {
        let mut left = Vec::with_capacity(ys.len() / 2 + 1);
        let mut right = Vec::with_capacity(ys.len() / 2 + 1);
        for &r in ys {
            if r < split {
                left.push(r);
            } else {
                right.push(r);
            }
        }
        (left, right)
    }
}
