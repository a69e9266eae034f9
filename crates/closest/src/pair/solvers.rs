//! Closest-pair solvers.
//!
//! - `solve`: divide and conquer, O(n log n).
//! - `solve_brute_force`: all pairs, O(n²).
//! - `Algorithm`: runtime selection between the two.
//!
//! Recursion (`closest_rec`) on a rank range `[lo, lo + n)` of the x-ordering
//! with its y-ordered rank list:
//! - n ≤ 3: brute force.
//! - otherwise split at `mid = n / 2` (left gets ranks `< lo + mid`), recurse,
//!   take the better half as `best`, then scan the strip `|x - x_mid| < delta`
//!   in y-order, comparing each point only with successors whose y-gap is
//!   below the current `best.dist`.

use std::fmt;
use std::str::FromStr;

use super::cfg::{BRUTE_FORCE_MAX, MIN_POINTS};
use super::error::PairError;
use super::ordered::Orderings;
use super::types::{PairResult, Point};

/// Closest pair by divide and conquer.
///
/// Errors with `InsufficientInput` if `points.len() < 2`. Coordinates must be
/// finite.
pub fn solve(points: &[Point]) -> Result<PairResult, PairError> {
    require_pair(points)?;
    let ord = Orderings::new(points);
    Ok(closest_rec(&ord, 0, ord.by_y_ranks()))
}

/// Closest pair by exhaustive comparison, first-found wins among ties.
pub fn solve_brute_force(points: &[Point]) -> Result<PairResult, PairError> {
    require_pair(points)?;
    Ok(brute_force(points))
}

#[inline]
fn require_pair(points: &[Point]) -> Result<(), PairError> {
    if points.len() < MIN_POINTS {
        return Err(PairError::InsufficientInput { got: points.len() });
    }
    Ok(())
}

fn brute_force(points: &[Point]) -> PairResult {
    let mut best = PairResult::unbounded();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            best.improve(p, q);
        }
    }
    best
}

fn closest_rec(ord: &Orderings, lo: usize, ys: &[usize]) -> PairResult {
    let n = ys.len();
    let xs = &ord.by_x()[lo..lo + n];
    if n <= BRUTE_FORCE_MAX {
        return brute_force(xs);
    }

    let mid = n / 2;
    let mid_x = xs[mid].x;
    let (yl, yr) = Orderings::split(ys, lo + mid);
    debug_assert_eq!(yl.len(), mid);

    let left = closest_rec(ord, lo, &yl);
    let right = closest_rec(ord, lo + mid, &yr);
    let mut best = if left.dist < right.dist { left } else { right };
    let delta = best.dist;

    let strip: Vec<Point> = ys
        .iter()
        .map(|&r| *ord.point(r))
        .filter(|p| (p.x - mid_x).abs() < delta)
        .collect();
    scan_strip(&strip, &mut best);
    best
}

/// Strip points are y-sorted, so once a successor is `best.dist` or more
/// above `p` in y no later one can be closer. At most ~7 comparisons per point.
fn scan_strip(strip: &[Point], best: &mut PairResult) {
    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if q.y - p.y >= best.dist {
                break;
            }
            best.improve(p, q);
        }
    }
}

/// Solver selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    #[default]
    DivideConquer,
    BruteForce,
}

impl Algorithm {
    pub fn solve(self, points: &[Point]) -> Result<PairResult, PairError> {
        match self {
            Algorithm::DivideConquer => solve(points),
            Algorithm::BruteForce => solve_brute_force(points),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DivideConquer => write!(f, "dc"),
            Algorithm::BruteForce => write!(f, "brute"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dc" | "divide-conquer" => Ok(Algorithm::DivideConquer),
            "brute" | "brute-force" => Ok(Algorithm::BruteForce),
            other => Err(format!("unknown algorithm '{other}' (expected dc|brute)")),
        }
    }
}
