//! Seeded point generators.
//!
//! Used by the property tests, the benches and the CLI `generate` command.
//! All draws are deterministic for a fixed seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Axis-aligned sampling box `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds2 {
    /// Square `[-half, half)²`.
    pub fn square(half: f64) -> Self {
        Self {
            x_min: -half,
            x_max: half,
            y_min: -half,
            y_max: half,
        }
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::square(1000.0)
    }
}

/// `n` points drawn uniformly from `bounds`.
///
/// Panics unless `x_min < x_max` and `y_min < y_max`.
pub fn uniform_points(n: usize, bounds: Bounds2, seed: u64) -> Vec<Point> {
    assert!(
        bounds.x_min < bounds.x_max,
        "Bounds2 requires x_min < x_max (got {} .. {})",
        bounds.x_min,
        bounds.x_max
    );
    assert!(
        bounds.y_min < bounds.y_max,
        "Bounds2 requires y_min < y_max (got {} .. {})",
        bounds.y_min,
        bounds.y_max
    );
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(bounds.x_min..bounds.x_max),
                rng.gen_range(bounds.y_min..bounds.y_max),
            )
        })
        .collect()
}

/// Regular `cols × rows` lattice with the given spacing, row-major.
///
/// Every neighboring pair ties at `spacing`; many points share each x.
pub fn grid_points(cols: usize, rows: usize, spacing: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            out.push(Point::new(c as f64 * spacing, r as f64 * spacing));
        }
    }
    out
}

/// Point set with a planted unique closest pair straddling the median x.
#[derive(Clone, Debug)]
pub struct Straddle {
    pub points: Vec<Point>,
    /// Planted left endpoint (x < 0).
    pub a: Point,
    /// Planted right endpoint (x > 0).
    pub b: Point,
}

/// About `n` jittered lattice points split evenly around `x = 0`, plus a pair
/// at `(±0.5, y0)`, shuffled.
///
/// Lattice spacing is 10 with jitter below 1 per axis, so lattice pairs are at
/// least 8 apart and the planted pair (distance 1) is at least 5 from every
/// lattice point. Both halves hold the same number of points, which puts the
/// planted pair on opposite sides of the x-median split.
pub fn straddling_pair(n: usize, seed: u64) -> Straddle {
    let mut rng = StdRng::seed_from_u64(seed);
    let half_cols = ((n as f64).sqrt() / 2.0).ceil().max(1.0) as usize;
    let rows = (n / (2 * half_cols)).max(1);
    let mut points = Vec::with_capacity(2 * half_cols * rows + 2);
    for r in 0..rows {
        let y = 10.0 * r as f64;
        for k in 0..half_cols {
            let off = 5.0 + 10.0 * k as f64;
            for x in [-off, off] {
                points.push(Point::new(
                    x + rng.gen_range(-0.99..0.99),
                    y + rng.gen_range(-0.99..0.99),
                ));
            }
        }
    }
    let y0 = 10.0 * rng.gen_range(0..rows) as f64 + 5.0;
    let a = Point::new(-0.5, y0);
    let b = Point::new(0.5, y0);
    points.push(a);
    points.push(b);
    points.shuffle(&mut rng);
    Straddle { points, a, b }
}
