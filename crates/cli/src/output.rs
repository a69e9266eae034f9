//! Result presentation (text and JSON).

use closest::{Algorithm, PairResult};
use serde::Serialize;

/// Printed when fewer than two points were read.
pub const INSUFFICIENT_MSG: &str = "Need at least two points.";

/// Fixed six-decimal text block.
pub fn render_text(r: &PairResult) -> String {
    format!(
        "Closest points:\n  P1 = ({:.6}, {:.6})\n  P2 = ({:.6}, {:.6})\nDistance: {:.6}\n",
        r.a.x, r.a.y, r.b.x, r.b.y, r.dist
    )
}

/// JSON shape of a solved input.
#[derive(Debug, Serialize)]
pub struct PairReport {
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub dist: f64,
    pub n: usize,
    pub algo: String,
}

impl PairReport {
    pub fn new(r: &PairResult, n: usize, algo: Algorithm) -> Self {
        Self {
            a: [r.a.x, r.a.y],
            b: [r.b.x, r.b.y],
            dist: r.dist,
            n,
            algo: algo.to_string(),
        }
    }
}
