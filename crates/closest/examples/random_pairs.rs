//! Solve a few generated inputs and compare against brute force.
//!
//! Usage:
//!   cargo run -p closest --example random_pairs -- uniform
//!   cargo run -p closest --example random_pairs -- straddle

use closest::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "uniform".to_string());
    match mode.as_str() {
        "uniform" => show_uniform(),
        "straddle" => show_straddle(),
        _ => {
            eprintln!("usage: random_pairs [uniform|straddle]");
        }
    }
}

fn show_uniform() {
    for (i, n) in [10usize, 100, 1000].into_iter().enumerate() {
        let pts = uniform_points(n, Bounds2::default(), 2025 + i as u64);
        let dc = solve(&pts).unwrap();
        let bf = solve_brute_force(&pts).unwrap();
        println!(
            "uniform n={n}: dc={:.6} brute={:.6} pair=({:.3}, {:.3})-({:.3}, {:.3})",
            dc.dist, bf.dist, dc.a.x, dc.a.y, dc.b.x, dc.b.y
        );
    }
}

fn show_straddle() {
    for seed in 0..5 {
        let s = straddling_pair(200, seed);
        let r = solve(&s.points).unwrap();
        println!(
            "straddle seed {seed}: n={} dist={:.6} planted_found={}",
            s.points.len(),
            r.dist,
            r.is_pair(&s.a, &s.b)
        );
    }
}
