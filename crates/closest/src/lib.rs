//! Closest pair of points in the plane.
//!
//! The core is a divide-and-conquer solver (`pair::solve`) running in
//! O(n log n): sort once by x and by y, split at the x-median, recurse, and
//! recombine through a y-ordered strip scan with a bounded neighbor window.
//! An exhaustive O(n²) reference (`pair::solve_brute_force`) shares the same
//! contract and is used for cross-checks.
//!
//! The crate is pure: no I/O, no logging, no shared state. Parsing point
//! sources and formatting results belong to callers (see the `cli` crate).

pub mod pair;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use pair::{solve, solve_brute_force, Algorithm, PairError, PairResult, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::pair::rand::{grid_points, straddling_pair, uniform_points, Bounds2};
    pub use crate::pair::{
        dist, solve, solve_brute_force, Algorithm, Orderings, PairError, PairResult, Point,
    };
}
