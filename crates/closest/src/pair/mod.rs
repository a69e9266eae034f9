//! Closest pair (2D, Euclidean).
//!
//! Purpose
//! - `solve`: divide-and-conquer closest pair over an unordered point slice.
//! - `solve_brute_force`: all-pairs reference with the identical contract.
//!
//! Layout
//! - `types`: `Point`, `PairResult`, `dist`.
//! - `ordered`: the x/y orderings and the membership-based y split.
//! - `solvers`: recursion, strip scan, brute-force base case, `Algorithm`.
//! - `rand`: seeded point generators for tests, benches and the CLI.
//!
//! Ties
//! - A candidate replaces the current best only if strictly closer, so the
//!   first pair found wins among equals. Which tied pair that is depends on
//!   the input order and is not part of the contract.

mod cfg;
mod error;
pub mod ordered;
pub mod rand;
mod solvers;
mod types;

pub use error::PairError;
pub use ordered::Orderings;
pub use solvers::{solve, solve_brute_force, Algorithm};
pub use types::{dist, PairResult, Point};

#[cfg(test)]
mod tests;
