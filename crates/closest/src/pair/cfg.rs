//! Fixed solver constants (internal).

/// Largest subproblem solved by exhaustive comparison (at most 3 pairs).
pub(crate) const BRUTE_FORCE_MAX: usize = 3;

/// Fewest points for which a closest pair exists.
pub(crate) const MIN_POINTS: usize = 2;
