use std::fmt;

/// Errors surfaced by the closest-pair solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairError {
    /// Fewer than two points were supplied, so no pair exists.
    InsufficientInput { got: usize },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::InsufficientInput { got } => {
                write!(f, "need at least two points (got {got})")
            }
        }
    }
}

impl std::error::Error for PairError {}
