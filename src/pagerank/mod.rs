//! Score propagation
//!
//! This module provides the damped TextRank propagator that ranks sentences
//! over their similarity graph.

pub mod propagator;

use serde::Serialize;

/// Why propagation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Total score change dropped below the threshold
    Converged,
    /// The iteration cap was reached first
    Exhausted,
    /// The next iteration would have produced a non-finite score; the last
    /// finite scores were kept
    Overflowed,
}

/// Result of a propagation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankOutcome {
    /// Number of iterations whose scores were committed
    pub iterations: usize,
    /// Total absolute score change of the last committed iteration
    pub delta: Option<f64>,
    /// How the run ended
    pub termination: Termination,
}

impl RankOutcome {
    /// Create a new outcome
    pub fn new(iterations: usize, delta: Option<f64>, termination: Termination) -> Self {
        Self {
            iterations,
            delta,
            termination,
        }
    }

    /// Whether the run converged before the cap
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
