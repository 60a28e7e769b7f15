//! Damped rank propagation over the sentence similarity graph
//!
//! Each iteration recomputes every score from the previous iteration's
//! vector:
//!
//! ```text
//! new_i = (1 - d) + d * Σ_j w(i, j) * old_j
//! ```
//!
//! Unlike classic PageRank, weights are not normalized by out-degree and
//! scores are not rescaled to sum to one. Every sentence keeps at least
//! `1 - d`, which is all an isolated sentence ever gets.

use super::{RankOutcome, Termination};
use crate::errors::{Result, TextRankError};
use crate::graph::csr::CsrGraph;
use crate::types::{validate_damping, validate_threshold, Sentence, TextRankConfig};
use rayon::prelude::*;

/// TextRank score propagator
#[derive(Debug, Clone)]
pub struct RankPropagator {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
    /// Node count from which each iteration runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for RankPropagator {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 30,
            threshold: 1e-4,
            parallel_threshold: 256,
        }
    }
}

impl RankPropagator {
    /// Create a new propagator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a propagator from a run configuration
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.convergence_threshold,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold. `0.0` runs every iteration up to the cap.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the node count from which iterations run in parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Check damping and threshold
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_threshold(self.threshold)
    }

    /// Rank `sentences` over `graph`, rewriting each sentence's score
    ///
    /// Node `i` of the graph is `sentences[i]`. Scores are written back only
    /// once propagation has finished.
    pub fn propagate(&self, sentences: &mut [Sentence], graph: &CsrGraph) -> Result<RankOutcome> {
        if graph.num_nodes != sentences.len() {
            return Err(TextRankError::invalid_parameter(
                "graph",
                format!(
                    "graph has {} nodes but there are {} sentences",
                    graph.num_nodes,
                    sentences.len()
                ),
            ));
        }

        let mut scores: Vec<f64> = sentences.iter().map(|s| s.score).collect();
        let outcome = self.run(graph, &mut scores)?;

        for (sentence, score) in sentences.iter_mut().zip(scores) {
            sentence.score = score;
        }

        Ok(outcome)
    }

    /// Propagate a raw score vector in place
    ///
    /// `scores` always holds the vector of the last committed iteration.
    pub fn run(&self, graph: &CsrGraph, scores: &mut [f64]) -> Result<RankOutcome> {
        self.validate()?;

        let n = scores.len();
        if n != graph.num_nodes {
            return Err(TextRankError::invalid_parameter(
                "scores",
                format!("expected {} scores, got {}", graph.num_nodes, n),
            ));
        }
        if n == 0 {
            return Ok(RankOutcome::new(0, None, Termination::Converged));
        }

        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = None;
        let mut termination = Termination::Exhausted;

        while iterations < self.max_iterations {
            self.step(graph, scores, &mut next);

            if next.iter().any(|s| !s.is_finite()) {
                tracing::warn!(iterations, "score overflow, keeping last finite scores");
                termination = Termination::Overflowed;
                break;
            }

            let diff: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            scores.copy_from_slice(&next);
            iterations += 1;
            delta = Some(diff);
            tracing::debug!(iteration = iterations, delta = diff, "propagation step");

            if diff < self.threshold {
                termination = Termination::Converged;
                break;
            }
        }

        tracing::debug!(iterations, ?termination, "propagation finished");
        Ok(RankOutcome::new(iterations, delta, termination))
    }

    /// One synchronous update: `next` is computed from `current` only
    fn step(&self, graph: &CsrGraph, current: &[f64], next: &mut [f64]) {
        let base = 1.0 - self.damping;
        let update = |node: usize| {
            let inflow: f64 = graph
                .neighbors(node as u32)
                .map(|(neighbor, weight)| weight * current[neighbor as usize])
                .sum();
            base + self.damping * inflow
        };

        if next.len() >= self.parallel_threshold {
            next.par_iter_mut()
                .enumerate()
                .for_each(|(node, score)| *score = update(node));
        } else {
            for (node, score) in next.iter_mut().enumerate() {
                *score = update(node);
            }
        }
    }
}
