//! Pipeline observer hooks for logging, profiling, and debugging.
//!
//! Observers are notified at stage boundaries and can time stages, capture
//! intermediate sentences and graphs, or emit structured log events.

use crate::graph::csr::CsrGraph;
use crate::pagerank::RankOutcome;
use crate::types::Sentence;
use std::time::{Duration, Instant};

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    pub sentences: Option<usize>,
    pub edges: Option<usize>,
    pub iterations: Option<usize>,
    pub converged: Option<bool>,
    pub residual: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }
}

/// Builder for reports carrying stage-specific counters
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, sentences: usize) -> Self {
        self.report.sentences = Some(sentences);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: Option<f64>) -> Self {
        self.report.residual = residual;
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired while a [`Summarizer`](super::runner::Summarizer) runs.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Sentences right after tokenization
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_graph(&mut self, _graph: &CsrGraph) {}

    /// Sentences carry their final scores at this point
    fn on_rank(&mut self, _outcome: &RankOutcome, _sentences: &[Sentence]) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records how long each stage took
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    timings: Vec<(&'static str, Duration)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage timings in execution order
    pub fn timings(&self) -> &[(&'static str, Duration)] {
        &self.timings
    }

    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, d)| *d).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.push((stage, report.elapsed));
    }
}

/// Emits one debug-level `tracing` event per finished stage
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl PipelineObserver for LoggingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            sentences = report.sentences,
            edges = report.edges,
            iterations = report.iterations,
            converged = report.converged,
            "stage finished"
        );
    }
}
