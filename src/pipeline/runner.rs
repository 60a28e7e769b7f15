//! Pipeline runner: runs the stages in order and hands the sentences along.
//!
//! [`Summarizer::run`] executes the stages in order, handing the sentence
//! collection from one stage to the next and notifying a
//! [`PipelineObserver`] at each boundary:
//!
//! 1. Tokenize (text → sentences)
//! 2. Build graph (word sets → CSR similarity graph; word sets are dropped)
//! 3. Rank (scores rewritten in place)
//! 4. Select (top sentences in document order)
//!
//! The runner owns the sentences for the whole call. Nothing is shared
//! between calls, and the same input always yields the same summary.

use crate::errors::{Result, TextRankError};
use crate::graph::builder::build_graph;
use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::propagator::RankPropagator;
use crate::pagerank::RankOutcome;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_RANK, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::summarizer::selector::{summary_size, SentenceSelector};
use crate::types::{Sentence, TextRankConfig};
use serde::Serialize;

/// Enter a tracing span for a pipeline stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// How long the summary should be
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryLength {
    /// Percentage of the document's sentences, in `(0, 100]`
    Percentage(f64),
    /// Exact number of sentences
    Count(usize),
}

/// Extractive summary in reading order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences, ascending by original index, with final scores
    pub sentences: Vec<Sentence>,
    /// Sentence count of the whole document
    pub total_sentences: usize,
    /// Propagation diagnostics
    pub rank: RankOutcome,
}

impl Summary {
    /// Sentence texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.content.as_str()).collect()
    }

    /// Scores of the selected sentences, in the same order as [`Summary::texts`]
    pub fn scores(&self) -> Vec<f64> {
        self.sentences.iter().map(|s| s.score).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// The summarization pipeline
#[derive(Debug, Clone)]
pub struct Summarizer {
    tokenizer: Tokenizer,
    propagator: RankPropagator,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        let config = TextRankConfig::default();
        Self {
            tokenizer: Tokenizer::new(),
            propagator: RankPropagator::from_config(&config),
            selector: SentenceSelector::new(),
        }
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer from a validated configuration
    pub fn from_config(config: &TextRankConfig) -> Result<Self> {
        config.validate()?;

        let stopwords =
            StopwordFilter::from_source(&config.stopwords, config.extra_stopwords.as_slice());
        Ok(Self {
            tokenizer: Tokenizer::with_stopwords(stopwords),
            propagator: RankPropagator::from_config(config),
            selector: SentenceSelector::new(),
        })
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the propagator
    pub fn with_propagator(mut self, propagator: RankPropagator) -> Self {
        self.propagator = propagator;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn propagator(&self) -> &RankPropagator {
        &self.propagator
    }

    /// Summarize `text` down to `percentage` percent of its sentences
    pub fn summarize(&self, text: &str, percentage: f64) -> Result<Summary> {
        self.run(text, SummaryLength::Percentage(percentage), &mut NoopObserver)
    }

    /// Summarize `text` down to exactly `count` sentences
    pub fn summarize_count(&self, text: &str, count: usize) -> Result<Summary> {
        self.run(text, SummaryLength::Count(count), &mut NoopObserver)
    }

    /// Execute the pipeline, reporting to `observer`
    ///
    /// Argument and document errors are raised before ranking starts.
    pub fn run(
        &self,
        text: &str,
        length: SummaryLength,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        if let SummaryLength::Percentage(p) = length {
            // Validate up front so a bad percentage fails without tokenizing
            summary_size(1, p)?;
        }
        self.propagator.validate()?;

        // Stage 1: Tokenize
        let mut sentences = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let sentences = self.tokenizer.split_sentences(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .build();
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.is_empty() {
            return Err(TextRankError::EmptyDocument);
        }
        let total = sentences.len();
        let count = match length {
            SummaryLength::Percentage(p) => summary_size(total, p)?,
            SummaryLength::Count(count) if (1..=total).contains(&count) => count,
            SummaryLength::Count(count) => {
                return Err(TextRankError::InvalidCount {
                    requested: count,
                    available: total,
                })
            }
        };

        // Stage 2: Build graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let word_sets = self.tokenizer.word_sets(&sentences);
            let graph = CsrGraph::from_graph(&build_graph(
                &word_sets,
                self.propagator.parallel_threshold,
            ));
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(graph.num_nodes)
                .edges(graph.num_edges() / 2)
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&graph);
            graph
        };

        // Stage 3: Rank
        let rank = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let rank = self.propagator.propagate(&mut sentences, &graph)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(rank.iterations)
                .converged(rank.converged())
                .residual(rank.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&rank, &sentences);
            rank
        };

        // Stage 4: Select
        let selected = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected: Vec<Sentence> = self
                .selector
                .select(&sentences, count)?
                .into_iter()
                .cloned()
                .collect();
            observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));
            selected
        };

        tracing::debug!(
            total,
            selected = selected.len(),
            iterations = rank.iterations,
            "summary ready"
        );

        Ok(Summary {
            sentences: selected,
            total_sentences: total,
            rank,
        })
    }
}

/// Summarize with the default configuration
pub fn summarize(text: &str, percentage: f64) -> Result<Summary> {
    Summarizer::new().summarize(text, percentage)
}
