//! Pipeline orchestration
//!
//! ## Submodules
//!
//! - [`runner`]: the [`Summarizer`](runner::Summarizer) and its stages
//! - [`observer`]: logging, profiling, and debug hooks

pub mod observer;
pub mod runner;

pub use observer::{
    LoggingObserver, NoopObserver, PipelineObserver, StageClock, StageReport,
    StageReportBuilder, StageTimingObserver, STAGE_GRAPH, STAGE_RANK, STAGE_SELECT,
    STAGE_TOKENIZE,
};
pub use runner::{Summarizer, Summary, SummaryLength};
