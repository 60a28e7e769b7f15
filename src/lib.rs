//! # textrank_compress
//!
//! Extractive summarization with TextRank over sentences.
//!
//! Sentences become nodes of a graph whose edges are word-overlap
//! similarities. A damped propagation ranks them, the best are kept, and the
//! summary comes back in reading order. Selected sentences can optionally be
//! rewritten into imperative LLM prompts.
//!
//! ```
//! let summary = textrank_compress::summarize(
//!     "Cats are small. Dogs are loyal animals. Cats like naps. Dogs need walks daily.",
//!     50.0,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.texts(), vec!["Cats are small.", "Dogs are loyal animals."]);
//! ```

pub mod errors;
pub mod graph;
pub mod io;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod prompt;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Sentence, StopwordSource, TextRankConfig};

// Re-export main functionality
pub use graph::{builder::SimilarityGraph, csr::CsrGraph, similarity::similarity};
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{propagator::RankPropagator, RankOutcome, Termination};
pub use pipeline::runner::{summarize, Summarizer, Summary, SummaryLength};
pub use prompt::PromptFormatter;
pub use summarizer::selector::{summary_size, SentenceSelector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
