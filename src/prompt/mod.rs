//! Prompt formatting
//!
//! Post-processing for summaries that feed an LLM. Runs on the selected
//! sentences only, after ranking has finished.

pub mod formatter;

pub use formatter::PromptFormatter;
