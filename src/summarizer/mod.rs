//! Summarization components
//!
//! Provides extractive summarization by keeping the top-ranked sentences
//! in their original order.

pub mod selector;
