//! Graph construction and representation
//!
//! This module scores sentence pairs and stores the resulting similarity
//! graph, first as a hash-backed adjacency list and then in CSR form for
//! propagation.

pub mod builder;
pub mod csr;
pub mod similarity;
