//! Similarity graph construction
//!
//! Nodes are sentence indices. Every unordered pair of sentences is scored
//! with [`similarity`] and only positive weights become edges, stored in both
//! directions. Building is quadratic in the number of sentences.

use super::similarity::similarity;
use crate::nlp::tokenizer::WordSet;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Sparse, symmetric weighted graph over sentence indices
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    /// Adjacency list per sentence: neighbor -> weight
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl SimilarityGraph {
    /// Create a graph with `num_nodes` isolated sentences
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); num_nodes],
        }
    }

    /// Set the weight between two sentences
    ///
    /// Self-loops, non-positive weights and out-of-range nodes are ignored.
    /// Returns whether an edge was stored.
    pub fn insert_edge(&mut self, a: u32, b: u32, weight: f64) -> bool {
        if a == b || weight.is_nan() || weight <= 0.0 {
            return false;
        }
        let n = self.adjacency.len();
        if a as usize >= n || b as usize >= n {
            return false;
        }

        self.adjacency[a as usize].insert(b, weight);
        self.adjacency[b as usize].insert(a, weight);
        true
    }

    /// Build the graph sequentially
    pub fn build(word_sets: &[WordSet]) -> Self {
        let n = word_sets.len();
        let mut graph = Self::with_nodes(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = similarity(&word_sets[i], &word_sets[j]);
                graph.insert_edge(i as u32, j as u32, weight);
            }
        }

        graph
    }

    /// Build the graph with pair scoring spread over the rayon pool
    ///
    /// Produces exactly the same graph as [`SimilarityGraph::build`].
    pub fn build_parallel(word_sets: &[WordSet]) -> Self {
        let n = word_sets.len();

        let rows: Vec<Vec<(u32, f64)>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .filter_map(|j| {
                        let weight = similarity(&word_sets[i], &word_sets[j]);
                        (weight > 0.0).then_some((j as u32, weight))
                    })
                    .collect()
            })
            .collect();

        let mut graph = Self::with_nodes(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, weight) in row {
                graph.insert_edge(i as u32, j, weight);
            }
        }

        graph
    }

    /// Weight between two sentences, if they are connected
    pub fn weight(&self, a: u32, b: u32) -> Option<f64> {
        self.adjacency.get(a as usize)?.get(&b).copied()
    }

    /// Iterate over the neighbors of a sentence (unordered)
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.adjacency
            .get(node as usize)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(&k, &v)| (k, v)))
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum::<usize>() / 2
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the similarity graph, in parallel once there are at least
/// `parallel_threshold` sentences
pub fn build_graph(word_sets: &[WordSet], parallel_threshold: usize) -> SimilarityGraph {
    if word_sets.len() >= parallel_threshold.max(2) {
        SimilarityGraph::build_parallel(word_sets)
    } else {
        SimilarityGraph::build(word_sets)
    }
}
