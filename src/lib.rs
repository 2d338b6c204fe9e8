//! `centrality`: exact social-network centrality indices (closeness and
//! betweenness) over connected graphs.
//!
//! The core is a generalized Brandes engine: one single-source shortest-path
//! traversal per vertex (BFS for unweighted graphs, Dijkstra-style relaxation
//! for weighted ones) records path counts and predecessor sets, then a
//! backward pass accumulates per-vertex dependencies into betweenness.
//! Closeness falls out of the same traversals' path-length sums.
//!
//! Public invariants (must not drift):
//! - **Vertex order**: outputs are indexed by vertex id \(0..n-1\) consistent
//!   with the input adapter semantics (e.g. `petgraph::NodeIndex::index()`
//!   under the `petgraph` feature).
//! - **Determinism**: identical graph + config always produce identical maps;
//!   sources are processed in id order.
//! - **Connectivity is assumed, not checked**: on a disconnected graph,
//!   vertex pairs with no path silently contribute nothing, undercounting
//!   both indices. Callers who care must validate connectivity first.
//!
//! Swappable (allowed to change without breaking the contract):
//! - frontier data structures and tie-break order inside a traversal, so long
//!   as every minimal-distance predecessor is still captured
//! - iteration strategy (serial today; the per-source loop is embarrassingly
//!   parallel given a merged betweenness accumulator)

mod accumulate;
mod traversal;
mod vertex;

pub mod analyzer;
pub mod closeness;
pub mod graph;
pub mod path_length;
pub mod progress;
pub mod rank;

pub use analyzer::{
    analyze, analyze_weighted, analyze_weighted_with_progress, analyze_with_progress, Analysis,
    AnalyzerConfig,
};
pub use closeness::{
    closeness_centrality, closeness_centrality_weighted, closeness_from_lengths, PathLengthSource,
};
pub use graph::{AdjacencyList, AdjacencyMatrix, Graph, WeightedGraph};
pub use path_length::PathLengthAggregator;
pub use progress::{LogProgress, NoProgress, ProgressMonitor};
pub use rank::{most_central, normalize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The weighted engine requires finite, strictly positive edge weights;
    /// the first offending edge aborts the analysis.
    ///
    /// Field names avoid `source`, which `thiserror` reserves for error
    /// chaining.
    #[error("invalid weight {weight} on edge {from} -> {to}: must be finite and positive")]
    InvalidEdgeWeight {
        from: usize,
        to: usize,
        weight: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
