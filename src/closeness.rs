//! Standalone closeness centrality.
//!
//! Cheaper than the full analysis when betweenness is not needed: the same
//! single-source traversals run, but the backward accumulation pass is
//! skipped. When a precomputed shortest-path index already exists (a
//! contraction-hierarchy query structure, a landmark table), plug it in
//! through [`PathLengthSource`] instead of re-running Dijkstra.

use crate::graph::{Graph, WeightedGraph};
use crate::path_length::PathLengthAggregator;
use crate::traversal::{bfs_from_source, dijkstra_from_source};
use crate::vertex::VertexArena;
use crate::Result;

/// Closeness of every vertex of an unweighted graph, by per-source BFS.
pub fn closeness_centrality<G: Graph>(graph: &G) -> Vec<f64> {
    let n = graph.node_count();
    let mut arena = VertexArena::new(n);
    let mut stack = Vec::with_capacity(n);
    let mut paths = PathLengthAggregator::new();
    let mut closeness = vec![0.0; n];

    for source in 0..n {
        arena.reset_for_source(source);
        stack.clear();
        paths.clear();
        bfs_from_source(graph, source, &mut arena, &mut stack, &mut paths);
        closeness[source] = paths.closeness();
    }
    closeness
}

/// Closeness of every vertex of a weighted graph, by per-source Dijkstra.
pub fn closeness_centrality_weighted<G: WeightedGraph>(graph: &G) -> Result<Vec<f64>> {
    let n = graph.node_count();
    let mut arena = VertexArena::new(n);
    let mut stack = Vec::with_capacity(n);
    let mut paths = PathLengthAggregator::new();
    let mut closeness = vec![0.0; n];

    for source in 0..n {
        arena.reset_for_source(source);
        stack.clear();
        paths.clear();
        dijkstra_from_source(graph, source, &mut arena, &mut stack, &mut paths)?;
        closeness[source] = paths.closeness();
    }
    Ok(closeness)
}

/// Anything that can produce shortest-path lengths from a source vertex.
///
/// Drop-in alternative to the built-in traversals for closeness. Lengths must
/// match what a correct shortest-path search would return; unreachable
/// vertices are `f64::INFINITY`.
pub trait PathLengthSource {
    fn node_count(&self) -> usize;

    /// Shortest-path length from `source` to every vertex, indexed by id.
    /// `lengths[source]` is 0.
    fn path_lengths_from(&self, source: usize) -> Vec<f64>;
}

/// Closeness of every vertex, from an external shortest-path backend.
pub fn closeness_from_lengths<S: PathLengthSource>(index: &S) -> Vec<f64> {
    let n = index.node_count();
    let mut paths = PathLengthAggregator::new();
    let mut closeness = vec![0.0; n];

    for source in 0..n {
        paths.clear();
        for (target, &length) in index.path_lengths_from(source).iter().enumerate() {
            if target != source && length.is_finite() {
                paths.record(length);
            }
        }
        closeness[source] = paths.closeness();
    }
    closeness
}
