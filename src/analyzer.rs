//! Whole-graph centrality analysis (the orchestrator).
//!
//! One traversal + accumulation pair per source vertex, sources in id order.
//! The traversal strategy is the only difference between the unweighted and
//! weighted entry points; everything else (arena reset, closeness recording,
//! progress reporting, final halving) is shared.

use crate::accumulate::accumulate_dependencies;
use crate::graph::{Graph, WeightedGraph};
use crate::path_length::PathLengthAggregator;
use crate::progress::{NoProgress, ProgressMonitor};
use crate::traversal::{bfs_from_source, dijkstra_from_source};
use crate::vertex::VertexArena;
use crate::Result;

/// Options for a whole-graph analysis.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzerConfig {
    /// Halve final betweenness values. On an undirected (symmetric-adjacency)
    /// graph every shortest path is discovered once from each endpoint, so
    /// raw accumulation double-counts; set this to compensate. Off by
    /// default (directed convention).
    pub halve_betweenness: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { halve_betweenness: false }
    }
}

impl AnalyzerConfig {
    /// The conventional setup for undirected graphs.
    pub fn undirected() -> Self {
        Self { halve_betweenness: true }
    }
}

/// Closeness and betweenness for every vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub closeness: Vec<f64>,
    pub betweenness: Vec<f64>,
}

/// Analyze an unweighted graph (BFS traversals).
pub fn analyze<G: Graph>(graph: &G, config: AnalyzerConfig) -> Analysis {
    analyze_with_progress(graph, config, &mut NoProgress)
}

/// Analyze an unweighted graph, reporting after each completed source.
pub fn analyze_with_progress<G: Graph, P: ProgressMonitor>(
    graph: &G,
    config: AnalyzerConfig,
    progress: &mut P,
) -> Analysis {
    let outcome = analyze_impl(graph, config, progress, |graph, source, arena, stack, paths| {
        bfs_from_source(graph, source, arena, stack, paths);
        Ok(())
    });
    match outcome {
        Ok(analysis) => analysis,
        // The shared driver is fallible only for the weighted strategy.
        Err(err) => unreachable!("BFS traversal reported an error: {err}"),
    }
}

/// Analyze a weighted graph (Dijkstra-style traversals).
///
/// Fails on the first edge whose weight is not finite and strictly positive.
pub fn analyze_weighted<G: WeightedGraph>(graph: &G, config: AnalyzerConfig) -> Result<Analysis> {
    analyze_weighted_with_progress(graph, config, &mut NoProgress)
}

/// Analyze a weighted graph, reporting after each completed source.
pub fn analyze_weighted_with_progress<G: WeightedGraph, P: ProgressMonitor>(
    graph: &G,
    config: AnalyzerConfig,
    progress: &mut P,
) -> Result<Analysis> {
    analyze_impl(graph, config, progress, dijkstra_from_source)
}

fn analyze_impl<G, P, F>(
    graph: &G,
    config: AnalyzerConfig,
    progress: &mut P,
    mut traverse: F,
) -> Result<Analysis>
where
    G: Graph,
    P: ProgressMonitor,
    F: FnMut(&G, usize, &mut VertexArena, &mut Vec<usize>, &mut PathLengthAggregator) -> Result<()>,
{
    let n = graph.node_count();
    let mut arena = VertexArena::new(n);
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut paths = PathLengthAggregator::new();
    let mut closeness = vec![0.0; n];

    progress.begin(n);
    for source in 0..n {
        arena.reset_for_source(source);
        stack.clear();
        paths.clear();
        traverse(graph, source, &mut arena, &mut stack, &mut paths)?;
        accumulate_dependencies(source, &mut arena, &mut stack);
        closeness[source] = paths.closeness();
        progress.update(source + 1, n);
    }
    progress.end();

    let mut betweenness = arena.betweenness_scores();
    if config.halve_betweenness {
        for score in &mut betweenness {
            *score *= 0.5;
        }
    }
    Ok(Analysis { closeness, betweenness })
}
