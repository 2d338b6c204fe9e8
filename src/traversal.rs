//! Single-source shortest-path engines.
//!
//! Both engines share one contract: starting from `source` (already installed
//! in the arena by `reset_for_source`), populate every reachable vertex's
//! distance, shortest-path count and predecessor set, push vertices onto
//! `stack` in non-decreasing distance order (so popping yields non-increasing
//! distance, which the backward pass relies on), and record every finite
//! distance into `paths`.
//!
//! An isolated source leaves the stack holding only the source and the
//! aggregator at count 0.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use ordered_float::NotNan;

use crate::graph::{Graph, WeightedGraph};
use crate::path_length::PathLengthAggregator;
use crate::vertex::VertexArena;
use crate::{Error, Result};

/// Breadth-first traversal for unweighted graphs.
///
/// FIFO order means vertices are dequeued in non-decreasing hop count, so
/// pushing to the stack at dequeue time needs no sorting.
pub(crate) fn bfs_from_source<G: Graph>(
    graph: &G,
    source: usize,
    arena: &mut VertexArena,
    stack: &mut Vec<usize>,
    paths: &mut PathLengthAggregator,
) {
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        stack.push(current);
        let current_distance = arena[current].distance;
        let current_count = arena[current].sp_count;

        for neighbor in graph.neighbors(current) {
            if !arena[neighbor].reached() {
                let discovered = current_distance + 1.0;
                arena[neighbor].distance = discovered;
                queue.push_back(neighbor);
                paths.record(discovered);
            }
            // Every edge landing exactly one hop further lies on a shortest
            // path, whether `neighbor` was just discovered or already known.
            if arena[neighbor].distance == current_distance + 1.0 {
                arena[neighbor].sp_count += current_count;
                arena[neighbor].predecessors.push(current);
            }
        }
    }
}

/// Dijkstra-style traversal for weighted graphs.
///
/// Lazy deletion: the heap may hold stale entries for a vertex, and only the
/// first pop settles it. A vertex reaches the stack (and the aggregator) at
/// settle time, when its distance is final. Edges are relaxed only out of
/// settled vertices, so each edge contributes to counts/predecessors exactly
/// once: a strictly shorter route replaces them, an equal-length route
/// accumulates.
///
/// Weights must be finite and strictly positive. With positive weights a
/// relaxed edge can never tie an already-settled distance, so every tie is
/// captured before its vertex is finalized. A zero-weight edge breaks that
/// invariant (and zero-weight cycles make path counts ill-defined), so zero
/// is rejected along with negative and non-finite weights.
pub(crate) fn dijkstra_from_source<G: WeightedGraph>(
    graph: &G,
    source: usize,
    arena: &mut VertexArena,
    stack: &mut Vec<usize>,
    paths: &mut PathLengthAggregator,
) -> Result<()> {
    let mut settled = vec![false; arena.len()];
    let mut frontier: BinaryHeap<Reverse<(NotNan<f64>, usize)>> = BinaryHeap::new();
    // 0.0 is trivially not NaN.
    frontier.push(Reverse((NotNan::new(0.0).unwrap(), source)));

    while let Some(Reverse((_, current))) = frontier.pop() {
        if settled[current] {
            continue;
        }
        settled[current] = true;
        stack.push(current);

        let current_distance = arena[current].distance;
        let current_count = arena[current].sp_count;
        if current != source {
            paths.record(current_distance);
        }

        for neighbor in graph.neighbors(current) {
            // Validate before the settled check: a bad edge into a settled
            // vertex must still abort, not be skipped.
            let weight = graph.edge_weight(current, neighbor);
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidEdgeWeight { from: current, to: neighbor, weight });
            }
            if settled[neighbor] {
                continue;
            }
            let candidate = current_distance + weight;
            let record = &mut arena[neighbor];
            if candidate < record.distance {
                record.distance = candidate;
                record.sp_count = current_count;
                record.predecessors.clear();
                record.predecessors.push(current);
                // `candidate` is a sum of finite non-negatives, never NaN.
                frontier.push(Reverse((NotNan::new(candidate).unwrap(), neighbor)));
            } else if candidate == record.distance {
                record.sp_count += current_count;
                record.predecessors.push(current);
            }
        }
    }
    Ok(())
}
