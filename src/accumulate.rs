//! Backward dependency accumulation (the second half of Brandes).

use crate::vertex::VertexArena;

/// Drain the order stack, back-propagating each vertex's dependency to its
/// predecessors and folding the finished dependency into the vertex's
/// running betweenness.
///
/// For each popped `w` and predecessor `v`:
/// `dep(v) += (spc(v) / spc(w)) * (1 + dep(w))`.
///
/// Correct only because the stack pops in non-increasing distance order:
/// every successor of a vertex is popped, and has contributed back to it,
/// before the vertex itself is read. Every stacked vertex was reached, so
/// `spc(w) >= 1` and the division is safe; a zero count here is an internal
/// invariant violation.
pub(crate) fn accumulate_dependencies(
    source: usize,
    arena: &mut VertexArena,
    stack: &mut Vec<usize>,
) {
    while let Some(w) = stack.pop() {
        let w_count = arena[w].sp_count;
        let w_dependency = arena[w].dependency;
        debug_assert!(w_count >= 1.0, "vertex {w} on the order stack with sp_count {w_count}");

        let share = (1.0 + w_dependency) / w_count;
        for i in 0..arena[w].predecessors.len() {
            let v = arena[w].predecessors[i];
            arena[v].dependency += arena[v].sp_count * share;
        }
        if w != source {
            arena[w].betweenness += w_dependency;
        }
    }
}
