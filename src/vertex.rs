//! Per-vertex algorithm state.

/// Mutable bookkeeping for one vertex during a Brandes-style analysis.
///
/// Everything except `betweenness` is scoped to a single source iteration and
/// wiped by [`VertexArena::reset_for_source`]; `betweenness` accumulates
/// across all sources and is read once at the end.
#[derive(Debug, Clone)]
pub(crate) struct VertexRecord {
    /// Shortest distance from the current source. `f64::INFINITY` = not yet
    /// reached. BFS stores exact small integers here, so `d + 1.0`
    /// comparisons stay exact.
    pub distance: f64,
    /// Number of shortest paths from the current source. Kept as `f64`
    /// because counts grow combinatorially and feed straight into ratios.
    pub sp_count: f64,
    /// Vertices preceding this one on some shortest path from the source.
    pub predecessors: Vec<usize>,
    /// Backward-pass accumulator.
    pub dependency: f64,
    /// Running betweenness across all sources.
    pub betweenness: f64,
}

impl VertexRecord {
    fn new() -> Self {
        Self {
            distance: f64::INFINITY,
            sp_count: 0.0,
            predecessors: Vec::new(),
            dependency: 0.0,
            betweenness: 0.0,
        }
    }

    pub fn reached(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Arena of vertex records indexed by vertex id.
///
/// One arena lives for a whole analysis and is reset between source
/// iterations, so predecessor buffers keep their capacity instead of
/// reallocating every round.
#[derive(Debug)]
pub(crate) struct VertexArena {
    records: Vec<VertexRecord>,
}

impl VertexArena {
    pub fn new(n: usize) -> Self {
        Self { records: vec![VertexRecord::new(); n] }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Wipe all per-source state and install `source` as the new source:
    /// distance 0, one (empty) path to itself, no predecessors. Betweenness
    /// is deliberately untouched.
    pub fn reset_for_source(&mut self, source: usize) {
        for record in &mut self.records {
            record.distance = f64::INFINITY;
            record.sp_count = 0.0;
            record.predecessors.clear();
            record.dependency = 0.0;
        }
        self.records[source].distance = 0.0;
        self.records[source].sp_count = 1.0;
    }

    pub fn betweenness_scores(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.betweenness).collect()
    }
}

impl std::ops::Index<usize> for VertexArena {
    type Output = VertexRecord;

    fn index(&self, id: usize) -> &VertexRecord {
        &self.records[id]
    }
}

impl std::ops::IndexMut<usize> for VertexArena {
    fn index_mut(&mut self, id: usize) -> &mut VertexRecord {
        &mut self.records[id]
    }
}
