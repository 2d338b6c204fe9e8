//! Running statistics of shortest-path lengths from one source.

/// Accumulates the finite shortest-path lengths found by one single-source
/// traversal; the closeness formula reads it once per source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLengthAggregator {
    count: usize,
    sum: f64,
}

impl PathLengthAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.sum = 0.0;
    }

    /// Record one finite shortest-path length. The source's zero-length path
    /// to itself is never recorded.
    pub fn record(&mut self, length: f64) {
        debug_assert!(length.is_finite() && length >= 0.0, "bad path length {length}");
        self.count += 1;
        self.sum += length;
    }

    /// Number of vertices reached from the source (excluding the source).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Closeness of the source: reachable count over total distance
    /// (reciprocal mean path length), or 0 when nothing else is reachable.
    pub fn closeness(&self) -> f64 {
        if self.sum > 0.0 {
            self.count as f64 / self.sum
        } else {
            0.0
        }
    }
}
