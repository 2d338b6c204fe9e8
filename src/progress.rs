//! Progress reporting seam.
//!
//! The orchestrator reports after every completed source. Rendering is the
//! monitor's business: the default monitor does nothing, and the
//! `tracing`-backed one logs whole-percent steps.

/// Receives completion counts while an analysis runs.
///
/// Called synchronously from the analysis loop at high frequency, so
/// implementations must be cheap and must not block.
pub trait ProgressMonitor {
    /// Called once before the first source, with the total source count.
    fn begin(&mut self, total: usize) {
        let _ = total;
    }

    /// Called after each completed source; `completed` is monotonically
    /// increasing and ends at `total`.
    fn update(&mut self, completed: usize, total: usize);

    /// Called once after the last source.
    fn end(&mut self) {}
}

/// Monitor that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressMonitor for NoProgress {
    fn update(&mut self, _completed: usize, _total: usize) {}
}

/// Monitor that logs through [`tracing`] at debug level, throttled to whole
/// percentage steps so large graphs don't flood the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress {
    last_percent: u64,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressMonitor for LogProgress {
    fn begin(&mut self, total: usize) {
        self.last_percent = 0;
        tracing::debug!(total, "centrality analysis started");
    }

    fn update(&mut self, completed: usize, total: usize) {
        if total == 0 {
            return;
        }
        let percent = (completed as u64 * 100) / total as u64;
        if percent > self.last_percent {
            self.last_percent = percent;
            tracing::debug!(completed, total, percent, "sources analyzed");
        }
    }

    fn end(&mut self) {
        tracing::debug!("centrality analysis finished");
    }
}
