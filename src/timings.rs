/// Wall-clock cost of one sort, split by phase. All values are microseconds.
///
/// The per-worker phases report the slowest worker, which is what the phase
/// costs on the wall clock. Pivot selection is performed by worker 0 alone
/// while the other workers sit at the phase barrier, so it reads as worker
/// 0's duration. Barrier waits are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    /// From entry until the last worker thread has been started.
    pub prepare: u64,
    /// Local sort + regular sampling, slowest worker.
    pub local_sort: u64,
    /// Sample merge + pivot selection on worker 0.
    pub pivot_select: u64,
    /// Partitioning against the pivots, slowest worker.
    pub exchange: u64,
    /// Per-worker k-way merge, slowest worker.
    pub merge: u64,
    /// Join and concatenation of the per-worker runs.
    pub collect: u64,
}

impl PhaseTimings {
    /// The six readings in phase order.
    pub fn as_micros(&self) -> [u64; 6] {
        [
            self.prepare,
            self.local_sort,
            self.pivot_select,
            self.exchange,
            self.merge,
            self.collect,
        ]
    }

    pub fn total(&self) -> u64 {
        self.as_micros().iter().sum()
    }
}

/// Compute-section durations recorded by a single worker and collected by
/// the coordinator after join.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WorkerTimings {
    pub local_sort: u64,
    pub pivot_select: u64,
    pub exchange: u64,
    pub merge: u64,
}
