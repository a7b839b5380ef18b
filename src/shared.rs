//! State shared by the p workers of one sort.
//!
//! Every cell is written exactly once, by exactly one worker, before one of
//! the phase barriers, and read only after it:
//!
//!  * sample slot i: written by worker i before `samples_ready`, read by
//!    worker 0 after it;
//!  * the pivot slot: written by worker 0 before `pivots_ready`, read by
//!    every worker after it;
//!  * exchange cell (dest, src): written by worker src before
//!    `partitions_ready`, read by worker dest after it.
//!
//! `OnceLock` keeps that discipline checked at runtime without putting a
//! lock on any hot path: publishing is one uncontended store per cell and a
//! double write panics instead of racing.

use std::sync::{Barrier, OnceLock};

pub(crate) struct SharedState {
    parties: usize,
    /// Fences construction of this struct before any worker touches it.
    pub start: Barrier,
    pub samples_ready: Barrier,
    pub pivots_ready: Barrier,
    pub partitions_ready: Barrier,
    pub runs_ready: Barrier,
    samples: Vec<OnceLock<Vec<i32>>>,
    pivots: OnceLock<Vec<i32>>,
    /// p*p matrix in row-major order; cell (dest, src) holds the dest-th
    /// partition of worker src's sorted slice.
    exchange: Vec<OnceLock<Vec<i32>>>,
}

impl SharedState {
    pub fn new(parties: usize) -> Self {
        Self {
            parties,
            start: Barrier::new(parties),
            samples_ready: Barrier::new(parties),
            pivots_ready: Barrier::new(parties),
            partitions_ready: Barrier::new(parties),
            runs_ready: Barrier::new(parties),
            samples: (0..parties).map(|_| OnceLock::new()).collect(),
            pivots: OnceLock::new(),
            exchange: (0..parties * parties).map(|_| OnceLock::new()).collect(),
        }
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Publishes worker `index`'s sample run. Called once per worker,
    /// before `samples_ready`.
    pub fn publish_samples(&self, index: usize, samples: Vec<i32>) {
        self.samples[index]
            .set(samples)
            .expect("sample slot written twice");
    }

    /// All sample runs in worker order. Worker 0 only, after `samples_ready`.
    pub fn sample_runs(&self) -> Vec<&[i32]> {
        self.samples
            .iter()
            .map(|slot| {
                slot.get()
                    .expect("sample slot read before publication")
                    .as_slice()
            })
            .collect()
    }

    /// Publishes the pivot vector. Worker 0 only, before `pivots_ready`.
    pub fn publish_pivots(&self, pivots: Vec<i32>) {
        self.pivots.set(pivots).expect("pivot vector written twice");
    }

    /// The pivot vector. Any worker, after `pivots_ready`.
    pub fn pivots(&self) -> &[i32] {
        self.pivots
            .get()
            .expect("pivot vector read before publication")
    }

    /// Publishes the `dest`-th partition of worker `src`'s slice. Before
    /// `partitions_ready`; workers write column src only.
    pub fn publish_partition(&self, dest: usize, src: usize, run: Vec<i32>) {
        self.exchange[dest * self.parties + src]
            .set(run)
            .expect("exchange cell written twice");
    }

    /// The p runs destined for worker `dest`, in source-worker order.
    /// After `partitions_ready`; workers read row dest only.
    pub fn incoming_runs(&self, dest: usize) -> Vec<&[i32]> {
        (0..self.parties)
            .map(|src| {
                self.exchange[dest * self.parties + src]
                    .get()
                    .expect("exchange cell read before publication")
                    .as_slice()
            })
            .collect()
    }
}
