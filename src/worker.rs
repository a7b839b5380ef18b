//! The per-worker phase pipeline.
//!
//! Every worker runs the same four phases against the shared state,
//! reaching a barrier between each. Phase durations are measured around the
//! compute sections only; a worker parked at a barrier contributes zero to
//! the phase it is waiting through, which makes the aggregated numbers read
//! as per-phase critical paths.

use std::time::Instant;

use crate::affinity;
use crate::merge::merge_sorted_runs;
use crate::partition::partition_by_pivots;
use crate::phases::{local_sort_and_sample, select_pivots};
use crate::shared::SharedState;
use crate::timings::WorkerTimings;

pub(crate) struct WorkerPayload {
    pub index: usize,
    /// This worker's contiguous copy of the input, sorted in place in
    /// Phase 1.
    pub local: Vec<i32>,
    /// Regular-sampling stride n / p^2, identical for every worker.
    pub stride: usize,
    pub core: Option<affinity::Core>,
}

pub(crate) struct WorkerOutput {
    /// The worker's merged, globally disjoint result run.
    pub run: Vec<i32>,
    pub timings: WorkerTimings,
}

pub(crate) fn run(payload: WorkerPayload, shared: &SharedState) -> WorkerOutput {
    let WorkerPayload {
        index,
        mut local,
        stride,
        core,
    } = payload;
    let threads = shared.parties();
    let mut timings = WorkerTimings::default();

    if let Some(core) = core {
        affinity::pin(core);
    }

    shared.start.wait();

    // Phase 1: local sort + regular sample.
    let clock = Instant::now();
    let samples = local_sort_and_sample(&mut local, stride, threads);
    shared.publish_samples(index, samples);
    timings.local_sort = clock.elapsed().as_micros() as u64;

    #[cfg(feature = "phase_profiles")]
    println!("({}) LOCAL_SORT: {}us", index, timings.local_sort);

    shared.samples_ready.wait();

    // Phase 2: pivot selection, worker 0 only.
    if index == 0 {
        let clock = Instant::now();
        let pivots = select_pivots(&shared.sample_runs(), threads);
        shared.publish_pivots(pivots);
        timings.pivot_select = clock.elapsed().as_micros() as u64;

        #[cfg(feature = "phase_profiles")]
        println!("({}) PIVOT_SELECT: {}us", index, timings.pivot_select);
    }

    shared.pivots_ready.wait();

    // Phase 3: partition the sorted slice and publish column `index` of
    // the exchange matrix.
    let clock = Instant::now();
    let parts = partition_by_pivots(&local, shared.pivots());
    for (dest, part) in parts.into_iter().enumerate() {
        shared.publish_partition(dest, index, part);
    }
    drop(local);
    timings.exchange = clock.elapsed().as_micros() as u64;

    #[cfg(feature = "phase_profiles")]
    println!("({}) EXCHANGE: {}us", index, timings.exchange);

    shared.partitions_ready.wait();

    // Phase 4: merge the runs every worker routed here.
    let clock = Instant::now();
    let run = merge_sorted_runs(&shared.incoming_runs(index));
    timings.merge = clock.elapsed().as_micros() as u64;

    #[cfg(feature = "phase_profiles")]
    println!("({}) MERGE: {}us", index, timings.merge);

    shared.runs_ready.wait();

    WorkerOutput { run, timings }
}
