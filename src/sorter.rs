//! The coordinator: fork-join driver around the worker pipeline.
//!
//! The calling thread validates the input, prepares the shared state and
//! per-worker payloads, spawns p - 1 workers, then acts as worker 0 itself.
//! Workers are joined strictly in index order and their result runs
//! concatenated in that order, which is what makes the output globally
//! sorted.

use std::process;
use std::thread;
use std::time::Instant;

use crate::affinity::{self, Affinity};
use crate::error::SortError;
use crate::shared::SharedState;
use crate::timings::{PhaseTimings, WorkerTimings};
use crate::worker::{self, WorkerPayload};

pub(crate) struct SortConfig {
    pub threads: usize,
    pub affinity: Affinity,
}

/// First p - 1 workers get n / p elements; the last absorbs the remainder.
/// Slice sizes stay within p - 1 of each other and no element is left
/// unassigned.
fn slice_bounds(len: usize, threads: usize, index: usize) -> (usize, usize) {
    let chunk = len / threads;
    let start = index * chunk;
    let end = if index == threads - 1 {
        len
    } else {
        start + chunk
    };

    (start, end)
}

fn critical_path(timings: &[WorkerTimings], phase: impl Fn(&WorkerTimings) -> u64) -> u64 {
    timings.iter().map(phase).max().unwrap_or(0)
}

pub(crate) fn parallel_sort(
    data: &[i32],
    config: &SortConfig,
) -> Result<(Vec<i32>, PhaseTimings), SortError> {
    let threads = config.threads;

    if threads == 0 {
        return Err(SortError::NoThreads);
    }
    if data.len() < threads * threads {
        return Err(SortError::InputTooSmall {
            len: data.len(),
            threads,
        });
    }

    let entry = Instant::now();
    let len = data.len();
    let stride = len / (threads * threads);
    let cores = affinity::assignments(config.affinity, threads);
    let shared = SharedState::new(threads);

    let mut payloads = Vec::with_capacity(threads);
    for (index, core) in cores.into_iter().enumerate() {
        let (start, end) = slice_bounds(len, threads, index);
        payloads.push(WorkerPayload {
            index,
            local: data[start..end].to_vec(),
            stride,
            core,
        });
    }

    let mut timings = PhaseTimings::default();
    let mut result = Vec::with_capacity(len);

    thread::scope(|scope| {
        let mut payloads = payloads.into_iter();
        let own_payload = payloads.next().expect("worker 0 payload");

        let mut handles = Vec::with_capacity(threads - 1);
        for payload in payloads {
            let shared = &shared;
            let spawned = thread::Builder::new()
                .name(format!("psrs-worker-{}", payload.index))
                .spawn_scoped(scope, move || worker::run(payload, shared));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    // Workers already parked at the start barrier can only
                    // proceed once all p parties arrive; with one party
                    // missing there is no partial-result path and no way to
                    // release them.
                    eprintln!("psrs: failed to start a worker thread: {}", err);
                    process::abort();
                }
            }
        }
        timings.prepare = entry.elapsed().as_micros() as u64;

        let own = worker::run(own_payload, &shared);

        // Worker 0 only returns once every worker has passed the final
        // barrier, so the joins below do not wait on sort work.
        let collect = Instant::now();
        let mut worker_timings = Vec::with_capacity(threads);
        worker_timings.push(own.timings);
        result.extend_from_slice(&own.run);

        for handle in handles {
            let out = handle.join().expect("sort worker panicked");
            worker_timings.push(out.timings);
            result.extend_from_slice(&out.run);
        }

        timings.local_sort = critical_path(&worker_timings, |t| t.local_sort);
        timings.pivot_select = critical_path(&worker_timings, |t| t.pivot_select);
        timings.exchange = critical_path(&worker_timings, |t| t.exchange);
        timings.merge = critical_path(&worker_timings, |t| t.merge);
        timings.collect = collect.elapsed().as_micros() as u64;
    });

    debug_assert_eq!(result.len(), len, "partitioning lost or duplicated elements");

    Ok((result, timings))
}
