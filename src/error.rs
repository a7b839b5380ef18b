use thiserror::Error;

/// Input errors reported before any worker is started.
///
/// Resource failures (the OS refusing to start a worker thread) are not
/// represented here: once any worker is parked at a barrier the sort has no
/// partial-result path, so the engine reports the failure and aborts the
/// process instead of returning.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("thread count must be at least 1")]
    NoThreads,

    #[error(
        "input of {len} elements cannot be regularly sampled by {threads} threads; \
         the squared thread count is the minimum length"
    )]
    InputTooSmall { len: usize, threads: usize },
}
