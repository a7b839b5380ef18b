//! # psrs
//!
//! psrs is a native Rust implementation of Parallel Sorting by Regular
//! Sampling for in-memory `i32` sequences.
//!
//! ## Usage
//!
//! In the simplest case, call `data.psrs_sort(threads)` to sort a slice or
//! `Vec` of `i32` into a new, fully ordered `Vec` with the given number of
//! worker threads. The builder form adds configuration and per-phase
//! timings:
//!
//! ```
//! use psrs::PsrsSort;
//!
//! let data: Vec<i32> = (0..100).rev().collect();
//! let sorted = data.psrs_sort(4).unwrap();
//! assert_eq!(sorted, (0..100).collect::<Vec<i32>>());
//! ```
//!
//! ## Algorithm
//!
//! The sort runs four phases over p worker threads, with a barrier between
//! each:
//!
//!  1. every worker sorts a contiguous slice of the input and draws a
//!     regular sample from it;
//!  2. worker 0 merges the samples and selects p - 1 pivots;
//!  3. every worker splits its sorted slice at the pivots and exchanges the
//!     pieces so worker j holds exactly the j-th key range;
//!  4. every worker merges its p incoming runs.
//!
//! Concatenating the per-worker results in worker order yields the sorted
//! output. The output is a new sequence; the input is never modified.
//!
//! ## Requirements
//!
//! The thread count must be at least 1 and the input must hold at least
//! threads * threads elements so the regular sample is well-defined. Both are
//! validated up front and reported as [`SortError`].
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod affinity;
mod error;
mod merge;
mod partition;
mod phases;
mod psrs_builder;
mod shared;
mod sorter;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;
mod timings;
mod worker;

pub use affinity::Affinity;
pub use error::SortError;
pub use psrs_builder::PsrsBuilder;
pub use timings::PhaseTimings;

pub trait PsrsSort {
    /// Sorts the sequence into a new `Vec` using `threads` parallel
    /// workers. Requires `threads >= 1` and a length of at least
    /// `threads * threads`.
    fn psrs_sort(&self, threads: usize) -> Result<Vec<i32>, SortError>;

    /// Entry point for configured sorts; see [`PsrsBuilder`].
    fn psrs_sort_builder(&self) -> PsrsBuilder<'_>;
}

impl PsrsSort for [i32] {
    fn psrs_sort(&self, threads: usize) -> Result<Vec<i32>, SortError> {
        self.psrs_sort_builder().with_threads(threads).sort()
    }

    fn psrs_sort_builder(&self) -> PsrsBuilder<'_> {
        PsrsBuilder::new(self)
    }
}

impl PsrsSort for Vec<i32> {
    fn psrs_sort(&self, threads: usize) -> Result<Vec<i32>, SortError> {
        self.as_slice().psrs_sort(threads)
    }

    fn psrs_sort_builder(&self) -> PsrsBuilder<'_> {
        PsrsBuilder::new(self)
    }
}
