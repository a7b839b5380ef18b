use crate::affinity::Affinity;
use crate::error::SortError;
use crate::sorter::{parallel_sort, SortConfig};
use crate::timings::PhaseTimings;

/// Configures one sort before running it. Created through
/// [`PsrsSort::psrs_sort_builder`](crate::PsrsSort::psrs_sort_builder).
pub struct PsrsBuilder<'a> {
    data: &'a [i32],
    threads: usize,
    affinity: Affinity,
}

impl<'a> PsrsBuilder<'a> {
    pub(crate) fn new(data: &'a [i32]) -> Self {
        Self {
            data,
            threads: num_cpus::get().max(1),
            affinity: Affinity::None,
        }
    }

    /// `with_threads(n)` sets the worker count. Defaults to the number of
    /// logical CPUs. The input must hold at least n * n elements.
    ///
    /// ```
    /// use psrs::PsrsSort;
    ///
    /// let data: Vec<i32> = (0..64).rev().collect();
    /// let sorted = data.psrs_sort_builder().with_threads(4).sort().unwrap();
    ///
    /// assert_eq!(sorted, (0..64).collect::<Vec<i32>>());
    /// ```
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;

        self
    }

    /// `with_affinity(...)` opts the spawned workers into round-robin CPU
    /// pinning. Purely advisory: on hosts without a pinning capability the
    /// sort runs unpinned.
    ///
    /// ```
    /// use psrs::{Affinity, PsrsSort};
    ///
    /// let data: Vec<i32> = (0..256).rev().collect();
    /// let sorted = data
    ///     .psrs_sort_builder()
    ///     .with_threads(2)
    ///     .with_affinity(Affinity::RoundRobin)
    ///     .sort()
    ///     .unwrap();
    ///
    /// assert_eq!(sorted, (0..256).collect::<Vec<i32>>());
    /// ```
    pub fn with_affinity(mut self, affinity: Affinity) -> Self {
        self.affinity = affinity;

        self
    }

    /// `sort()` runs the configured sort and returns the new, fully
    /// ordered sequence. The input is left untouched.
    pub fn sort(self) -> Result<Vec<i32>, SortError> {
        let (sorted, _) = self.run()?;

        Ok(sorted)
    }

    /// `sort_timed()` additionally returns the per-phase wall-clock
    /// readings of this run, for scaling studies against a sequential
    /// baseline.
    ///
    /// ```
    /// use psrs::PsrsSort;
    ///
    /// let data: Vec<i32> = (0..1024).rev().collect();
    /// let (sorted, timings) = data
    ///     .psrs_sort_builder()
    ///     .with_threads(4)
    ///     .sort_timed()
    ///     .unwrap();
    ///
    /// assert_eq!(sorted.len(), data.len());
    /// assert_eq!(timings.as_micros().len(), 6);
    /// ```
    pub fn sort_timed(self) -> Result<(Vec<i32>, PhaseTimings), SortError> {
        self.run()
    }

    fn run(self) -> Result<(Vec<i32>, PhaseTimings), SortError> {
        let config = SortConfig {
            threads: self.threads,
            affinity: self.affinity,
        };

        parallel_sort(self.data, &config)
    }
}
