//! Splits a sorted run into contiguous sub-runs at a set of pivots.

/// Slices sorted `run` into `pivots.len() + 1` contiguous sub-runs using
/// lower-bound semantics: sub-run j holds the values in
/// [pivots[j-1], pivots[j]), so a value equal to a pivot always lands in
/// the partition above it. Every worker applies the same rule, which keeps
/// the global ordering at pivot boundaries consistent.
///
/// Each search resumes from the previous split; the pivots are
/// non-decreasing, so the split indices are too.
pub(crate) fn partition_by_pivots(run: &[i32], pivots: &[i32]) -> Vec<Vec<i32>> {
    let mut parts = Vec::with_capacity(pivots.len() + 1);
    let mut start = 0;

    for &pivot in pivots {
        let split = start + run[start..].partition_point(|&v| v < pivot);
        parts.push(run[start..split].to_vec());
        start = split;
    }

    parts.push(run[start..].to_vec());
    parts
}
