use crate::test_utils::{
    check_sorted_permutation, gen_duplicate_heavy_inputs, gen_random_inputs, gen_seeded_inputs,
};
use crate::{PsrsSort, SortError};
use nanorand::{Rng, WyRand};

#[test]
pub fn small_shuffled_input_two_threads() {
    let data = vec![5, 2, 8, 1, 9, 3, 7, 4, 6, 0];
    let sorted = data.psrs_sort(2).unwrap();

    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
pub fn all_equal_input_four_threads() {
    let data = vec![7i32; 16];
    let sorted = data.psrs_sort(4).unwrap();

    assert_eq!(sorted, vec![7i32; 16]);
}

#[test]
pub fn already_sorted_input_is_unchanged() {
    let data: Vec<i32> = (0..16).collect();
    let sorted = data.psrs_sort(4).unwrap();

    assert_eq!(sorted, data);
}

#[test]
pub fn reversed_input_four_threads() {
    let data: Vec<i32> = (0..16).rev().collect();
    let sorted = data.psrs_sort(4).unwrap();

    assert_eq!(sorted, (0..16).collect::<Vec<i32>>());
}

#[test]
pub fn large_seeded_input_matches_reference_sort() {
    let data = gen_seeded_inputs(1_000_000, 0xbe5e_ed11);
    let sorted = data.psrs_sort(8).unwrap();

    check_sorted_permutation(&data, &sorted);
}

#[test]
pub fn extreme_values_survive_the_pipeline() {
    let mut data = Vec::with_capacity(64);
    for _ in 0..21 {
        data.extend_from_slice(&[i32::MIN, 0, i32::MAX]);
    }
    data.push(0);

    let sorted = data.psrs_sort(8).unwrap();

    check_sorted_permutation(&data, &sorted);
    assert_eq!(sorted[0], i32::MIN);
    assert_eq!(sorted[63], i32::MAX);
    assert_eq!(sorted.iter().filter(|&&v| v == 0).count(), 22);
}

#[test]
pub fn random_inputs_across_thread_counts() {
    for &threads in &[1usize, 2, 3, 4, 7, 8, 16] {
        let mut rng = WyRand::new_seed(0x5eed ^ threads as u64);
        let floor = (threads * threads).max(64);

        for _ in 0..100 {
            let len = floor + rng.generate_range(0usize..4096);
            let data = gen_seeded_inputs(len, rng.generate::<u64>());
            let sorted = data.psrs_sort(threads).unwrap();

            check_sorted_permutation(&data, &sorted);
        }
    }
}

#[test]
pub fn megabyte_scale_inputs_across_thread_counts() {
    let data = gen_random_inputs(1 << 20);

    for &threads in &[1usize, 3, 8, 16] {
        let sorted = data.psrs_sort(threads).unwrap();
        check_sorted_permutation(&data, &sorted);
    }
}

#[test]
pub fn output_is_independent_of_thread_count() {
    let data = gen_seeded_inputs(50_000, 0xd15c0);
    let reference = data.psrs_sort(1).unwrap();

    for &threads in &[2usize, 3, 7, 16] {
        assert_eq!(data.psrs_sort(threads).unwrap(), reference);
    }

    let mut sequential = data.clone();
    sequential.sort_unstable();
    assert_eq!(reference, sequential);
}

#[test]
pub fn sorting_twice_is_idempotent() {
    let data = gen_seeded_inputs(10_000, 0x1d3e);
    let once = data.psrs_sort(4).unwrap();
    let twice = once.psrs_sort(4).unwrap();

    assert_eq!(once, twice);
}

#[test]
pub fn duplicate_heavy_inputs_route_equal_keys_consistently() {
    for &modulus in &[2i32, 4, 16] {
        let data = gen_duplicate_heavy_inputs(20_000, modulus);
        let sorted = data.psrs_sort(4).unwrap();

        check_sorted_permutation(&data, &sorted);
    }
}

#[test]
pub fn builder_defaults_sort_with_available_parallelism() {
    let data = gen_seeded_inputs(1 << 18, 0xdefa);
    let sorted = data.psrs_sort_builder().sort().unwrap();

    check_sorted_permutation(&data, &sorted);
}

#[test]
pub fn zero_threads_is_an_input_error() {
    let data: Vec<i32> = (0..16).collect();

    assert_eq!(data.psrs_sort(0), Err(SortError::NoThreads));
}

#[test]
pub fn undersized_input_is_an_input_error() {
    let data: Vec<i32> = (0..15).collect();

    assert_eq!(
        data.psrs_sort(4),
        Err(SortError::InputTooSmall {
            len: 15,
            threads: 4
        })
    );
}

#[test]
pub fn minimum_length_input_is_accepted() {
    let data = gen_seeded_inputs(16, 0x16);
    let sorted = data.psrs_sort(4).unwrap();

    check_sorted_permutation(&data, &sorted);
}

#[test]
pub fn timed_sort_reports_all_six_phases() {
    let data = gen_seeded_inputs(1_000_000, 0x7173);
    let (sorted, timings) = data
        .psrs_sort_builder()
        .with_threads(4)
        .sort_timed()
        .unwrap();

    check_sorted_permutation(&data, &sorted);
    assert_eq!(timings.as_micros().len(), 6);
    // A quarter-million-element local sort and a four-way merge of 1M
    // elements cannot complete inside a microsecond.
    assert!(timings.local_sort > 0);
    assert!(timings.merge > 0);
    assert_eq!(timings.total(), timings.as_micros().iter().sum::<u64>());
}

#[test]
pub fn untimed_sort_leaves_input_untouched() {
    let data = vec![3, 1, 2, 0];
    let sorted = data.psrs_sort(2).unwrap();

    assert_eq!(data, vec![3, 1, 2, 0]);
    assert_eq!(sorted, vec![0, 1, 2, 3]);
}
