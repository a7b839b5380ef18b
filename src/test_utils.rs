use block_pseudorand::block_rand;
use nanorand::{Rng, WyRand};
use rayon::prelude::*;

/// Bulk unseeded random inputs.
pub fn gen_random_inputs(n: usize) -> Vec<i32> {
    block_rand(n)
}

/// Reproducible random inputs for scenario tests.
pub fn gen_seeded_inputs(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = WyRand::new_seed(seed);

    (0..n).map(|_| rng.generate::<u32>() as i32).collect()
}

/// Inputs drawn from a tiny value domain, so nearly every element collides
/// with a pivot somewhere. Exercises the equal-to-pivot routing.
pub fn gen_duplicate_heavy_inputs(n: usize, modulus: i32) -> Vec<i32> {
    let mut inputs: Vec<i32> = block_rand(n);

    inputs
        .par_iter_mut()
        .for_each(|v| *v = v.rem_euclid(modulus));

    inputs
}

/// Asserts `output` is `input` sorted ascending: same length, ordered, and
/// equal to the sequential reference sort of the same data.
pub fn check_sorted_permutation(input: &[i32], output: &[i32]) {
    assert_eq!(output.len(), input.len());
    assert!(
        output.windows(2).all(|w| w[0] <= w[1]),
        "output is not sorted"
    );

    let mut reference = input.to_vec();
    reference.sort_unstable();
    assert_eq!(output, reference.as_slice());
}
