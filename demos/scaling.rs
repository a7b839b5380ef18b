//! # scaling
//!
//! This example is more of a benchmark. It compares the parallel sort
//! against a sequential `sort_unstable` baseline on one random input,
//! reporting per-phase averages and appending them to a plain-text results
//! file for scaling studies.
//!
//! ## Usage
//!
//! ```
//! cargo run --release --example scaling -- 64 8
//! ```
//!
//!  - `64` is the input size in millions of elements
//!  - `8` is the worker thread count

use nanorand::{Rng, WyRand};
use psrs::PsrsSort;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

const M: usize = 1_000_000;
const RUNS: usize = 10;

fn gen_data(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = WyRand::new_seed(seed);

    (0..n).map(|_| rng.generate::<u32>() as i32).collect()
}

/// Ten sequential baseline runs; the average of the last five smooths out
/// cache warm-up.
fn run_sequential(data: &[i32]) -> (Vec<i32>, u64) {
    let mut sorted = Vec::new();
    let mut records = [0u64; RUNS];

    for record in records.iter_mut() {
        let mut clone = data.to_vec();
        let clock = Instant::now();
        clone.sort_unstable();
        *record = clock.elapsed().as_micros() as u64;
        sorted = clone;
    }

    let average = records[(RUNS / 2)..].iter().sum::<u64>() / (RUNS - RUNS / 2) as u64;

    (sorted, average)
}

/// Ten parallel runs; every phase is averaged over all of them.
fn run_parallel(data: &[i32], threads: usize) -> (Vec<i32>, [u64; 6]) {
    let mut sorted = Vec::new();
    let mut sums = [0u64; 6];

    for _ in 0..RUNS {
        let (result, timings) = data
            .psrs_sort_builder()
            .with_threads(threads)
            .sort_timed()
            .expect("parallel sort failed");

        for (sum, phase) in sums.iter_mut().zip(timings.as_micros()) {
            *sum += phase;
        }

        sorted = result;
    }

    for sum in sums.iter_mut() {
        *sum /= RUNS as u64;
    }

    (sorted, sums)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("Usage: scaling <size-in-millions> <threads>");
        std::process::exit(1);
    }

    let size: usize = args[0].parse().expect("size must be a positive integer");
    let threads: usize = args[1]
        .parse()
        .expect("threads must be a positive integer");
    let n = size * M;

    println!("Size of array: {}M, number of threads: {}", size, threads);
    let data = gen_data(n, 0x5eed_0000 + threads as u64);
    println!("Data initialized.");

    println!("Sequential sorting started. ({} times)", RUNS);
    let (reference, sequential_avg) = run_sequential(&data);
    println!(
        "Sequential sorting finished in an average of {} microseconds.",
        sequential_avg
    );

    println!("Parallel sorting started. ({} times)", RUNS);
    let (result, phase_avgs) = run_parallel(&data, threads);
    let parallel_avg: u64 = phase_avgs.iter().sum();
    println!(
        "Parallel sorting finished in an average of {} microseconds.",
        parallel_avg
    );
    println!("Average elapsed time in each phase: {:?}", phase_avgs);
    println!(
        "Speedup over sequential: {:.2}x",
        sequential_avg as f64 / parallel_avg as f64
    );

    println!("Checking result...");
    println!(
        "{}",
        if result == reference {
            "Correct"
        } else {
            "Incorrect"
        }
    );

    let log_path = format!("psrs-{}-{}.log", size, threads);
    let mut log = BufWriter::new(File::create(&log_path).expect("failed to create results file"));
    writeln!(log, "s: {}", sequential_avg).unwrap();
    for (i, phase) in phase_avgs.iter().enumerate() {
        writeln!(log, "p.{}: {}", i, phase).unwrap();
    }
    writeln!(log, "p: {}", parallel_avg).unwrap();
    println!("Results written to {}", log_path);
}
