
use bench_utils::bench_common;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use psrs::PsrsSort;

fn full_sort(c: &mut Criterion) {
    let tests: Vec<(&str, Box<dyn Fn(Vec<i32>)>)> = vec![
        (
            "psrs_2",
            Box::new(|input| {
                black_box(input.psrs_sort(2).unwrap());
            }),
        ),
        (
            "psrs_4",
            Box::new(|input| {
                black_box(input.psrs_sort(4).unwrap());
            }),
        ),
        (
            "psrs_8",
            Box::new(|input| {
                black_box(input.psrs_sort(8).unwrap());
            }),
        ),
        (
            "psrs_max",
            Box::new(|input| {
                black_box(input.psrs_sort_builder().sort().unwrap());
            }),
        ),
        (
            "std_unstable",
            Box::new(|mut input| {
                input.sort_unstable();
                black_box(input);
            }),
        ),
    ];

    bench_common(c, "full_sort_i32", tests);
}

criterion_group!(benches, full_sort,);
criterion_main!(benches);
