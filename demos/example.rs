use psrs::PsrsSort;

fn main() {
    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55, 22, 73, 4, 89, 0, 100, 3, 18]);

    let sorted = inputs.psrs_sort(3).unwrap();
    println!("{:?}", &sorted[..]);
}
