use lockstep::zip;
use lockstep_benchmarks::{time_runs, MicroBenchmarkArgs};
use rand::random;

fn main() {
    let args = MicroBenchmarkArgs::default("zip");
    let a: Vec<u64> = (0..args.len).map(|_| random::<u64>() % 1000).collect();
    let b: Vec<u64> = (0..args.len).map(|_| random::<u64>() % 1000).collect();
    let mut out = vec![0u64; args.len];

    time_runs("zip_pairs", args.runs, || {
        let mut acc = 0u64;
        for (x, y) in zip!(&a, &b) {
            acc = acc.wrapping_add(x * y);
        }
        std::hint::black_box(acc);
    });

    time_runs("zip_mutating", args.runs, || {
        for (x, y, z) in zip!(&a, &b, &mut out) {
            *z = x + y;
        }
    });

    time_runs("std_zip_pairs", args.runs, || {
        let mut acc = 0u64;
        for (x, y) in a.iter().zip(b.iter()) {
            acc = acc.wrapping_add(x * y);
        }
        std::hint::black_box(acc);
    });
}
