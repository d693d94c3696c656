use lockstep::{range, range_step};
use lockstep_benchmarks::{time_runs, MicroBenchmarkArgs};

fn main() {
    let args = MicroBenchmarkArgs::default("range");
    let n = args.len;

    time_runs("range_forward", args.runs, || {
        let mut acc = 0usize;
        for i in range(n) {
            acc = acc.wrapping_add(i);
        }
        std::hint::black_box(acc);
    });

    time_runs("range_pace_2", args.runs, || {
        let mut acc = 0usize;
        for i in range_step(0, n, 2) {
            acc = acc.wrapping_add(i);
        }
        std::hint::black_box(acc);
    });

    time_runs("std_range_forward", args.runs, || {
        let mut acc = 0usize;
        for i in 0..n {
            acc = acc.wrapping_add(i);
        }
        std::hint::black_box(acc);
    });
}
