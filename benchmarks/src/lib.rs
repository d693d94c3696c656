use clap::{App, Arg, ArgMatches};
use std::time::Instant;

/// Command line arguments shared by the iteration microbenchmarks.
pub struct MicroBenchmarkArgs {
    /// Number of elements traversed per run.
    pub len: usize,
    /// Number of runs to average over.
    pub runs: usize,
}

fn parse_usize(matches: &ArgMatches, name: &str) -> usize {
    let value = matches.value_of(name).unwrap();
    match value.parse::<usize>() {
        Ok(n) => n,
        Err(_) => panic!("Invalid {} argument: {}", name, value),
    }
}

impl MicroBenchmarkArgs {
    pub fn default(name: &str) -> Self {
        let matches = App::new(name)
            .arg(
                Arg::with_name("len")
                    .short("n")
                    .long("len")
                    .takes_value(true)
                    .default_value("1000000")
                    .help("Number of elements traversed per run."),
            )
            .arg(
                Arg::with_name("runs")
                    .short("r")
                    .long("runs")
                    .takes_value(true)
                    .default_value("100")
                    .help("Number of runs to average over."),
            )
            .get_matches();

        MicroBenchmarkArgs {
            len: parse_usize(&matches, "len"),
            runs: parse_usize(&matches, "runs"),
        }
    }
}

/// Run `f` the requested number of times and print the average walltime
/// of one run, in nanoseconds, as a `name: time` record.
pub fn time_runs<F: FnMut()>(name: &str, runs: usize, mut f: F) {
    let start = Instant::now();
    for _ in 0..runs {
        f();
    }
    let nanos = start.elapsed().as_nanos() / runs.max(1) as u128;
    println!("{}: {} ns/run", name, nanos);
}
