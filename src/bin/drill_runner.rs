use std::env;

use dp_drills::harness::{run_matching, SuiteReport};
use dp_drills::rng::Lcg32;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("drill_runner: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let results = run_matching(options.seed, &options.filter);
    if results.is_empty() {
        eprintln!("drill_runner: no exercise matches '{}'", options.filter);
        std::process::exit(2);
    }

    let mut total = SuiteReport::new();
    for (name, report) in results {
        let verdict = if report.is_success() { "ok" } else { "FAILED" };
        println!("{name:<28} {report} ... {verdict}");
        for line in &report.failures {
            eprintln!("  {line}");
        }
        total.merge(report);
    }

    println!("{total}");
    std::process::exit(if total.is_success() { 0 } else { 1 });
}

struct Options {
    seed: u32,
    filter: String,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut seed = Lcg32::DEFAULT_SEED;
        let mut filter = String::new();

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = value
                    .parse::<u32>()
                    .map_err(|_| "seed must be an unsigned 32-bit integer".to_string())?;
            } else if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = value
                    .parse::<u32>()
                    .map_err(|_| "seed must be an unsigned 32-bit integer".to_string())?;
            } else if let Some(value) = arg.strip_prefix("--filter=") {
                filter = value.to_string();
            } else if arg == "--filter" {
                filter = args
                    .next()
                    .ok_or_else(|| "missing value after --filter".to_string())?
                    .into();
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { seed, filter })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin drill_runner [-- <options>]

Options:
  --seed <N>          Seed for the randomized suites (default: {})
  --filter <SUBSTR>   Only run exercises whose name contains SUBSTR
  -h, --help          Print this help message

Examples:
  cargo run --bin drill_runner
  cargo run --bin drill_runner -- --seed 42 --filter paths
",
            Lcg32::DEFAULT_SEED
        );
    }
}
