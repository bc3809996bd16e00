//! Thin CLI entry point: parse, validate, run, report.

use clap::Parser;

use concur_map_bench::{args::Args, run, workload};

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // `clap`'s own `.exit()` path uses exit code 2 for usage
            // errors; the driver's contract is exit code 1 for every
            // argument validation failure, wrong positional count
            // included.
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = args.validate() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let items = workload::generate(args.num_items, args.key_range, args.pct_insert, args.pct_delete);
    let result = run::run(args.variant.into(), args.buckets, args.num_threads, &items);

    println!("{}", result.elapsed.as_millis());
}
