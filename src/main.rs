use std::error::Error;

use clap::Parser;

mod args;
mod tally;

fn main() {
    let args = args::Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let outcome = match &args.generate {
        Some(people) => tally::run_generator(people, args.out.as_deref()),
        None => tally::run_election(&args).map(|_| ()),
    };
    if let Err(err) = outcome {
        eprintln!("Error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
