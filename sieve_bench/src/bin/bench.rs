// bench --timeout <sec> --mp <n-cores>
//
// Runs <n-cores> threads, each sieving [0, 10^6) back to back for <sec>
// seconds, then prints the total number of sieves completed.

use std::process;

use sieve_bench::{coordinator, signal, BenchConfig, BenchError, USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match BenchConfig::from_args(&args) {
        Ok(c) => c,
        Err(BenchError::Usage) => {
            println!("{}", USAGE);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            if e.is_usage() {
                println!("{}", USAGE);
            }
            process::exit(1);
        }
    };

    if let Err(e) = signal::install() {
        eprintln!("{}", e);
        process::exit(1);
    }

    match coordinator::run(&config, &signal::INTERRUPTED) {
        Ok(ops) => println!("-- Operations performed: {}", ops),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
