use clap::Parser;

use recursion_cli::run_driver;
use recursion_common::FactorialDriver;

/// Prints factorial(0) through factorial(5) computed with 8-bit recursion.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let Args {} = Args::parse();

    run_driver::<FactorialDriver>()
}
