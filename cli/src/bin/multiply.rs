use clap::Parser;

use recursion_cli::run_driver;
use recursion_common::MultiplyDriver;

/// Prints products computed as recursive repeated addition in 8 bits.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let Args {} = Args::parse();

    run_driver::<MultiplyDriver>()
}
