//! Reads "N then N integers" from stdin, sums them across worker threads,
//! and prints the total after every worker has finished.
//!
//! Run with: `echo "5 1 2 3 4 5" | cargo run --bin batch_sum`

use std::io;
use std::process;

use batch_sum::{input, orchestrator, Config, SumError};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), SumError> {
    let stdin = io::stdin();
    let sequence = input::read_sequence(stdin.lock())?;

    let mut stdout = io::stdout();
    let total = orchestrator::run(&sequence, &Config::default(), &mut stdout)?;

    println!("Result is: {}", total);
    Ok(())
}
