//! A command line interface to build tours over points with insertion heuristics.
//!

mod commands;

use crate::commands::generate::{get_generate_app, run_generate};
use crate::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Touring")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to build tours with nearest and cheapest insertion heuristics")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
