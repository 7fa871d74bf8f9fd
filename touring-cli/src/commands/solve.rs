#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, Command};
use std::io::BufReader;
use touring_cli::config::{Config, read_config};
use touring_cli::io::{CSV_FORMAT, JSON_FORMAT, TourSolution, read_points, write_solution};
use touring_core::prelude::{InsertionMode, TourBuilder};

const POINTS_ARG_NAME: &str = "POINTS";
const MODE_ARG_NAME: &str = "mode";
const CONFIG_ARG_NAME: &str = "config";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Builds a tour inserting points one by one in the order they are specified")
        .arg(Arg::new(POINTS_ARG_NAME).help("Sets the points file to use").required(true).index(1))
        .arg(
            Arg::new(MODE_ARG_NAME)
                .help("Specifies insertion mode, overrides the one from config")
                .short('m')
                .long(MODE_ARG_NAME)
                .required(false)
                .value_parser(["first", "nearest", "cheapest"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies points file format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser([JSON_FORMAT, CSV_FORMAT])
                .default_value(JSON_FORMAT),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_solve(matches: &ArgMatches) -> GenericResult<()> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    let mode = config.get_mode(parse_value::<InsertionMode>(matches, MODE_ARG_NAME, "insertion mode")?);

    let points_path = matches
        .get_one::<String>(POINTS_ARG_NAME)
        .ok_or_else(|| GenericError::from("points file is not specified"))?;
    let points = read_points(BufReader::new(open_file(points_path, "points")?), get_format(matches))?;

    let mut builder = match config.create_logger() {
        Some(logger) => TourBuilder::default().with_logger(logger),
        None => TourBuilder::default(),
    };
    builder.add_points(points, mode);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_solution(create_write_buffer(out_result), &TourSolution::new(mode, &builder))
}
