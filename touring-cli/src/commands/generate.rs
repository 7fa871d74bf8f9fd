#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use touring_cli::generator::{DEFAULT_AREA_SIZE, generate_points};
use touring_cli::io::{CSV_FORMAT, JSON_FORMAT, write_points};
use touring_core::prelude::Float;

const SIZE_ARG_NAME: &str = "size";
const SEED_ARG_NAME: &str = "seed";
const AREA_SIZE_ARG_NAME: &str = "area-size";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random points to build a tour from")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of points to generate")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed, the same seed gives the same points")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(AREA_SIZE_ARG_NAME)
                .help("Side size of the square area where points are placed")
                .short('a')
                .long(AREA_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies points output format")
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

pub fn run_generate(matches: &ArgMatches) -> GenericResult<()> {
    let size = parse_value::<usize>(matches, SIZE_ARG_NAME, "size")?
        .ok_or_else(|| GenericError::from("amount of points is not specified"))?;
    let seed = parse_value::<u64>(matches, SEED_ARG_NAME, "seed")?.unwrap_or_default();
    let area = parse_value::<Float>(matches, AREA_SIZE_ARG_NAME, "area size")?.unwrap_or(DEFAULT_AREA_SIZE);

    let points = generate_points(size, area, seed)?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    write_points(create_write_buffer(out_result), points.as_slice(), get_format(matches))
}
