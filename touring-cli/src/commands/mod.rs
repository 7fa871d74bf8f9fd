use clap::ArgMatches;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;
use touring_core::prelude::{GenericError, GenericResult};

pub mod generate;
pub mod solve;

pub(crate) const FORMAT_ARG_NAME: &str = "format";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> GenericResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot parse {arg_desc}, error: '{err}': '{arg}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_format(matches: &ArgMatches) -> &str {
    matches.get_one::<String>(FORMAT_ARG_NAME).map(|format| format.as_str()).unwrap_or(touring_cli::io::JSON_FORMAT)
}
