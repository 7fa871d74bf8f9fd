//! Reading and writing points and built tours.
//!
//! Points are read either from json (an array of `{ "x": .., "y": .. }` objects) or, when
//! `csv-format` feature is enabled, from csv with `x,y` header.

#[cfg(test)]
#[path = "../tests/unit/io_test.rs"]
mod io_test;

use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use touring_core::prelude::*;

/// A json format name.
pub const JSON_FORMAT: &str = "json";
/// A csv format name.
pub const CSV_FORMAT: &str = "csv";

/// A tour built from points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TourSolution {
    /// Insertion mode used to build the tour.
    pub mode: InsertionMode,
    /// Total length of the closed tour.
    pub length: Float,
    /// Tour points in traversal order starting from the reference point.
    pub tour: Vec<Point>,
}

impl TourSolution {
    /// Creates a new instance of `TourSolution` from the tour state.
    pub fn new(mode: InsertionMode, builder: &TourBuilder) -> Self {
        Self { mode, length: builder.total_length(), tour: builder.ordered_points() }
    }
}

/// Reads points in given format, all of them should have finite coordinates.
pub fn read_points<R: Read>(reader: BufReader<R>, format: &str) -> GenericResult<Vec<Point>> {
    let points = match format {
        JSON_FORMAT => read_json_points(reader)?,
        #[cfg(feature = "csv-format")]
        CSV_FORMAT => read_csv_points(reader)?,
        _ => return Err(format!("unknown points format: '{format}'").into()),
    };

    validate_points(points)
}

/// Writes points in given format.
pub fn write_points<W: Write>(mut writer: BufWriter<W>, points: &[Point], format: &str) -> GenericResult<()> {
    match format {
        JSON_FORMAT => serde_json::to_writer_pretty(&mut writer, points)
            .map_err(|err| GenericError::from(format!("cannot write points: '{err}'")))?,
        #[cfg(feature = "csv-format")]
        CSV_FORMAT => write_csv_points(&mut writer, points)?,
        _ => return Err(format!("unknown points format: '{format}'").into()),
    }

    writer.flush().map_err(GenericError::from)
}

/// Writes tour solution as json.
pub fn write_solution<W: Write>(mut writer: BufWriter<W>, solution: &TourSolution) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, solution)
        .map_err(|err| GenericError::from(format!("cannot write solution: '{err}'")))?;

    writer.flush().map_err(GenericError::from)
}

fn read_json_points<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Point>> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot read json points: '{err}'").into())
}

#[cfg(feature = "csv-format")]
fn read_csv_points<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Point>> {
    csv::Reader::from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<Point>, _>>()
        .map_err(|err| format!("cannot read csv points: '{err}'").into())
}

#[cfg(feature = "csv-format")]
fn write_csv_points<W: Write>(writer: &mut W, points: &[Point]) -> GenericResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    points
        .iter()
        .try_for_each(|point| csv_writer.serialize(point))
        .map_err(|err| GenericError::from(format!("cannot write csv points: '{err}'")))?;

    csv_writer.flush().map_err(GenericError::from)
}

fn validate_points(points: Vec<Point>) -> GenericResult<Vec<Point>> {
    let errors = points
        .iter()
        .enumerate()
        .filter_map(|(idx, point)| point.validate().err().map(|err| format!("point #{idx}: {err}").into()))
        .collect::<Vec<GenericError>>();

    if errors.is_empty() { Ok(points) } else { Err(GenericError::join_many(errors.as_slice(), "\n").into()) }
}
