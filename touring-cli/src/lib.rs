//! A command line interface library part: configuration, points input/output and generation.
//!
//! It plays a role of a headless shell around the tour: reads points, passes them to the core one
//! by one with explicitly selected insertion mode and writes the ordered tour back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod io;
