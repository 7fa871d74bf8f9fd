//! Core crate contains a cyclic tour over 2D points and two classic insertion heuristics which
//! grow it incrementally to approximate ***Euclidean Traveling Salesman Problem***.
//!
//! # Insertion heuristics
//!
//! - **nearest insertion**: a new point is spliced after its closest existing neighbor
//! - **cheapest insertion**: a new point is spliced where it increases total tour length the least
//!
//! # Examples
//!
//! ```
//! use touring_core::prelude::*;
//!
//! let mut builder = TourBuilder::default();
//! builder.add_point(Point::new(0., 0.), InsertionMode::First);
//! builder.add_point(Point::new(10., 0.), InsertionMode::Nearest);
//! builder.add_point(Point::new(5., 5.), InsertionMode::Cheapest);
//!
//! assert_eq!(builder.ordered_points().len(), 3);
//! assert!((builder.total_length() - 24.142).abs() < 0.001);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod utils;
