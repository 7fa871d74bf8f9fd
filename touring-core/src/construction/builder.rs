#[cfg(test)]
#[path = "../../tests/unit/construction/builder_test.rs"]
mod builder_test;

use crate::construction::{InsertionMode, InsertionResult};
use crate::models::{Point, Tour};
use crate::utils::{Float, InfoLogger};

/// Builds a tour incrementally: a single entry point for a caller which adds points one by one,
/// choosing insertion mode on each call, and reads back the tour.
#[derive(Default)]
pub struct TourBuilder {
    tour: Tour,
    logger: Option<InfoLogger>,
}

impl TourBuilder {
    /// Creates a new instance of `TourBuilder` which continues building given tour.
    pub fn new(tour: Tour) -> Self {
        Self { tour, logger: None }
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Adds a point to the tour using given insertion mode.
    pub fn add_point(&mut self, point: Point, mode: InsertionMode) -> InsertionResult {
        let position = self.tour.insert_with(point, mode);
        let result = InsertionResult { point, mode, position, length: self.tour.total_length() };

        self.log(|| {
            format!("[{}] inserted {} {}, tour length: {:.3}", result.mode, result.point, result.position, result.length)
        });

        result
    }

    /// Adds points in given order using the same insertion mode.
    pub fn add_points<I: IntoIterator<Item = Point>>(&mut self, points: I, mode: InsertionMode) -> &mut Self {
        points.into_iter().for_each(|point| {
            self.add_point(point, mode);
        });

        self
    }

    /// Returns tour points in traversal order.
    pub fn ordered_points(&self) -> Vec<Point> {
        self.tour.iter().copied().collect()
    }

    /// Returns total length of the tour.
    pub fn total_length(&self) -> Float {
        self.tour.total_length()
    }

    /// Removes all points from the tour.
    pub fn clear(&mut self) {
        self.log(|| format!("tour with {} points is cleared", self.tour.len()));
        self.tour.reset();
    }

    /// Returns the tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Consumes the builder returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    fn log<F: FnOnce() -> String>(&self, message_fn: F) {
        if let Some(logger) = &self.logger {
            (logger)(message_fn().as_str());
        }
    }
}
