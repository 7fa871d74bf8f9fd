#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::utils::{Float, GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Represents an immutable point on a 2D plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> Float {
        distance(self, other)
    }

    /// Checks that both coordinates are finite numbers. Tour operations assume this holds,
    /// so it should be called where points enter the system.
    pub fn validate(&self) -> GenericResult<()> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(GenericError::from(format!("point {self} has non-finite coordinates")))
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as Float, y as Float)
    }
}

impl From<(Float, Float)> for Point {
    fn from((x, y): (Float, Float)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Calculates euclidean distance between two points.
#[inline]
pub fn distance(from: &Point, to: &Point) -> Float {
    let x = from.x - to.x;
    let y = from.y - to.y;

    (x * x + y * y).sqrt()
}
