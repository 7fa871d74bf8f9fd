#[cfg(test)]
#[path = "../../tests/unit/construction/insertions_test.rs"]
mod insertions_test;

use crate::construction::{evaluate_cheapest, evaluate_nearest};
use crate::models::{Point, Tour};
use crate::utils::{Float, GenericError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies how a new point is placed into the tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsertionMode {
    /// No placement heuristic: point becomes a new reference point.
    First,
    /// Point is inserted after its closest existing point.
    Nearest,
    /// Point is inserted where it increases tour length the least.
    #[default]
    Cheapest,
}

impl FromStr for InsertionMode {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "first" => Ok(InsertionMode::First),
            "nearest" => Ok(InsertionMode::Nearest),
            "cheapest" => Ok(InsertionMode::Cheapest),
            _ => Err(format!("unknown insertion mode: '{value}'").into()),
        }
    }
}

impl Display for InsertionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InsertionMode::First => "first",
            InsertionMode::Nearest => "nearest",
            InsertionMode::Cheapest => "cheapest",
        };

        write!(f, "{name}")
    }
}

/// Specifies a place in the tour where a point is inserted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsertionPosition {
    /// Before the reference point, the point becomes a new reference point.
    First,
    /// Right after the first point equal to given one.
    After(Point),
}

impl Display for InsertionPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertionPosition::First => write!(f, "as first"),
            InsertionPosition::After(anchor) => write!(f, "after {anchor}"),
        }
    }
}

/// Specifies an insertion position with the tour length estimated for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertionCost {
    /// Insertion position.
    pub position: InsertionPosition,
    /// Estimated tour length after insertion.
    pub cost: Float,
}

/// Keeps information about an applied insertion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsertionResult {
    /// Inserted point.
    pub point: Point,
    /// Insertion mode used.
    pub mode: InsertionMode,
    /// Position where the point was inserted.
    pub position: InsertionPosition,
    /// Tour length after insertion.
    pub length: Float,
}

impl Tour {
    /// Inserts point at given position.
    pub fn insert_at(&mut self, point: Point, position: InsertionPosition) -> &mut Tour {
        match position {
            InsertionPosition::First => {
                self.insert_first(point);
            }
            InsertionPosition::After(anchor) => {
                self.insert_after(point, &anchor);
            }
        }

        self
    }

    /// Inserts point using given insertion mode, returns the position chosen.
    pub fn insert_with(&mut self, point: Point, mode: InsertionMode) -> InsertionPosition {
        let position = match mode {
            InsertionMode::First => InsertionPosition::First,
            InsertionMode::Nearest => evaluate_nearest(self, &point),
            InsertionMode::Cheapest => evaluate_cheapest(self, &point).position,
        };

        self.insert_at(point, position);

        position
    }
}
