#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_test.rs"]
mod nearest_test;

use crate::construction::InsertionPosition;
use crate::models::{Point, Tour};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Finds the point closest to the given one and returns position right after it.
/// On equal distances, the one met first in traversal order wins.
pub fn evaluate_nearest(tour: &Tour, point: &Point) -> InsertionPosition {
    tour.iter()
        .fold(None, |closest: Option<(&Point, Float)>, candidate| {
            let distance = candidate.distance(point);

            match closest {
                Some((_, best)) if compare_floats(distance, best) != Ordering::Less => closest,
                _ => Some((candidate, distance)),
            }
        })
        .map_or(InsertionPosition::First, |(closest, _)| InsertionPosition::After(*closest))
}

impl Tour {
    /// Inserts point after its closest neighbour. Empty tour gets the point as the reference one.
    pub fn nearest_insertion(&mut self, point: Point) -> &mut Tour {
        let position = evaluate_nearest(self, &point);

        self.insert_at(point, position)
    }
}
