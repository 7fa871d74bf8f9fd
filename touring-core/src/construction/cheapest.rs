#[cfg(test)]
#[path = "../../tests/unit/construction/cheapest_test.rs"]
mod cheapest_test;

use crate::construction::{InsertionCost, InsertionPosition, evaluate_nearest};
use crate::models::{Point, Tour};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::iter::once;

/// Finds insertion position which leads to the smallest tour length.
///
/// Candidates are evaluated in a fixed order and the first one with minimal cost wins:
/// * before the reference point, estimated as `length + d(point, reference)`
/// * after the reference point's predecessor, estimated as `length + d(point, last)`
/// * inside every leg in traversal order, the closing leg is the last one
///
/// A tour with one point is handled by [`evaluate_nearest`] as any position gives the same result.
pub fn evaluate_cheapest(tour: &Tour, point: &Point) -> InsertionCost {
    let (reference, last) = match (tour.reference(), tour.last()) {
        (Some(reference), Some(last)) => (reference, last),
        _ => return InsertionCost { position: InsertionPosition::First, cost: 0. },
    };

    if tour.len() == 1 {
        return InsertionCost { position: evaluate_nearest(tour, point), cost: 2. * point.distance(reference) };
    }

    let length = tour.total_length();

    let at_begin = InsertionCost { position: InsertionPosition::First, cost: length + point.distance(reference) };
    let at_end = InsertionCost { position: InsertionPosition::After(*last), cost: length + point.distance(last) };

    let legs = tour.legs().map(|(prev, next)| InsertionCost {
        position: InsertionPosition::After(*prev),
        cost: length - prev.distance(next) + point.distance(prev) + point.distance(next),
    });

    once(at_end).chain(legs).fold(at_begin, |best, candidate| {
        if compare_floats(candidate.cost, best.cost) == Ordering::Less { candidate } else { best }
    })
}

impl Tour {
    /// Inserts point at position which minimizes tour length increase.
    pub fn cheapest_insertion(&mut self, point: Point) -> &mut Tour {
        let InsertionCost { position, .. } = evaluate_cheapest(self, &point);

        self.insert_at(point, position)
    }
}
