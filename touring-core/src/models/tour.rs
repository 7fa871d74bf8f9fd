#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

#[cfg(test)]
#[path = "../../tests/unit/models/tour_properties_test.rs"]
mod tour_properties_test;

use crate::models::{Point, distance};
use crate::utils::Float;
use std::iter::FusedIterator;

/// A tour leg: a pair of cycle-adjacent points.
pub type Leg<'a> = (&'a Point, &'a Point);

/// A node of the cycle: a point with indices of its neighbours in the arena.
#[derive(Clone, Debug)]
struct Node {
    point: Point,
    prev: usize,
    next: usize,
}

/// Represents a tour: a closed cycle over points which grows one point at a time.
///
/// Nodes are kept in an arena and linked by indices. As there is no removal, all nodes in the
/// arena belong to the cycle, so its length is the amount of points in the tour.
#[derive(Clone, Debug, Default)]
pub struct Tour {
    /// Stores nodes in the order they were added.
    nodes: Vec<Node>,

    /// Keeps index of the reference point, a traversal origin.
    head: Option<usize>,
}

impl Tour {
    /// Creates a new tour inserting each point with [`Tour::insert_first`], so traversal
    /// yields them in reverse order.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        points.into_iter().fold(Self::default(), |mut tour, point| {
            tour.insert_first(point);
            tour
        })
    }

    /// Inserts point before the current reference point and makes it a new reference point.
    pub fn insert_first(&mut self, point: Point) -> &mut Tour {
        let idx = self.nodes.len();

        match self.head {
            Some(head) => {
                let prev = self.nodes[head].prev;
                self.nodes.push(Node { point, prev, next: head });
                self.nodes[prev].next = idx;
                self.nodes[head].prev = idx;
            }
            None => self.nodes.push(Node { point, prev: idx, next: idx }),
        }

        self.head = Some(idx);

        self
    }

    /// Inserts point right after the first point in traversal order which is equal to `anchor`.
    /// Reference point stays the same.
    ///
    /// If there is no such point, the tour is replaced with a single point cycle of the new point.
    /// Returns true if the anchor was found.
    pub fn insert_after(&mut self, point: Point, anchor: &Point) -> bool {
        match self.find(anchor) {
            Some(after) => {
                let idx = self.nodes.len();
                let next = self.nodes[after].next;

                self.nodes.push(Node { point, prev: after, next });
                self.nodes[next].prev = idx;
                self.nodes[after].next = idx;

                true
            }
            None => {
                self.reset();
                self.insert_first(point);

                false
            }
        }
    }

    /// Removes all points from the tour.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Returns points in cycle order starting from the reference point.
    pub fn iter(&self) -> TourIter<'_> {
        TourIter { tour: self, current: self.head, remaining: self.nodes.len() }
    }

    /// Returns tour legs starting from the reference point and ending with the one which closes
    /// the cycle. A tour with less than two points has no legs.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'_>> + '_ {
        let size = if self.len() > 1 { self.len() } else { 0 };

        self.iter().zip(self.iter().cycle().skip(1)).take(size)
    }

    /// Returns total length of the closed tour.
    pub fn total_length(&self) -> Float {
        self.legs().fold(0., |acc, (from, to)| acc + distance(from, to))
    }

    /// Returns the reference point.
    pub fn reference(&self) -> Option<&Point> {
        self.head.map(|head| &self.nodes[head].point)
    }

    /// Returns the reference point's predecessor, the last point visited by traversal.
    pub fn last(&self) -> Option<&Point> {
        self.head.map(|head| &self.nodes[self.nodes[head].prev].point)
    }

    /// Returns amount of points in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks whether the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn find(&self, anchor: &Point) -> Option<usize> {
        let mut current = self.head;

        (0..self.nodes.len()).find_map(|_| {
            let idx = current?;
            current = Some(self.nodes[idx].next);

            (self.nodes[idx].point == *anchor).then_some(idx)
        })
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Point;
    type IntoIter = TourIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A traversal over tour points which starts at the reference point and stops before visiting
/// it again.
#[derive(Clone)]
pub struct TourIter<'a> {
    tour: &'a Tour,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for TourIter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tour = self.tour;
        let node = &tour.nodes[self.current?];
        self.current = Some(node.next);
        self.remaining -= 1;

        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TourIter<'_> {}

impl FusedIterator for TourIter<'_> {}
