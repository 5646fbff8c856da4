//! Visiting order for a multi-stop itinerary.

use gr_core::GeoPoint;

/// A place to visit, tagged with a caller-chosen id.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop<Id> {
    pub id:  Id,
    pub pos: GeoPoint,
}

impl<Id> Stop<Id> {
    pub fn new(id: Id, pos: GeoPoint) -> Self {
        Self { id, pos }
    }
}

/// Nearest-neighbour tour from `origin` over every stop.
///
/// Repeatedly moves to the closest unvisited stop by haversine distance.
/// Equidistant stops are taken in input order.  O(n²); the result is a
/// permutation of the input ids.
pub fn sequence<Id: Clone>(origin: GeoPoint, stops: &[Stop<Id>]) -> Vec<Id> {
    let mut remaining: Vec<&Stop<Id>> = stops.iter().collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut best = 0;
        let mut best_m = f64::INFINITY;
        for (i, stop) in remaining.iter().enumerate() {
            let d = current.distance_m(stop.pos);
            if d < best_m {
                best = i;
                best_m = d;
            }
        }
        // `remove` keeps the rest in input order for later tie-breaks.
        let next = remaining.remove(best);
        current = next.pos;
        order.push(next.id.clone());
    }
    order
}
