//! Congestion-avoiding point-to-point routing.
//!
//! # Algorithm
//!
//! A bounded greedy walk, one segment per step:
//!
//! 1. Stop once within `arrival_km` of the destination.
//! 2. Candidates are the unvisited segments starting inside the
//!    `step_radius_km` box around the current position whose heading lies
//!    within `max_turn_deg` of the destination bearing and whose street the
//!    classifier knows.  The heading is the bearing to the segment's start,
//!    or the segment's own bearing when it starts where the walker stands.
//! 3. All candidates are scored in one batch at the request slot.
//! 4. The first [`Tier`] with any member picks the winner by
//!    `haversine_km(end, destination) + deviation * bearing_weight + penalty`,
//!    lowest segment id on ties.  `E`/`F` segments are in no default tier.
//! 5. Move to the winner's end node.
//!
//! The walk ends early when nothing is eligible.  Whatever happens, the
//! route finishes at the destination: a closing hop is appended when the
//! last hop is more than `closure_km` away.
//!
//! Each segment is used at most once per walk; that, plus `max_steps`, is
//! what keeps a walk from oscillating.

use log::{debug, warn};
use rustc_hash::FxHashSet;

use gr_core::{angular_difference, GeoPoint, SegmentId, TimeSlot};
use gr_network::{RoadNetwork, SegmentView};
use gr_predict::{Los, Predictor};

use crate::{RouteConfig, Tier};

/// A segment starting this close to the walker leaves from its position.
const AT_NODE_KM: f64 = 0.001;

// ── Route ─────────────────────────────────────────────────────────────────────

/// One waypoint.  The closing hop carries no street or segment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteHop {
    pub pos:     GeoPoint,
    pub street:  Option<String>,
    pub segment: Option<SegmentId>,
}

impl RouteHop {
    fn closing(destination: GeoPoint) -> Self {
        Self { pos: destination, street: None, segment: None }
    }
}

/// Why the walk stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    /// Within `arrival_km` of the destination.
    Arrived,
    /// No segment was eligible for the next step.
    NoCandidate,
    /// Batch prediction for the next step failed.
    PredictionFailed,
    /// `max_steps` exhausted.
    StepLimit,
    /// No network or predictor; the route is the direct hop.
    Unavailable,
}

/// Ordered, non-empty hop list ending at the requested destination.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    hops:     Vec<RouteHop>,
    pub stop: StopReason,
}

impl Route {
    /// The single-hop route straight to `destination`.
    pub fn direct(destination: GeoPoint) -> Self {
        Self { hops: vec![RouteHop::closing(destination)], stop: StopReason::Unavailable }
    }

    pub fn hops(&self) -> &[RouteHop] {
        &self.hops
    }

    pub fn into_hops(self) -> Vec<RouteHop> {
        self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Final waypoint; `Some` for every route the planner returns.
    pub fn last(&self) -> Option<&RouteHop> {
        self.hops.last()
    }

    /// Segments walked, closing hop excluded.
    pub fn segments(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.hops.iter().filter_map(|h| h.segment)
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Walk from `origin` towards `destination`, preferring clear segments.
///
/// Coordinates must already be validated.  Never fails: prediction errors
/// end the walk early and the closing hop still lands on the destination.
pub fn plan(
    network:     &RoadNetwork,
    predictor:   &Predictor,
    origin:      GeoPoint,
    destination: GeoPoint,
    slot:        TimeSlot,
    cfg:         &RouteConfig,
) -> Route {
    let mut hops: Vec<RouteHop> = Vec::new();
    let mut visited: FxHashSet<SegmentId> = FxHashSet::default();
    let mut current = origin;
    let mut stop = StopReason::StepLimit;

    for _ in 0..cfg.max_steps {
        if current.distance_km(destination) <= cfg.arrival_km {
            stop = StopReason::Arrived;
            break;
        }

        let target = current.bearing_deg(destination);
        let candidates: Vec<(&SegmentView, f64)> = network
            .segments_near(current, cfg.step_radius_km)
            .into_iter()
            .filter(|s| !visited.contains(&s.id))
            .filter_map(|s| {
                let deviation = angular_difference(heading(current, s), target);
                (deviation <= cfg.max_turn_deg).then_some((s, deviation))
            })
            .filter(|(s, _)| predictor.knows(s.street()))
            .collect();

        if candidates.is_empty() {
            stop = StopReason::NoCandidate;
            break;
        }

        let queries: Vec<(TimeSlot, &str)> = candidates.iter().map(|(s, _)| (slot, s.street())).collect();
        let labels = match predictor.predict_batch(&queries) {
            Ok(labels) => labels,
            Err(e) => {
                warn!("route step at {current}: prediction failed, ending walk: {e}");
                stop = StopReason::PredictionFailed;
                break;
            }
        };

        let Some(next) = pick(&candidates, &labels, destination, cfg) else {
            stop = StopReason::NoCandidate;
            break;
        };

        visited.insert(next.id);
        current = next.end;
        hops.push(RouteHop {
            pos:     next.end,
            street:  Some(next.street().to_owned()),
            segment: Some(next.id),
        });
    }

    let needs_closing = hops
        .last()
        .is_none_or(|h| h.pos.distance_km(destination) > cfg.closure_km);
    if needs_closing {
        hops.push(RouteHop::closing(destination));
    }

    debug!("route {origin} -> {destination}: {} hops, stopped: {stop:?}", hops.len());
    Route { hops, stop }
}

/// Direction the walker takes to use `seg` from `current`.
fn heading(current: GeoPoint, seg: &SegmentView) -> f64 {
    if current.distance_km(seg.start) <= AT_NODE_KM {
        seg.start.bearing_deg(seg.end)
    } else {
        current.bearing_deg(seg.start)
    }
}

/// Best candidate of the first non-empty tier.
///
/// Candidates arrive sorted by segment id and only a strictly lower score
/// replaces the incumbent, so ties keep the lowest id.
fn pick<'a>(
    candidates:  &[(&'a SegmentView, f64)],
    labels:      &[Los],
    destination: GeoPoint,
    cfg:         &RouteConfig,
) -> Option<&'a SegmentView> {
    cfg.tiers.iter().find_map(|tier: &Tier| {
        let mut best: Option<(&SegmentView, f64)> = None;
        for (&(seg, deviation), &los) in candidates.iter().zip(labels) {
            if !tier.admits(los) {
                continue;
            }
            let score = seg.end.distance_km(destination) + deviation * cfg.bearing_weight + tier.penalty;
            if best.is_none_or(|(_, b)| score < b) {
                best = Some((seg, score));
            }
        }
        best.map(|(seg, _)| seg)
    })
}
