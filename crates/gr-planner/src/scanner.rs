//! Uncongested segments around a point.

use log::debug;

use gr_core::{GeoPoint, SegmentId, TimeSlot};
use gr_network::RoadNetwork;
use gr_predict::{Los, Predictor};

use crate::config::check_radius;
use crate::PlannerResult;

/// A segment predicted at `A` or `B`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearSegment {
    pub segment: SegmentId,
    pub street:  String,
    pub los:     Los,
    pub start:   GeoPoint,
    pub end:     GeoPoint,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AreaScan {
    /// No segment starts inside the search box at all.
    NoRoadsNearby,
    /// The clear segments among those found, sorted by segment id.  May be
    /// empty when every road nearby is congested.
    Segments(Vec<ClearSegment>),
}

/// Segments starting within `radius_km` of `center` (111 km/degree box)
/// that are predicted clear at `slot`.
///
/// All candidates are scored in one batch; a failed batch fails the scan.
pub fn scan(
    network:   &RoadNetwork,
    predictor: &Predictor,
    center:    GeoPoint,
    radius_km: f64,
    slot:      TimeSlot,
) -> PlannerResult<AreaScan> {
    let center = center.validate()?;
    check_radius(radius_km)?;

    let found = network.segments_near(center, radius_km);
    if found.is_empty() {
        debug!("scan at {center} r={radius_km} km: no roads");
        return Ok(AreaScan::NoRoadsNearby);
    }

    let known: Vec<_> = found.into_iter().filter(|s| predictor.knows(s.street())).collect();
    let queries: Vec<(TimeSlot, &str)> = known.iter().map(|s| (slot, s.street())).collect();
    let labels = predictor.predict_batch(&queries)?;

    let clear: Vec<ClearSegment> = known
        .into_iter()
        .zip(labels)
        .filter(|(_, los)| los.is_clear())
        .map(|(s, los)| ClearSegment {
            segment: s.id,
            street:  s.street().to_owned(),
            los,
            start:   s.start,
            end:     s.end,
        })
        .collect();

    debug!("scan at {center} r={radius_km} km: {} of {} segments clear", clear.len(), queries.len());
    Ok(AreaScan::Segments(clear))
}
