//! Coordinate → street-name resolution.

use log::debug;

use gr_core::GeoPoint;
use gr_network::RoadNetwork;
use gr_predict::Predictor;

use crate::{PlannerError, PlannerResult};

/// Why a coordinate did not resolve to a usable street.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissReason {
    /// The nearest indexed node is farther than the tolerance.
    OutOfRange,
    /// The nearest node has no street attributed to it.
    NoStreet,
    /// The street exists but the classifier does not know it.
    UnknownStreet,
}

impl MissReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MissReason::OutOfRange    => "no road within range",
            MissReason::NoStreet      => "nearest node has no street",
            MissReason::UnknownStreet => "street unknown to the classifier",
        }
    }
}

impl std::fmt::Display for MissReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Resolution {
    Street(String),
    Unresolved(MissReason),
}

impl Resolution {
    pub fn street(&self) -> Option<&str> {
        match self {
            Resolution::Street(s) => Some(s),
            Resolution::Unresolved(_) => None,
        }
    }
}

/// Resolve `point` to the street of its nearest indexed node.
///
/// `max_distance` is in the index's native metric (planar degrees).  An
/// empty index is an error; everything else that goes wrong is a
/// [`Resolution::Unresolved`].
pub fn resolve(
    network:      &RoadNetwork,
    predictor:    &Predictor,
    point:        GeoPoint,
    max_distance: f64,
) -> PlannerResult<Resolution> {
    let point = point.validate()?;
    // `nearest` only fails on an empty index.
    let nearest = network
        .nearest(point)
        .map_err(|_| PlannerError::NotReady("road network index is empty"))?;

    let miss = |reason: MissReason| {
        debug!("{point} unresolved: {reason} (nearest {} at {:.5}°)", nearest.node, nearest.distance);
        Ok(Resolution::Unresolved(reason))
    };

    if nearest.distance > max_distance {
        return miss(MissReason::OutOfRange);
    }
    let Some(street) = network.street_at(nearest.node) else {
        return miss(MissReason::NoStreet);
    };
    if !predictor.knows(street) {
        return miss(MissReason::UnknownStreet);
    }
    Ok(Resolution::Street(street.to_owned()))
}
