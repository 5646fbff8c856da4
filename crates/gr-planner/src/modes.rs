//! Travel-mode ranking.
//!
//! A trip's road distance is estimated as the haversine distance times the
//! configured detour factor.  Each mode covers it at its free-flow speed,
//! slowed by its own multiplier for the congestion on the origin street.
//! Modes that cannot reasonably cover the distance (walking more than a few
//! kilometres) are left out.

use gr_core::{GeoPoint, TravelMode};
use gr_predict::Los;

use crate::PlannerConfig;

/// Estimated door-to-door time for one mode.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeEstimate {
    pub mode:        TravelMode,
    /// Estimated road distance.
    pub distance_km: f64,
    pub minutes:     f64,
    /// Congestion applied to the estimate, if it was known.
    pub los:         Option<Los>,
}

/// Fastest mode first; equal times keep the configured mode order.
pub fn rank(
    origin:      GeoPoint,
    destination: GeoPoint,
    los:         Option<Los>,
    cfg:         &PlannerConfig,
) -> Vec<ModeEstimate> {
    let distance_km = origin.distance_km(destination) * cfg.detour_factor;

    let mut estimates: Vec<ModeEstimate> = cfg
        .modes
        .iter()
        .filter(|m| m.max_km.is_none_or(|max| distance_km <= max))
        .map(|m| ModeEstimate {
            mode: m.mode,
            distance_km,
            minutes: distance_km / m.speed_kmh * 60.0 * m.slowdown_at(los),
            los,
        })
        .collect();

    // Stable: ties stay in configured order.
    estimates.sort_by(|a, b| a.minutes.total_cmp(&b.minutes));
    estimates
}
