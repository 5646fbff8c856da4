//! Planner configuration.
//!
//! Every tunable of the query layer lives in [`PlannerConfig`].  The defaults
//! reproduce the behaviour the service has always had; applications usually
//! load overrides from a JSON file (feature `serde`) and validate them once
//! through [`TrafficServiceBuilder`](crate::TrafficServiceBuilder).

use gr_core::{CoreError, CoreResult, TravelMode};
use gr_predict::Los;

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Farthest a query point may be from its nearest indexed node, in the
    /// index's native metric (planar degrees).  Default: 0.01 (about 1.1 km).
    pub resolve_max_distance_deg: f64,

    /// Hours in a congestion timeline, the start hour included.  Default: 3.
    pub forecast_horizon: u32,

    pub route: RouteConfig,

    /// Road distance over straight-line distance, used by mode ranking.
    /// Default: 1.3.
    pub detour_factor: f64,

    /// Travel modes considered by mode ranking, in tie-break order.
    pub modes: Vec<ModeProfile>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            resolve_max_distance_deg: 0.01,
            forecast_horizon:         3,
            route:                    RouteConfig::default(),
            detour_factor:            1.3,
            modes:                    ModeProfile::defaults(),
        }
    }
}

impl PlannerConfig {
    /// Reject values no query could work with.
    pub fn validate(&self) -> CoreResult<()> {
        non_negative("resolve_max_distance_deg", self.resolve_max_distance_deg)?;
        if !(1..=24).contains(&self.forecast_horizon) {
            return Err(invalid("forecast_horizon", format!("{} is outside 1..=24", self.forecast_horizon)));
        }
        self.route.validate()?;
        if !(self.detour_factor.is_finite() && self.detour_factor >= 1.0) {
            return Err(invalid("detour_factor", format!("{} is below 1.0", self.detour_factor)));
        }
        for m in &self.modes {
            positive("modes.speed_kmh", m.speed_kmh)?;
            if let Some(max) = m.max_km {
                positive("modes.max_km", max)?;
            }
            for &s in &m.slowdown {
                if !(s.is_finite() && s >= 1.0) {
                    return Err(invalid("modes.slowdown", format!("{s} is below 1.0")));
                }
            }
        }
        Ok(())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// Constants of the green-route walk.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Upper bound on walk iterations.  Default: 20.
    pub max_steps: u32,
    /// The walk stops once this close to the destination.  Default: 1.5 km.
    pub arrival_km: f64,
    /// Candidate search radius around the current position.  Default: 3 km.
    pub step_radius_km: f64,
    /// Widest allowed deviation from the destination bearing.  Default: 90°.
    pub max_turn_deg: f64,
    /// Score cost per degree of deviation.  Default: 0.025.
    pub bearing_weight: f64,
    /// A final hop farther than this from the destination gets a closing
    /// hop appended.  Default: 0.1 km.
    pub closure_km: f64,
    /// Label tiers, tried in order; the first non-empty tier wins.
    pub tiers: Vec<Tier>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_steps:      20,
            arrival_km:     1.5,
            step_radius_km: 3.0,
            max_turn_deg:   90.0,
            bearing_weight: 0.025,
            closure_km:     0.1,
            tiers:          Tier::defaults(),
        }
    }
}

impl RouteConfig {
    pub fn validate(&self) -> CoreResult<()> {
        positive("route.arrival_km", self.arrival_km)?;
        positive("route.step_radius_km", self.step_radius_km)?;
        non_negative("route.bearing_weight", self.bearing_weight)?;
        non_negative("route.closure_km", self.closure_km)?;
        if !(0.0..=180.0).contains(&self.max_turn_deg) {
            return Err(invalid("route.max_turn_deg", format!("{} is outside 0..=180", self.max_turn_deg)));
        }
        for t in &self.tiers {
            non_negative("route.tiers.penalty", t.penalty)?;
        }
        Ok(())
    }
}

/// One row of the route fallback table: segments with any of `labels` score
/// with an extra `penalty` (km-equivalent).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tier {
    pub labels:  Vec<Los>,
    pub penalty: f64,
}

impl Tier {
    /// `{A, B}` free, then `C` at +2.5, then `D` at +6.0.  `E` and `F` are
    /// never eligible.
    pub fn defaults() -> Vec<Tier> {
        vec![
            Tier { labels: vec![Los::A, Los::B], penalty: 0.0 },
            Tier { labels: vec![Los::C],         penalty: 2.5 },
            Tier { labels: vec![Los::D],         penalty: 6.0 },
        ]
    }

    #[inline]
    pub fn admits(&self, los: Los) -> bool {
        self.labels.contains(&los)
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Speed and reach of one travel mode.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeProfile {
    pub mode:      TravelMode,
    /// Free-flow speed.
    pub speed_kmh: f64,
    /// Longest practical trip; `None` for unlimited.
    pub max_km:    Option<f64>,
    /// Travel-time multiplier per level of service, indexed `A..=F`.
    pub slowdown:  [f64; 6],
}

impl ModeProfile {
    pub fn defaults() -> Vec<ModeProfile> {
        vec![
            ModeProfile {
                mode:      TravelMode::Car,
                speed_kmh: 30.0,
                max_km:    None,
                slowdown:  [1.0, 1.1, 1.3, 1.6, 2.0, 2.6],
            },
            ModeProfile {
                mode:      TravelMode::Motorbike,
                speed_kmh: 32.0,
                max_km:    None,
                slowdown:  [1.0, 1.05, 1.15, 1.3, 1.5, 1.8],
            },
            ModeProfile {
                mode:      TravelMode::Bike,
                speed_kmh: 12.0,
                max_km:    Some(15.0),
                slowdown:  [1.0; 6],
            },
            ModeProfile {
                mode:      TravelMode::Walk,
                speed_kmh: 4.5,
                max_km:    Some(3.0),
                slowdown:  [1.0; 6],
            },
        ]
    }

    /// Travel-time multiplier at `los`; `1.0` when congestion is unknown.
    #[inline]
    pub fn slowdown_at(&self, los: Option<Los>) -> f64 {
        los.map_or(1.0, |l| self.slowdown[l as usize])
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn invalid(name: &'static str, reason: String) -> CoreError {
    CoreError::InvalidParameter { name, reason }
}

fn positive(name: &'static str, v: f64) -> CoreResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("{v} is not a positive number")))
    }
}

fn non_negative(name: &'static str, v: f64) -> CoreResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, format!("{v} is negative or not a number")))
    }
}

/// Shared by request-time parameter checks.
pub(crate) fn check_radius(radius_km: f64) -> CoreResult<()> {
    positive("radius_km", radius_km)
}

pub(crate) fn check_horizon(horizon: u32) -> CoreResult<()> {
    if (1..=24).contains(&horizon) {
        Ok(())
    } else {
        Err(invalid("horizon", format!("{horizon} is outside 1..=24")))
    }
}
