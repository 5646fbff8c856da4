//! The query facade.
//!
//! [`TrafficService`] owns shared handles to the road network and the
//! predictor plus a validated [`PlannerConfig`], and exposes every query as
//! one method.  It is `Send + Sync` and meant to be built once and shared.
//!
//! # Failure model
//!
//! | Situation                           | Outcome                             |
//! |-------------------------------------|-------------------------------------|
//! | Malformed coordinate / parameter    | `Err(PlannerError::Invalid)`        |
//! | Empty index or no predictor         | `Err(PlannerError::NotReady)`       |
//! | Point resolves to no usable street  | a miss value (`NoData`, `Unresolved`) |
//! | Route with no data / dead end       | degraded route, still ends at the destination |

use std::sync::Arc;

use log::{debug, warn};

use gr_core::{GeoPoint, TimeSlot};
use gr_network::RoadNetwork;
use gr_predict::{Los, Predictor};

use crate::{
    config::{check_horizon, check_radius},
    green_route, modes, resolver, scanner, sequencer, timeline, AreaScan, DepartureAdvice,
    MissReason, ModeEstimate, PlannerConfig, PlannerError, PlannerResult, Resolution, Route, Stop,
    TimelineEntry,
};

/// Result of a timeline query.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Forecast {
    NoData(MissReason),
    Timeline {
        street:  String,
        entries: Vec<TimelineEntry>,
    },
}

// ── TrafficService ────────────────────────────────────────────────────────────

pub struct TrafficService {
    network:   Arc<RoadNetwork>,
    predictor: Option<Arc<Predictor>>,
    config:    PlannerConfig,
}

impl TrafficService {
    pub fn builder() -> TrafficServiceBuilder {
        TrafficServiceBuilder::new()
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    pub fn predictor(&self) -> Option<&Predictor> {
        self.predictor.as_deref()
    }

    /// `true` when both the index and the predictor are usable.
    pub fn is_ready(&self) -> bool {
        !self.network.is_empty() && self.predictor.is_some()
    }

    fn sources(&self) -> PlannerResult<(&RoadNetwork, &Predictor)> {
        if self.network.is_empty() {
            return Err(PlannerError::NotReady("road network index is empty"));
        }
        let predictor = self
            .predictor
            .as_deref()
            .ok_or(PlannerError::NotReady("congestion predictor is not loaded"))?;
        Ok((&*self.network, predictor))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Street of the indexed node nearest to `point`.
    pub fn resolve_street(&self, point: GeoPoint) -> PlannerResult<Resolution> {
        let point = point.validate()?;
        let (network, predictor) = self.sources()?;
        resolver::resolve(network, predictor, point, self.config.resolve_max_distance_deg)
    }

    /// Congestion on the street at `point` for `horizon` hours from `start`
    /// (the configured horizon when `None`).
    pub fn forecast_timeline(
        &self,
        point:   GeoPoint,
        start:   TimeSlot,
        horizon: Option<u32>,
    ) -> PlannerResult<Forecast> {
        let horizon = horizon.unwrap_or(self.config.forecast_horizon);
        check_horizon(horizon)?;

        let street = match self.resolve_street(point)? {
            Resolution::Street(s) => s,
            Resolution::Unresolved(reason) => return Ok(Forecast::NoData(reason)),
        };
        let (_, predictor) = self.sources()?;
        let entries = timeline::forecast(predictor, &street, start, horizon)?;
        Ok(Forecast::Timeline { street, entries })
    }

    /// Segments predicted clear at `slot` within `radius_km` of `point`.
    pub fn scan_clear_segments(
        &self,
        point:     GeoPoint,
        radius_km: f64,
        slot:      TimeSlot,
    ) -> PlannerResult<AreaScan> {
        let point = point.validate()?;
        check_radius(radius_km)?;
        let (network, predictor) = self.sources()?;
        scanner::scan(network, predictor, point, radius_km, slot)
    }

    /// Route from `origin` to `destination` that avoids congested segments.
    ///
    /// Only malformed coordinates fail.  Without a network or predictor the
    /// route is the single direct hop.
    pub fn plan_green_route(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
        slot:        TimeSlot,
    ) -> PlannerResult<Route> {
        let origin = origin.validate()?;
        let destination = destination.validate()?;

        match self.sources() {
            Ok((network, predictor)) => Ok(green_route::plan(
                network,
                predictor,
                origin,
                destination,
                slot,
                &self.config.route,
            )),
            Err(e) => {
                debug!("route {origin} -> {destination}: direct hop ({e})");
                Ok(Route::direct(destination))
            }
        }
    }

    /// Visiting order of `stops` starting from `origin`.
    pub fn sequence_stops<Id: Clone>(&self, origin: GeoPoint, stops: &[Stop<Id>]) -> PlannerResult<Vec<Id>> {
        let origin = origin.validate()?;
        for stop in stops {
            stop.pos.validate()?;
        }
        Ok(sequencer::sequence(origin, stops))
    }

    /// Travel modes for the trip, fastest first.
    ///
    /// Congestion at the origin street slows motorised modes when it can be
    /// predicted; otherwise estimates assume free flow.
    pub fn rank_modes(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
        slot:        TimeSlot,
    ) -> PlannerResult<Vec<ModeEstimate>> {
        let origin = origin.validate()?;
        let destination = destination.validate()?;
        let los = self.origin_los(origin, slot);
        Ok(modes::rank(origin, destination, los, &self.config))
    }

    /// Advice on leaving from `point` at `slot`.
    pub fn advise_departure(&self, point: GeoPoint, slot: TimeSlot) -> PlannerResult<DepartureAdvice> {
        let street = match self.resolve_street(point)? {
            Resolution::Street(s) => s,
            Resolution::Unresolved(reason) => return Ok(DepartureAdvice::NoData(reason)),
        };
        let (_, predictor) = self.sources()?;
        let los = predictor.predict(slot, &street)?;
        Ok(DepartureAdvice::new(street, slot, los))
    }

    /// Best-effort congestion at the street nearest `origin`.
    fn origin_los(&self, origin: GeoPoint, slot: TimeSlot) -> Option<Los> {
        let (_, predictor) = self.sources().ok()?;
        let street = match self.resolve_street(origin) {
            Ok(Resolution::Street(s)) => s,
            Ok(Resolution::Unresolved(_)) => return None,
            Err(e) => {
                warn!("mode ranking at {origin}: {e}");
                return None;
            }
        };
        predictor
            .predict(slot, &street)
            .inspect_err(|e| warn!("mode ranking at {origin}: {e}"))
            .ok()
    }
}

impl std::fmt::Debug for TrafficService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficService")
            .field("nodes", &self.network.node_count())
            .field("segments", &self.network.segment_count())
            .field("predictor", &self.predictor)
            .finish_non_exhaustive()
    }
}

// ── TrafficServiceBuilder ─────────────────────────────────────────────────────

/// Fluent builder for [`TrafficService`].
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.network(n)`   | `RoadNetwork::empty()`     |
/// | `.predictor(p)` | none (queries not ready)   |
/// | `.config(c)`    | `PlannerConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let service = TrafficService::builder()
///     .network(Arc::new(network))
///     .predictor(Arc::new(predictor))
///     .build()?;
/// let route = service.plan_green_route(origin, destination, TimeSlot::now())?;
/// ```
#[derive(Default)]
pub struct TrafficServiceBuilder {
    network:   Option<Arc<RoadNetwork>>,
    predictor: Option<Arc<Predictor>>,
    config:    Option<PlannerConfig>,
}

impl TrafficServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the road network.  If not called, every index query reports
    /// not-ready and routes degrade to the direct hop.
    pub fn network(mut self, network: Arc<RoadNetwork>) -> Self {
        self.network = Some(network);
        self
    }

    pub fn predictor(mut self, predictor: Arc<Predictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the configuration and return the service.
    pub fn build(self) -> PlannerResult<TrafficService> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let network = self.network.unwrap_or_else(|| Arc::new(RoadNetwork::empty()));
        if network.is_empty() {
            warn!("traffic service built without road data; index queries will report not-ready");
        }
        if self.predictor.is_none() {
            warn!("traffic service built without a congestion predictor");
        }

        Ok(TrafficService { network, predictor: self.predictor, config })
    }
}
