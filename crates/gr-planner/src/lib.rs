//! `gr-planner` — traffic-aware queries over the road network.
//!
//! Everything here is a pure function of a shared [`RoadNetwork`], a shared
//! [`Predictor`], and a [`PlannerConfig`].  [`TrafficService`] bundles the
//! three and is the entry point for callers.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`config`]      | `PlannerConfig`, `RouteConfig`, `Tier`, `ModeProfile`   |
//! | [`resolver`]    | `resolve`, `Resolution`, `MissReason`                   |
//! | [`timeline`]    | `forecast`, `TimelineEntry`                             |
//! | [`scanner`]     | `scan`, `AreaScan`, `ClearSegment`                      |
//! | [`green_route`] | `plan`, `Route`, `RouteHop`, `StopReason`               |
//! | [`sequencer`]   | `sequence`, `Stop`                                      |
//! | [`modes`]       | `rank`, `ModeEstimate`                                  |
//! | [`advisory`]    | `DepartureAdvice`, `AdviceLevel`                        |
//! | [`service`]     | `TrafficService`, `TrafficServiceBuilder`, `Forecast`   |
//! | [`error`]       | `PlannerError`, `PlannerResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Forwards to `gr-predict/parallel`.                       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and results. |
//!
//! [`RoadNetwork`]: gr_network::RoadNetwork
//! [`Predictor`]: gr_predict::Predictor

pub mod advisory;
pub mod config;
pub mod error;
pub mod green_route;
pub mod modes;
pub mod resolver;
pub mod scanner;
pub mod sequencer;
pub mod service;
pub mod timeline;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use advisory::{AdviceLevel, DepartureAdvice};
pub use config::{ModeProfile, PlannerConfig, RouteConfig, Tier};
pub use error::{PlannerError, PlannerResult};
pub use green_route::{Route, RouteHop, StopReason};
pub use modes::ModeEstimate;
pub use resolver::{MissReason, Resolution};
pub use scanner::{AreaScan, ClearSegment};
pub use sequencer::Stop;
pub use service::{Forecast, TrafficService, TrafficServiceBuilder};
pub use timeline::TimelineEntry;
