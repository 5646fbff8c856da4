//! `gr-core` — foundational types for the `greenroute` traffic core.
//!
//! This crate is a dependency of every other `gr-*` crate.  It intentionally
//! has no `gr-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `SegmentId`, `StreetId`                     |
//! | [`geo`]         | `GeoPoint`, haversine, bearings, `BoundingBox`        |
//! | [`time`]        | `TimeSlot` (hour-of-day + day-of-week)                |
//! | [`transport`]   | `TravelMode` enum                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{angular_difference, BoundingBox, GeoPoint, KM_PER_DEGREE};
pub use ids::{NodeId, SegmentId, StreetId};
pub use time::TimeSlot;
pub use transport::TravelMode;
