//! `gr-network` — static road dataset, street index, and spatial index.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`dataset`] | `NodeRecord`, `SegmentRecord`, `StreetRecord`, `Dataset`    |
//! | [`loader`]  | CSV loaders (three-file layout and flat segment table)      |
//! | [`network`] | `RoadNetwork` (street index + R-trees), `RoadNetworkBuilder`|
//! | [`sqlite`]  | `load_dataset_sqlite` (feature = `"sqlite"` only)           |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                      |
//! |----------|-------------------------------------------------------------|
//! | `sqlite` | Enables loading the dataset from SQLite via `rusqlite`.     |
//! | `serde`  | Derives `Serialize`/`Deserialize` on `gr-core` types.        |

pub mod dataset;
pub mod error;
pub mod loader;
pub mod network;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use dataset::{Dataset, FlatSegmentRecord, NodeRecord, SegmentRecord, StreetRecord};
pub use error::{NetworkError, NetworkResult};
pub use loader::{
    load_dataset_dir, load_dataset_readers, load_flat_segments_csv, load_flat_segments_reader,
};
pub use network::{BuildStats, NearestNode, RoadNetwork, RoadNetworkBuilder, SegmentView};
