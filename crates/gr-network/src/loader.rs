//! CSV dataset loaders.
//!
//! # Three-file layout
//!
//! `load_dataset_dir` expects `nodes.csv`, `segments.csv` and `streets.csv`
//! in one directory:
//!
//! ```csv
//! node_id,lat,lon
//! 1,10.7765,106.7009
//!
//! segment_id,s_node_id,e_node_id,street_id
//! 100,1,2,7
//!
//! street_id,name
//! 7,Nguyễn Huệ
//! ```
//!
//! Common alternative headers are accepted (`_id`, `long`, `street_name`, …)
//! so exports from the upstream database load unchanged.
//!
//! # Flat layout
//!
//! `load_flat_segments_*` reads the denormalised import table
//! (`segment_id,street_name,lat_snode,long_snode,lat_enode,long_enode`) and
//! normalises it with [`Dataset::from_flat_segments`].  Extra columns (the
//! per-period observations the table also carries) are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use gr_core::{GeoPoint, NodeId, SegmentId, StreetId};

use crate::dataset::{Dataset, FlatSegmentRecord, NodeRecord, SegmentRecord, StreetRecord};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRow {
    #[serde(alias = "_id", alias = "id")]
    node_id: u64,
    lat:     f64,
    #[serde(alias = "long", alias = "lng")]
    lon:     f64,
}

#[derive(Deserialize)]
struct SegmentRow {
    #[serde(alias = "_id", alias = "id")]
    segment_id: u64,
    #[serde(alias = "start_node_id")]
    s_node_id:  u64,
    #[serde(alias = "end_node_id")]
    e_node_id:  u64,
    street_id:  u64,
}

#[derive(Deserialize)]
struct StreetRow {
    #[serde(alias = "_id", alias = "id")]
    street_id: u64,
    #[serde(alias = "street_name")]
    name:      String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the three-file dataset from `dir`.
pub fn load_dataset_dir(dir: &Path) -> NetworkResult<Dataset> {
    let nodes    = std::fs::File::open(dir.join("nodes.csv"))?;
    let segments = std::fs::File::open(dir.join("segments.csv"))?;
    let streets  = std::fs::File::open(dir.join("streets.csv"))?;
    load_dataset_readers(nodes, segments, streets)
}

/// Like [`load_dataset_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets embedded in
/// the binary.
pub fn load_dataset_readers<N: Read, S: Read, T: Read>(
    nodes:    N,
    segments: S,
    streets:  T,
) -> NetworkResult<Dataset> {
    let nodes = read_rows::<NodeRow, _>(nodes, "nodes")?
        .into_iter()
        .map(|r| NodeRecord { id: NodeId(r.node_id), pos: GeoPoint::new(r.lat, r.lon) })
        .collect();

    let segments = read_rows::<SegmentRow, _>(segments, "segments")?
        .into_iter()
        .map(|r| SegmentRecord {
            id:     SegmentId(r.segment_id),
            start:  NodeId(r.s_node_id),
            end:    NodeId(r.e_node_id),
            street: StreetId(r.street_id),
        })
        .collect();

    let streets = read_rows::<StreetRow, _>(streets, "streets")?
        .into_iter()
        .map(|r| StreetRecord { id: StreetId(r.street_id), name: r.name })
        .collect();

    Ok(Dataset { nodes, segments, streets })
}

/// Load and normalise a flat segment table from a CSV file.
pub fn load_flat_segments_csv(path: &Path) -> NetworkResult<Dataset> {
    let file = std::fs::File::open(path)?;
    load_flat_segments_reader(file)
}

/// Like [`load_flat_segments_csv`] but accepts any `Read` source.
pub fn load_flat_segments_reader<R: Read>(reader: R) -> NetworkResult<Dataset> {
    let rows = read_rows::<FlatSegmentRecord, _>(reader, "flat segments")?;
    Ok(Dataset::from_flat_segments(rows))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_rows<T: DeserializeOwned, R: Read>(reader: R, what: &str) -> NetworkResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| NetworkError::Parse(format!("{what}: {e}"))))
        .collect()
}
