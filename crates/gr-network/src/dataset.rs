//! Raw records of the static road dataset.
//!
//! The dataset is three relations (nodes, segments, streets) exactly as the
//! upstream storage holds them.  Nothing here is validated; joining and
//! filtering happens once in [`RoadNetworkBuilder`](crate::RoadNetworkBuilder).

use rustc_hash::{FxHashMap, FxHashSet};

use gr_core::{GeoPoint, NodeId, SegmentId, StreetId};

/// A road-network node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeRecord {
    pub id:  NodeId,
    pub pos: GeoPoint,
}

/// A directed road segment between two nodes, attributed to one street.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SegmentRecord {
    pub id:     SegmentId,
    pub start:  NodeId,
    pub end:    NodeId,
    pub street: StreetId,
}

/// A named street.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreetRecord {
    pub id:   StreetId,
    pub name: String,
}

/// One row of the denormalised segment table used for bulk imports: the
/// street name and both endpoint coordinates are inlined.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct FlatSegmentRecord {
    pub segment_id:  u64,
    pub street_name: String,
    pub lat_snode:   f64,
    pub long_snode:  f64,
    pub lat_enode:   f64,
    pub long_enode:  f64,
}

/// The complete static dataset, as loaded from storage.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub nodes:    Vec<NodeRecord>,
    pub segments: Vec<SegmentRecord>,
    pub streets:  Vec<StreetRecord>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Normalise a flat segment table into the three-relation form.
    ///
    /// Nodes are de-duplicated by exact coordinate and streets by trimmed
    /// name; both receive sequential ids in order of first appearance.  A
    /// repeated `segment_id` keeps its first row (the source table repeats
    /// each segment once per observation period).
    pub fn from_flat_segments<I>(rows: I) -> Dataset
    where
        I: IntoIterator<Item = FlatSegmentRecord>,
    {
        let mut ds = Dataset::default();
        let mut node_ids:   FxHashMap<(u64, u64), NodeId>  = FxHashMap::default();
        let mut street_ids: FxHashMap<String, StreetId>    = FxHashMap::default();
        let mut seen:       FxHashSet<SegmentId>           = FxHashSet::default();

        for row in rows {
            let id = SegmentId(row.segment_id);
            if !seen.insert(id) {
                continue;
            }

            let mut node_for = |lat: f64, lon: f64| -> NodeId {
                *node_ids.entry((lat.to_bits(), lon.to_bits())).or_insert_with(|| {
                    let nid = NodeId(ds.nodes.len() as u64);
                    ds.nodes.push(NodeRecord { id: nid, pos: GeoPoint::new(lat, lon) });
                    nid
                })
            };
            let start = node_for(row.lat_snode, row.long_snode);
            let end   = node_for(row.lat_enode, row.long_enode);

            let name = row.street_name.trim().to_owned();
            let street = match street_ids.get(&name) {
                Some(&sid) => sid,
                None => {
                    let sid = StreetId(ds.streets.len() as u64);
                    street_ids.insert(name.clone(), sid);
                    ds.streets.push(StreetRecord { id: sid, name });
                    sid
                }
            };

            ds.segments.push(SegmentRecord { id, start, end, street });
        }

        ds
    }
}
