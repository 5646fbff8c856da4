//! Road network index and builder.
//!
//! # Working set
//!
//! At request time nothing touches the raw relations.  The builder joins
//! segments to their nodes and streets once and keeps the denormalised
//! projection
//!
//! ```text
//! SegmentView { id, street, start_node, end_node, start, end }
//! ```
//!
//! sorted by `SegmentId`, so every query result has a deterministic order.
//!
//! # Indexes
//!
//! | Index          | Key                  | Used for                          |
//! |----------------|----------------------|-----------------------------------|
//! | street index   | start `NodeId`       | node → street name                |
//! | node R-tree    | street-index nodes   | nearest-node lookup               |
//! | segment R-tree | segment start point  | bounding-box candidate gathering  |
//!
//! Both R-trees store `[lat, lon]` and measure planar distance in degrees.
//! Nothing is rebuilt after startup: the road network is static for the
//! lifetime of the serving process.

use std::sync::Arc;

use log::{info, warn};
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};

use gr_core::{BoundingBox, GeoPoint, NodeId, SegmentId, StreetId};

use crate::dataset::{Dataset, SegmentRecord};
use crate::{NetworkError, NetworkResult};

// ── R-tree entries ────────────────────────────────────────────────────────────

/// Entry of the node index: a 2-D `[lat, lon]` point with its `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id:    NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Entry of the segment index: the segment's start point and its position
/// in `RoadNetwork::segments`.
#[derive(Clone)]
struct SegmentEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── Public views ──────────────────────────────────────────────────────────────

/// Denormalised, street-attributed road segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentView {
    pub id:         SegmentId,
    pub street:     Arc<str>,
    pub start_node: NodeId,
    pub end_node:   NodeId,
    pub start:      GeoPoint,
    pub end:        GeoPoint,
}

impl SegmentView {
    #[inline]
    pub fn street(&self) -> &str {
        &self.street
    }
}

/// Result of a nearest-node query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestNode {
    pub node:     NodeId,
    pub pos:      GeoPoint,
    /// Query-to-node distance in the index's native metric (planar degrees).
    pub distance: f64,
}

/// Row accounting from [`RoadNetworkBuilder::build`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Segment rows handed to the builder.
    pub segments_in:       usize,
    /// Segments that survived every filter.
    pub segments_indexed:  usize,
    /// Nodes in the spatial index.
    pub nodes_indexed:     usize,
    /// Repeated segment ids (first row wins).
    pub duplicates:        usize,
    /// Segments whose street or endpoint node is missing from the dataset.
    pub dangling:          usize,
    /// Segments whose (trimmed) street name is empty or rejected by the
    /// street filter.
    pub unknown_street:    usize,
    /// Segments with a non-finite or out-of-range endpoint coordinate.
    pub invalid_coords:    usize,
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Read-only road network: segment working set, street index, and spatial
/// indexes.  `Send + Sync`; share it behind an `Arc`.
///
/// Do not construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    segments:     Vec<SegmentView>,
    segment_slot: FxHashMap<SegmentId, usize>,
    street_index: FxHashMap<NodeId, Arc<str>>,
    node_idx:     RTree<NodeEntry>,
    segment_idx:  RTree<SegmentEntry>,
    stats:        BuildStats,
}

impl RoadNetwork {
    /// Construct an empty network.
    ///
    /// Stands in for a dataset that failed to load: every spatial query
    /// against it returns [`NetworkError::Unavailable`].
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of nodes in the spatial index.
    pub fn node_count(&self) -> usize {
        self.node_idx.size()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_idx.size() == 0
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// All indexed segments, sorted by id.
    pub fn segments(&self) -> &[SegmentView] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&SegmentView> {
        self.segment_slot.get(&id).map(|&i| &self.segments[i])
    }

    /// Street name attributed to a start node by the street index.
    pub fn street_at(&self, node: NodeId) -> Option<&str> {
        self.street_index.get(&node).map(|s| &**s)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Closest indexed node to `pos` and its planar distance in degrees.
    ///
    /// Returns [`NetworkError::Unavailable`] if the index is empty.
    pub fn nearest(&self, pos: GeoPoint) -> NetworkResult<NearestNode> {
        let query = [pos.lat, pos.lon];
        let entry = self
            .node_idx
            .nearest_neighbor(&query)
            .ok_or(NetworkError::Unavailable)?;
        Ok(NearestNode {
            node:     entry.id,
            pos:      GeoPoint::new(entry.point[0], entry.point[1]),
            distance: entry.distance_2(&query).sqrt(),
        })
    }

    /// Segments whose start node lies inside `bbox`, sorted by id.
    pub fn segments_in_bbox(&self, bbox: &BoundingBox) -> Vec<&SegmentView> {
        let envelope = AABB::from_corners(
            [bbox.min_lat, bbox.min_lon],
            [bbox.max_lat, bbox.max_lon],
        );
        let mut slots: Vec<usize> = self
            .segment_idx
            .locate_in_envelope(&envelope)
            .map(|e| e.slot)
            .collect();
        // Slots index a vector sorted by id, so sorting slots sorts by id.
        slots.sort_unstable();
        slots.into_iter().map(|i| &self.segments[i]).collect()
    }

    /// Segments whose start node lies within the `radius_km` bounding box
    /// around `center` (111 km per degree on both axes).
    pub fn segments_near(&self, center: GeoPoint, radius_km: f64) -> Vec<&SegmentView> {
        self.segments_in_bbox(&BoundingBox::around(center, radius_km))
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] from raw relations, then call
/// [`build`](Self::build).
///
/// Rows may be added in any order.  `build()` joins segments to nodes and
/// streets, trims street names, applies the street filter, builds the street
/// index and bulk-loads both R-trees.
///
/// # Example
///
/// ```
/// use gr_core::{GeoPoint, NodeId, SegmentId, StreetId};
/// use gr_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_node(NodeId(1), GeoPoint::new(10.776, 106.700));
/// b.add_node(NodeId(2), GeoPoint::new(10.780, 106.704));
/// b.add_street(StreetId(7), " Nguyễn Huệ ");
/// b.add_segment(SegmentId(100), NodeId(1), NodeId(2), StreetId(7));
/// let net = b.build();
/// assert_eq!(net.segment_count(), 1);
/// assert_eq!(net.street_at(NodeId(1)), Some("Nguyễn Huệ"));
/// ```
pub struct RoadNetworkBuilder {
    nodes:    FxHashMap<NodeId, GeoPoint>,
    streets:  FxHashMap<StreetId, String>,
    segments: Vec<SegmentRecord>,
    keep:     Option<Box<dyn Fn(&str) -> bool>>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:    FxHashMap::default(),
            streets:  FxHashMap::default(),
            segments: Vec::new(),
            keep:     None,
        }
    }

    /// Seed a builder with every relation of a loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut b = Self::new();
        b.nodes.reserve(dataset.nodes.len());
        for n in dataset.nodes {
            b.add_node(n.id, n.pos);
        }
        for s in dataset.streets {
            b.add_street(s.id, s.name);
        }
        b.segments = dataset.segments;
        b
    }

    /// Add (or replace) a node.
    pub fn add_node(&mut self, id: NodeId, pos: GeoPoint) {
        self.nodes.insert(id, pos);
    }

    /// Add (or replace) a street.  The name is trimmed at build time.
    pub fn add_street(&mut self, id: StreetId, name: impl Into<String>) {
        self.streets.insert(id, name.into());
    }

    pub fn add_segment(&mut self, id: SegmentId, start: NodeId, end: NodeId, street: StreetId) {
        self.segments.push(SegmentRecord { id, start, end, street });
    }

    /// Keep only segments whose trimmed street name satisfies `keep`,
    /// typically membership in the classifier's street vocabulary.
    pub fn retain_streets<F>(mut self, keep: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.keep = Some(Box::new(keep));
        self
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(S log S) for the segment sort + O(N log N) for the
    /// R-tree bulk loads.
    pub fn build(self) -> RoadNetwork {
        let mut stats = BuildStats { segments_in: self.segments.len(), ..BuildStats::default() };

        let mut raw = self.segments;
        raw.sort_by_key(|s| s.id);

        // One shared allocation per street name.
        let mut names: FxHashMap<StreetId, Option<Arc<str>>> = FxHashMap::default();
        let mut seen:  FxHashSet<SegmentId> = FxHashSet::default();
        let mut segments: Vec<SegmentView> = Vec::with_capacity(raw.len());

        for rec in raw {
            if !seen.insert(rec.id) {
                stats.duplicates += 1;
                continue;
            }

            let (Some(&start), Some(&end)) = (self.nodes.get(&rec.start), self.nodes.get(&rec.end))
            else {
                stats.dangling += 1;
                continue;
            };
            let Some(raw_name) = self.streets.get(&rec.street) else {
                stats.dangling += 1;
                continue;
            };
            if start.validate().is_err() || end.validate().is_err() {
                stats.invalid_coords += 1;
                continue;
            }

            let street = names
                .entry(rec.street)
                .or_insert_with(|| {
                    let trimmed = raw_name.trim();
                    let known = !trimmed.is_empty()
                        && self.keep.as_ref().is_none_or(|keep| keep(trimmed));
                    known.then(|| Arc::from(trimmed))
                })
                .clone();
            let Some(street) = street else {
                stats.unknown_street += 1;
                continue;
            };

            segments.push(SegmentView {
                id: rec.id,
                street,
                start_node: rec.start,
                end_node: rec.end,
                start,
                end,
            });
        }

        if stats.dangling > 0 {
            warn!("dropped {} segments with missing node or street references", stats.dangling);
        }
        if stats.invalid_coords > 0 {
            warn!("dropped {} segments with invalid endpoint coordinates", stats.invalid_coords);
        }

        // Street index: first segment (by id) leaving a node names it.
        let mut street_index: FxHashMap<NodeId, Arc<str>> = FxHashMap::default();
        let mut node_entries: Vec<NodeEntry> = Vec::new();
        for seg in &segments {
            street_index.entry(seg.start_node).or_insert_with(|| {
                node_entries.push(NodeEntry { point: [seg.start.lat, seg.start.lon], id: seg.start_node });
                seg.street.clone()
            });
        }

        let segment_entries: Vec<SegmentEntry> = segments
            .iter()
            .enumerate()
            .map(|(slot, s)| SegmentEntry { point: [s.start.lat, s.start.lon], slot })
            .collect();
        let segment_slot = segments.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        stats.segments_indexed = segments.len();
        stats.nodes_indexed = node_entries.len();

        if stats.segments_in > 0 {
            info!(
                "road network built: {} segments, {} indexed nodes ({} unknown-street, {} duplicate rows dropped)",
                stats.segments_indexed, stats.nodes_indexed, stats.unknown_street, stats.duplicates,
            );
        }

        RoadNetwork {
            segments,
            segment_slot,
            street_index,
            node_idx: RTree::bulk_load(node_entries),
            segment_idx: RTree::bulk_load(segment_entries),
            stats,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
