//! SQLite dataset source (feature `sqlite`).
//!
//! Reads the three relations from tables named `nodes`, `segments` and
//! `streets`:
//!
//! ```sql
//! CREATE TABLE nodes    (id INTEGER PRIMARY KEY, lat REAL NOT NULL, lon REAL NOT NULL);
//! CREATE TABLE segments (id INTEGER PRIMARY KEY, s_node_id INTEGER NOT NULL,
//!                        e_node_id INTEGER NOT NULL, street_id INTEGER NOT NULL);
//! CREATE TABLE streets  (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
//! ```

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use gr_core::{GeoPoint, NodeId, SegmentId, StreetId};

use crate::dataset::{Dataset, NodeRecord, SegmentRecord, StreetRecord};
use crate::NetworkResult;

/// Open `path` read-only and load the dataset from it.
pub fn open_dataset_sqlite(path: &Path) -> NetworkResult<Dataset> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    load_dataset_sqlite(&conn)
}

/// Load the dataset from an already-open connection.
pub fn load_dataset_sqlite(conn: &Connection) -> NetworkResult<Dataset> {
    let mut stmt = conn.prepare("SELECT id, lat, lon FROM nodes ORDER BY id")?;
    let nodes = stmt
        .query_map([], |row| {
            Ok(NodeRecord {
                id:  NodeId(row.get::<_, i64>(0)? as u64),
                pos: GeoPoint::new(row.get(1)?, row.get(2)?),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt =
        conn.prepare("SELECT id, s_node_id, e_node_id, street_id FROM segments ORDER BY id")?;
    let segments = stmt
        .query_map([], |row| {
            Ok(SegmentRecord {
                id:     SegmentId(row.get::<_, i64>(0)? as u64),
                start:  NodeId(row.get::<_, i64>(1)? as u64),
                end:    NodeId(row.get::<_, i64>(2)? as u64),
                street: StreetId(row.get::<_, i64>(3)? as u64),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare("SELECT id, name FROM streets ORDER BY id")?;
    let streets = stmt
        .query_map([], |row| {
            Ok(StreetRecord { id: StreetId(row.get::<_, i64>(0)? as u64), name: row.get(1)? })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset { nodes, segments, streets })
}
