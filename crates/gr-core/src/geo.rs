//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude; route closure compares hops
//! against the caller's destination to within 100 m.
//!
//! Two distance notions coexist:
//!
//! - [`GeoPoint::distance_m`] / [`GeoPoint::distance_km`]: haversine
//!   great-circle distance, used for every user-visible decision.
//! - [`BoundingBox::around`]: a fixed 111 km-per-degree box used to gather
//!   "nearby" segments.  Longitude compression is ignored; at the
//!   network's operating latitudes (10–21° N) the box is slightly wider in
//!   km east–west than north–south.

use crate::{CoreError, CoreResult};

/// Kilometres per degree used for bounding-box radius conversion.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting non-finite or out-of-range values.
    pub fn checked(lat: f64, lon: f64) -> CoreResult<Self> {
        Self::new(lat, lon).validate()
    }

    /// Return `self` if it is a finite, in-range WGS-84 coordinate.
    pub fn validate(self) -> CoreResult<Self> {
        let ok = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if ok {
            Ok(self)
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Haversine great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / 1_000.0
    }

    /// Initial compass bearing from `self` to `other`, in degrees `[0, 360)`.
    ///
    /// Identical points yield `0.0`.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    /// Planar Euclidean distance in degrees, the spatial index's native
    /// metric.
    #[inline]
    pub fn planar_distance_deg(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Absolute circular difference between two bearings, normalised to
/// `[0, 180]` degrees.
#[inline]
pub fn angular_difference(a_deg: f64, b_deg: f64) -> f64 {
    let d = (a_deg - b_deg).rem_euclid(360.0);
    if d > 180.0 { 360.0 - d } else { d }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned lat/lon box, inclusive on every edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Square box of half-size `radius_km / KM_PER_DEGREE` degrees on both
    /// axes, centred on `center`.
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let half_deg = radius_km / KM_PER_DEGREE;
        Self {
            min_lat: center.lat - half_deg,
            min_lon: center.lon - half_deg,
            max_lat: center.lat + half_deg,
            max_lon: center.lon + half_deg,
        }
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat)
            && (self.min_lon..=self.max_lon).contains(&p.lon)
    }
}
