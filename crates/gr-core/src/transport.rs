//! Travel modes that the planner can rank.
//!
//! All variants are always compiled in.  Which modes are offered for a given
//! trip is decided at query time from distance limits in the planner config.

/// A way of getting from origin to destination.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    /// Private car.
    #[cfg_attr(feature = "serde", serde(rename = "drive"))]
    Car,
    /// Motorcycle or scooter.
    #[cfg_attr(feature = "serde", serde(rename = "motorcycle"))]
    Motorbike,
    /// Bicycle.
    #[cfg_attr(feature = "serde", serde(rename = "bicycle"))]
    Bike,
    /// On foot.
    #[cfg_attr(feature = "serde", serde(rename = "walk"))]
    Walk,
}

impl TravelMode {
    /// Every mode, in the order used to break ranking ties.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Car,
        TravelMode::Motorbike,
        TravelMode::Bike,
        TravelMode::Walk,
    ];

    /// Stable lowercase label, matching the values the client app expects.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Car       => "drive",
            TravelMode::Motorbike => "motorcycle",
            TravelMode::Bike      => "bicycle",
            TravelMode::Walk      => "walk",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
