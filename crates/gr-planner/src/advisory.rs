//! Pre-departure traffic advice for the starting street.

use gr_core::TimeSlot;
use gr_predict::Los;

use crate::MissReason;

/// How worried a traveller should be about the start of their trip.
///
/// Stricter than [`Severity`](gr_predict::Severity): `C` is still clear
/// here and only `D` warrants a warning.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdviceLevel {
    Clear,
    Busy,
    Congested,
}

impl AdviceLevel {
    pub fn of(los: Los) -> AdviceLevel {
        match los {
            Los::E | Los::F => AdviceLevel::Congested,
            Los::D => AdviceLevel::Busy,
            Los::A | Los::B | Los::C => AdviceLevel::Clear,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AdviceLevel::Clear     => "traffic is flowing, have a good trip",
            AdviceLevel::Busy      => "the street is fairly busy, take care",
            AdviceLevel::Congested => "the street is congested, leave earlier",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DepartureAdvice {
    /// The starting point did not resolve to a known street.
    NoData(MissReason),
    Advice {
        street: String,
        slot:   TimeSlot,
        los:    Los,
        level:  AdviceLevel,
    },
}

impl DepartureAdvice {
    pub fn new(street: String, slot: TimeSlot, los: Los) -> Self {
        DepartureAdvice::Advice { street, slot, los, level: AdviceLevel::of(los) }
    }

    /// Human-readable one-liner.
    pub fn message(&self) -> String {
        match self {
            DepartureAdvice::NoData(reason) => format!("no traffic data: {reason}"),
            DepartureAdvice::Advice { street, slot, los, level } => {
                format!("{street} at {slot} (LOS {los}): {}", level.message())
            }
        }
    }
}
