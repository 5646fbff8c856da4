//! Level-of-service labels.

use std::fmt;
use std::str::FromStr;

use crate::PredictError;

/// Level of service, `A` (free flow) through `F` (breakdown).
///
/// Ordered best to worst, so `Los::A < Los::F`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Los {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Los {
    pub const ALL: [Los; 6] = [Los::A, Los::B, Los::C, Los::D, Los::E, Los::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Los::A => "A",
            Los::B => "B",
            Los::C => "C",
            Los::D => "D",
            Los::E => "E",
            Los::F => "F",
        }
    }

    /// `A` or `B`.
    #[inline]
    pub fn is_clear(self) -> bool {
        matches!(self, Los::A | Los::B)
    }

    #[inline]
    pub fn severity(self) -> Severity {
        Severity::of(self)
    }
}

impl FromStr for Los {
    type Err = PredictError;

    /// Accepts a single letter, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Los::A),
            "B" | "b" => Ok(Los::B),
            "C" | "c" => Ok(Los::C),
            "D" | "d" => Ok(Los::D),
            "E" | "e" => Ok(Los::E),
            "F" | "f" => Ok(Los::F),
            other => Err(PredictError::InvalidLabel(other.to_owned())),
        }
    }
}

impl fmt::Display for Los {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Three-tier human-facing bucket of a [`Los`].
///
/// | Severity    | Labels |
/// |-------------|--------|
/// | `Clear`     | A, B   |
/// | `Busy`      | C, D   |
/// | `Congested` | E, F   |
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Clear,
    Busy,
    Congested,
}

impl Severity {
    pub fn of(los: Los) -> Severity {
        match los {
            Los::A | Los::B => Severity::Clear,
            Los::C | Los::D => Severity::Busy,
            Los::E | Los::F => Severity::Congested,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Clear     => "clear",
            Severity::Busy      => "busy",
            Severity::Congested => "congested",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
