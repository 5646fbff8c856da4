//! Hour-by-hour congestion forecast for one street.

use chrono::NaiveTime;
use log::warn;

use gr_core::TimeSlot;
use gr_predict::{Los, Predictor, Severity};

use crate::config::check_horizon;
use crate::PlannerResult;

/// One hour of a forecast.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEntry {
    /// Start of the hour, e.g. `17:00`.
    pub clock_time: NaiveTime,
    pub slot:       TimeSlot,
    pub los:        Los,
    pub severity:   Severity,
}

/// Predict `street` for `horizon` consecutive hours starting at `start`.
///
/// Step `i` covers `start.offset_hours(i)`, so the weekday rolls over when
/// the hour wraps past midnight.  A step whose prediction fails is logged
/// and left out; the remaining steps are still returned.
pub fn forecast(
    predictor: &Predictor,
    street:    &str,
    start:     TimeSlot,
    horizon:   u32,
) -> PlannerResult<Vec<TimelineEntry>> {
    check_horizon(horizon)?;

    let mut entries = Vec::with_capacity(horizon as usize);
    for i in 0..horizon {
        let slot = start.offset_hours(i);
        match predictor.predict(slot, street) {
            Ok(los) => entries.push(TimelineEntry {
                clock_time: slot.clock_time(),
                slot,
                los,
                severity: los.severity(),
            }),
            Err(e) => warn!("timeline step {slot} for {street:?} skipped: {e}"),
        }
    }
    Ok(entries)
}
