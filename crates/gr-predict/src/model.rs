//! The classifier seam.
//!
//! `gr-predict` never looks inside the classifier.  Anything that maps
//! [`PredictionFeatures`] to a [`Los`] can be plugged in: the bundled
//! [`ProfileModel`](crate::ProfileModel), a bridge to an external inference
//! runtime, or a fixed table in tests.

use gr_core::TimeSlot;

use crate::{Los, PredictResult};

/// The classifier's input row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PredictionFeatures {
    pub hour:        u8,
    pub weekday:     u8,
    pub street_code: u32,
}

impl PredictionFeatures {
    #[inline]
    pub fn new(slot: TimeSlot, street_code: u32) -> Self {
        Self {
            hour:        slot.hour() as u8,
            weekday:     slot.weekday() as u8,
            street_code,
        }
    }
}

/// A pretrained congestion classifier.
///
/// # Thread safety
///
/// Models are loaded once and shared by every concurrent request, so
/// implementations must be `Send + Sync` and must not mutate state while
/// predicting.
pub trait CongestionModel: Send + Sync {
    /// Predict the level of service for one feature row.
    fn predict(&self, features: PredictionFeatures) -> PredictResult<Los>;

    /// Predict many rows at once, returning labels in input order.
    ///
    /// Override only to amortise per-call overhead.  Overrides must return
    /// exactly what mapping [`predict`](Self::predict) over `features` would.
    fn predict_batch(&self, features: &[PredictionFeatures]) -> PredictResult<Vec<Los>> {
        features.iter().map(|&f| self.predict(f)).collect()
    }
}
