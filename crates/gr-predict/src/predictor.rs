//! Name-level congestion prediction.
//!
//! [`Predictor`] pairs a [`CongestionModel`] with the [`StreetVocabulary`] its
//! codes refer to, so callers work with street names and [`TimeSlot`]s and
//! never see raw feature rows.
//!
//! # Batching
//!
//! `predict_batch` exists for throughput: the route planner re-scores dozens
//! of candidate segments per hop in one call.  It is semantically identical
//! to calling `predict` element-wise, in input order.  With the `parallel`
//! feature, batches of at least `PARALLEL_MIN_BATCH` rows are split into
//! contiguous chunks scored on Rayon workers and re-joined in order.

use gr_core::TimeSlot;

use crate::{
    CongestionModel, Los, PredictError, PredictResult, PredictionFeatures, ProfileArtifact,
    StreetVocabulary,
};

#[cfg(feature = "parallel")]
const PARALLEL_MIN_BATCH: usize = 4_096;

#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 1_024;

/// Shared, read-only congestion predictor.
pub struct Predictor {
    vocabulary: StreetVocabulary,
    model:      Box<dyn CongestionModel>,
}

impl Predictor {
    pub fn new<M: CongestionModel + 'static>(vocabulary: StreetVocabulary, model: M) -> Self {
        Self { vocabulary, model: Box::new(model) }
    }

    pub fn from_artifact(artifact: ProfileArtifact) -> Self {
        Self::new(artifact.vocabulary, artifact.model)
    }

    pub fn vocabulary(&self) -> &StreetVocabulary {
        &self.vocabulary
    }

    /// `true` if `street` is in the classifier's vocabulary.
    #[inline]
    pub fn knows(&self, street: &str) -> bool {
        self.vocabulary.contains(street)
    }

    /// Encode one query as a feature row.
    pub fn features(&self, slot: TimeSlot, street: &str) -> PredictResult<PredictionFeatures> {
        self.vocabulary
            .code(street)
            .map(|code| PredictionFeatures::new(slot, code))
            .ok_or_else(|| PredictError::UnknownStreet(street.trim().to_owned()))
    }

    /// Level of service on `street` during `slot`.
    pub fn predict(&self, slot: TimeSlot, street: &str) -> PredictResult<Los> {
        self.model.predict(self.features(slot, street)?)
    }

    /// Levels of service for many `(slot, street)` queries, in input order.
    ///
    /// Fails as a whole if any street is unknown or the model fails on any
    /// row.
    pub fn predict_batch<S: AsRef<str>>(&self, queries: &[(TimeSlot, S)]) -> PredictResult<Vec<Los>> {
        let features = queries
            .iter()
            .map(|(slot, street)| self.features(*slot, street.as_ref()))
            .collect::<PredictResult<Vec<_>>>()?;

        let labels = self.score(&features)?;
        if labels.len() != features.len() {
            return Err(PredictError::BatchLength { expected: features.len(), got: labels.len() });
        }
        Ok(labels)
    }

    #[cfg(not(feature = "parallel"))]
    fn score(&self, features: &[PredictionFeatures]) -> PredictResult<Vec<Los>> {
        self.model.predict_batch(features)
    }

    #[cfg(feature = "parallel")]
    fn score(&self, features: &[PredictionFeatures]) -> PredictResult<Vec<Los>> {
        use rayon::prelude::*;

        if features.len() < PARALLEL_MIN_BATCH {
            return self.model.predict_batch(features);
        }

        let chunks = features
            .par_chunks(PARALLEL_CHUNK)
            .map(|chunk| {
                let labels = self.model.predict_batch(chunk)?;
                if labels.len() != chunk.len() {
                    return Err(PredictError::BatchLength { expected: chunk.len(), got: labels.len() });
                }
                Ok(labels)
            })
            .collect::<PredictResult<Vec<Vec<Los>>>>()?;
        Ok(chunks.into_iter().flatten().collect())
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("streets", &self.vocabulary.len())
            .finish_non_exhaustive()
    }
}
