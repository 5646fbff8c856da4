//! Lookup-table congestion classifier and its CSV artifact.
//!
//! # Artifact format
//!
//! One row per `(street, weekday, hour)` slot:
//!
//! ```csv
//! street_name,weekday,hour,los
//! Lê Lợi,0,7,D
//! Lê Lợi,0,8,E
//! Pasteur,0,period_7_30,B
//! ```
//!
//! `hour` is either a plain integer or the `period_H_M` form used by the
//! training data; the first group of digits is the hour and a value with no
//! digits at all reads as hour 0.  The `LOS` and `period` header spellings
//! of the training data are accepted too.  A slot may appear only once.
//!
//! # Lookup
//!
//! 1. the exact `(street, weekday, hour)` slot;
//! 2. otherwise the street's median observed label;
//! 3. otherwise the model-wide fallback (default `C`).

use std::io::Read;
use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use gr_core::TimeSlot;

use crate::{CongestionModel, Los, PredictError, PredictResult, PredictionFeatures, StreetVocabulary};

/// A pretrained lookup table keyed on [`PredictionFeatures`].
#[derive(Clone, Debug)]
pub struct ProfileModel {
    table:          FxHashMap<PredictionFeatures, Los>,
    street_default: Vec<Option<Los>>,
    fallback:       Los,
}

impl ProfileModel {
    /// Label used when neither the slot nor the street has any observation.
    pub fn with_fallback(mut self, fallback: Los) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of explicit slots in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl CongestionModel for ProfileModel {
    fn predict(&self, features: PredictionFeatures) -> PredictResult<Los> {
        let Some(street_default) = self.street_default.get(features.street_code as usize) else {
            return Err(PredictError::UnknownStreetCode(features.street_code));
        };
        Ok(self
            .table
            .get(&features)
            .copied()
            .or(*street_default)
            .unwrap_or(self.fallback))
    }
}

/// A loaded artifact: the model plus the vocabulary its codes refer to.
#[derive(Clone, Debug)]
pub struct ProfileArtifact {
    pub vocabulary: StreetVocabulary,
    pub model:      ProfileModel,
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProfileRow {
    street_name: String,
    weekday:     u32,
    #[serde(alias = "period")]
    hour:        String,
    #[serde(alias = "LOS")]
    los:         String,
}

/// Load a profile artifact from a CSV file.
pub fn load_profile_csv(path: &Path) -> PredictResult<ProfileArtifact> {
    let file = std::fs::File::open(path)?;
    load_profile_reader(file)
}

/// Like [`load_profile_csv`] but accepts any `Read` source.
pub fn load_profile_reader<R: Read>(reader: R) -> PredictResult<ProfileArtifact> {
    // ── Parse rows ────────────────────────────────────────────────────────
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut rows: Vec<(String, TimeSlot, Los)> = Vec::new();

    for (i, result) in csv_reader.deserialize::<ProfileRow>().enumerate() {
        let line = i + 2; // 1-based, after the header
        let row = result.map_err(|e| PredictError::Parse(format!("line {line}: {e}")))?;
        let slot = TimeSlot::new(parse_hour(&row.hour), row.weekday)
            .map_err(|e| PredictError::Parse(format!("line {line}: {e}")))?;
        let los: Los = row
            .los
            .parse()
            .map_err(|e| PredictError::Parse(format!("line {line}: {e}")))?;
        rows.push((row.street_name, slot, los));
    }

    // ── Vocabulary, then the table in code space ──────────────────────────
    let vocabulary = StreetVocabulary::from_names(rows.iter().map(|(name, ..)| name));

    let mut table: FxHashMap<PredictionFeatures, Los> = FxHashMap::default();
    let mut observed: Vec<Vec<Los>> = vec![Vec::new(); vocabulary.len()];

    for (name, slot, los) in rows {
        let Some(code) = vocabulary.code(&name) else {
            return Err(PredictError::Parse(format!("blank street name in slot {slot}")));
        };
        let key = PredictionFeatures::new(slot, code);
        if table.insert(key, los).is_some() {
            return Err(PredictError::Parse(format!(
                "duplicate slot {slot} for street {:?}",
                name.trim()
            )));
        }
        observed[code as usize].push(los);
    }

    let street_default = observed
        .into_iter()
        .map(|mut labels| {
            labels.sort_unstable();
            labels.get(labels.len().saturating_sub(1) / 2).copied()
        })
        .collect();

    info!("loaded congestion profile: {} slots over {} streets", table.len(), vocabulary.len());

    Ok(ProfileArtifact {
        vocabulary,
        model: ProfileModel { table, street_default, fallback: Los::C },
    })
}

/// First group of digits in `s` as an hour; `0` when there are none.
///
/// `"17"` → 17, `"period_9_30"` → 9, `"period"` → 0.
fn parse_hour(s: &str) -> u32 {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    // Overlong digit runs saturate and are rejected by `TimeSlot::new`.
    digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
}
