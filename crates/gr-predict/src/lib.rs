//! `gr-predict` — congestion prediction.
//!
//! Wraps a pretrained, opaque classifier that maps
//! `(hour, weekday, street)` to a level-of-service label.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`los`]        | `Los` (A–F), `Severity` buckets                           |
//! | [`vocabulary`] | `StreetVocabulary`, street name ↔ model code             |
//! | [`model`]      | `PredictionFeatures`, `CongestionModel` trait             |
//! | [`profile`]    | `ProfileModel` lookup-table artifact and its CSV loader   |
//! | [`predictor`]  | `Predictor`: name-level single and batched prediction    |
//! | [`error`]      | `PredictError`, `PredictResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Large batches are split across Rayon workers.           |
//! | `serde`    | Derives `Serialize`/`Deserialize` on labels.            |

pub mod error;
pub mod los;
pub mod model;
pub mod predictor;
pub mod profile;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use error::{PredictError, PredictResult};
pub use los::{Los, Severity};
pub use model::{CongestionModel, PredictionFeatures};
pub use predictor::Predictor;
pub use profile::{load_profile_csv, load_profile_reader, ProfileArtifact, ProfileModel};
pub use vocabulary::StreetVocabulary;
