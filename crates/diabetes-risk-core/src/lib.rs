//! Diabetes Risk Core Library
//!
//! Deterministic inference pipeline that scores a patient's diabetes risk
//! from eight clinical markers using a pre-trained logistic-regression
//! classifier and its paired standardization parameters.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`FeatureVector`, `RiskFactors`, `Prediction`)
//! - The artifact store (`ModelArtifacts`), loaded once at startup
//! - The pipeline stages (`StandardScaler`, `LogisticModel`) and their
//!   orchestration (`RiskScorer`)
//! - Error types and result aliases
//! - Configuration structures
//!
//! Transport concerns (HTTP routing, request schemas, static pages) live in
//! the server crate; everything here is pure, synchronous computation over
//! immutable shared state.
//!
//! # Example
//!
//! ```
//! use diabetes_risk_core::artifacts::ModelArtifacts;
//! use diabetes_risk_core::classifier::LogisticModel;
//! use diabetes_risk_core::features::RiskFactors;
//! use diabetes_risk_core::pipeline::RiskScorer;
//! use diabetes_risk_core::scaler::StandardScaler;
//!
//! let artifacts = ModelArtifacts::from_parts(
//!     StandardScaler::new([0.0; 8], [1.0; 8]),
//!     LogisticModel::new([0.1; 8], -0.5),
//! );
//! let scorer = RiskScorer::new(artifacts);
//!
//! let factors = RiskFactors::from_ordered([1.0, 120.0, 70.0, 20.0, 80.0, 25.0, 0.5, 30.0]);
//! let prediction = scorer.predict(&factors).unwrap();
//! assert!(prediction.label.is_positive());
//! ```

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod scaler;
pub mod types;

// Re-exports for convenience
pub use artifacts::{ArtifactError, ModelArtifacts};
pub use classifier::{LogisticModel, DECISION_THRESHOLD};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use features::RiskFactors;
pub use pipeline::RiskScorer;
pub use scaler::StandardScaler;
pub use types::{FeatureVector, Prediction, RiskLabel, FEATURE_COUNT, FEATURE_NAMES};
