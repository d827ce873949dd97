//! Artifact store: learned parameters loaded once at startup.
//!
//! Two artifacts are consumed, both JSON exported from the same offline
//! training run: the standardization parameters (`{"mean": [...], "scale":
//! [...]}`) and the classifier parameters (`{"weights": [...], "intercept":
//! ...}`). Both must have been fit over features in the order of
//! [`FEATURE_NAMES`](crate::types::FEATURE_NAMES). Nothing in the persisted
//! form encodes that pairing, so the loader can only verify shape; the
//! pairing itself is an operational invariant of the export step.
//!
//! Loading happens exactly once, before the first request is served. Every
//! failure here is fatal: the process must not start serving with a partial
//! or mismatched parameter set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::classifier::LogisticModel;
use crate::scaler::StandardScaler;
use crate::types::FEATURE_COUNT;

/// Errors raised while loading artifacts at startup.
///
/// All variants are fatal: there is no degraded serving mode.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file does not exist.
    #[error("Artifact not found: {path}")]
    NotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Artifact file exists but could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the expected shape.
    #[error("Failed to parse artifact {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Artifact carries the wrong number of per-feature parameters.
    #[error("Dimension mismatch in {what}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        /// Which parameter sequence was misshapen (e.g. `scaler.mean`)
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Persisted shape of the standardization artifact.
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// Persisted shape of the classifier artifact.
#[derive(Debug, Deserialize)]
struct ClassifierArtifact {
    weights: Vec<f64>,
    intercept: f64,
}

/// The two learned parameter sets, loaded once and immutable thereafter.
///
/// Shared read-only across all requests for the process lifetime; no
/// locking or reload discipline applies because nothing mutates it after
/// [`ModelArtifacts::load`] returns.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

impl ModelArtifacts {
    /// Load and validate both artifacts from disk.
    ///
    /// Validation covers structure only: each per-feature sequence must
    /// carry exactly [`FEATURE_COUNT`] values. Whether the two files came
    /// from the same training run cannot be checked here (no metadata
    /// exists in the persisted form) and is documented above as an
    /// external invariant.
    pub fn load(scaler_path: &Path, model_path: &Path) -> Result<Self, ArtifactError> {
        let raw: ScalerArtifact = read_json(scaler_path)?;
        let mean = fixed_width("scaler.mean", raw.mean)?;
        let scale = fixed_width("scaler.scale", raw.scale)?;

        let raw: ClassifierArtifact = read_json(model_path)?;
        let weights = fixed_width("model.weights", raw.weights)?;

        info!(
            scaler = %scaler_path.display(),
            model = %model_path.display(),
            features = FEATURE_COUNT,
            "model artifacts loaded"
        );

        Ok(Self {
            scaler: StandardScaler::new(mean, scale),
            model: LogisticModel::new(weights, raw.intercept),
        })
    }

    /// Assemble from already-validated parts (in-memory construction, used
    /// by tests and embedders that do not go through the filesystem).
    pub fn from_parts(scaler: StandardScaler, model: LogisticModel) -> Self {
        Self { scaler, model }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|err| ArtifactError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn fixed_width(
    what: &'static str,
    values: Vec<f64>,
) -> Result<[f64; FEATURE_COUNT], ArtifactError> {
    let actual = values.len();
    values
        .try_into()
        .map_err(|_| ArtifactError::DimensionMismatch {
            what,
            expected: FEATURE_COUNT,
            actual,
        })
}
