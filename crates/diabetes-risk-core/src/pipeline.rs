//! Prediction orchestration: assemble → standardize → classify.

use std::sync::Arc;

use tracing::trace;

use crate::artifacts::ModelArtifacts;
use crate::error::CoreResult;
use crate::features::RiskFactors;
use crate::types::Prediction;

/// Scores patients against the loaded artifact pair.
///
/// Each call is an independent, synchronous, CPU-bound computation with no
/// suspension points. The scorer is `Clone` and cheap to clone (the
/// artifacts sit behind an `Arc`), so any number of worker tasks can score
/// concurrently without coordination; the shared state is read-only for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    artifacts: Arc<ModelArtifacts>,
}

impl RiskScorer {
    pub fn new(artifacts: ModelArtifacts) -> Self {
        Self {
            artifacts: Arc::new(artifacts),
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Deterministic: identical factors against identical artifacts yield
    /// bit-identical predictions, so there is nothing to retry on failure.
    pub fn predict(&self, factors: &RiskFactors) -> CoreResult<Prediction> {
        let x = factors.feature_vector();
        let z = self.artifacts.scaler.transform(&x)?;
        let prediction = self.artifacts.model.classify(&z);
        trace!(
            probability = prediction.probability,
            label = prediction.label.as_u8(),
            "request scored"
        );
        Ok(prediction)
    }

    /// Read-only view of the loaded artifacts.
    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }
}
