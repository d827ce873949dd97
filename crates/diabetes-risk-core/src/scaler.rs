//! Standardization transform over learned per-feature statistics.

use crate::error::{CoreError, CoreResult};
use crate::types::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Learned per-feature mean and scale, fit offline alongside the classifier.
///
/// `Invariant: scale[i] > 0 for all i`. A zero scale means a zero-variance
/// training column and is rejected at transform time rather than divided
/// through.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Self {
        Self { mean, scale }
    }

    pub fn mean(&self) -> &[f64; FEATURE_COUNT] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64; FEATURE_COUNT] {
        &self.scale
    }

    /// Rescale one feature vector: `z[i] = (x[i] - mean[i]) / scale[i]`.
    ///
    /// Pure function over its inputs: plain IEEE double-precision
    /// arithmetic, no clamping, bit-identical output for identical input.
    /// A zero scale fails with [`CoreError::DegenerateScale`] instead of
    /// producing an infinity.
    pub fn transform(&self, x: &FeatureVector) -> CoreResult<FeatureVector> {
        let mut z = [0.0_f64; FEATURE_COUNT];
        for (i, value) in x.iter().enumerate() {
            let scale = self.scale[i];
            if scale == 0.0 {
                return Err(CoreError::DegenerateScale {
                    index: i,
                    name: FEATURE_NAMES[i],
                    scale,
                });
            }
            z[i] = (value - self.mean[i]) / scale;
        }
        Ok(FeatureVector::new(z))
    }
}
