//! Linear decision function with a logistic link.

use crate::types::{FeatureVector, Prediction, RiskLabel, FEATURE_COUNT};

/// Fixed decision threshold, mirroring the trained classifier's native
/// decision boundary. Not independently tunable without re-deriving the
/// calibration.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Learned logistic-regression weights and intercept.
///
/// Operates on standardized feature vectors; feeding it raw (unscaled)
/// values produces garbage scores, which is why the orchestrator always
/// routes input through [`StandardScaler`](crate::scaler::StandardScaler)
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticModel {
    pub fn new(weights: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self { weights, intercept }
    }

    pub fn weights(&self) -> &[f64; FEATURE_COUNT] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Pre-sigmoid linear score: `intercept + weights · z`.
    pub fn decision_function(&self, z: &FeatureVector) -> f64 {
        self.weights
            .iter()
            .zip(z.iter())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.intercept
    }

    /// Score a standardized feature vector.
    ///
    /// Pure function. The label resolves to `Positive` exactly when the
    /// probability reaches [`DECISION_THRESHOLD`], including a probability
    /// of exactly 0.5.
    pub fn classify(&self, z: &FeatureVector) -> Prediction {
        let logit = self.decision_function(z);
        let probability = sigmoid(logit);
        let label = if probability >= DECISION_THRESHOLD {
            RiskLabel::Positive
        } else {
            RiskLabel::Negative
        };
        Prediction { probability, label }
    }
}

/// Logistic sigmoid `1 / (1 + e^(-x))`, computed without overflowing `exp`.
///
/// Branching on the sign keeps the exponent non-positive on both paths, so
/// the result is well-defined in `[0, 1]` for any finite or infinite input.
/// A naive `(-x).exp()` overflows to infinity once `x` drops below about
/// -709 and would poison the probability.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
