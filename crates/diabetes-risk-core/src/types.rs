//! Domain types for the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Number of clinical markers in a feature vector.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in fit order.
///
/// This order is load-bearing: it must exactly match the column order the
/// standardization and classifier artifacts were fit on. Every place that
/// touches a positional index (assembly, scaling, scoring, artifact
/// validation) goes through this constant.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pregnancies",
    "glucose",
    "blood_pressure",
    "skin_thickness",
    "insulin",
    "bmi",
    "diabetes_pedigree",
    "age",
];

/// Ordered numeric representation of one patient's clinical markers.
///
/// Created per request and discarded when the request completes. The
/// positional meaning of each slot is given by [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap an already-ordered set of values.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Borrow the underlying fixed-order values.
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Iterate values in fit order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Binary risk decision derived from the calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    /// Below the decision threshold (class 0).
    Negative,
    /// At or above the decision threshold (class 1).
    Positive,
}

impl RiskLabel {
    /// Integer class encoding (0 or 1), matching the trained classifier.
    pub fn as_u8(self) -> u8 {
        match self {
            RiskLabel::Negative => 0,
            RiskLabel::Positive => 1,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, RiskLabel::Positive)
    }
}

/// Result of scoring one request.
///
/// `probability` is always in `[0, 1]` and never NaN; `label` is `Positive`
/// exactly when the probability reaches the decision threshold. Not
/// persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub probability: f64,
    pub label: RiskLabel,
}
