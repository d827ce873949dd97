//! Patient input record and feature vector assembly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// The eight clinical markers accepted by the scoring pipeline.
///
/// Field declaration order mirrors the fit order in
/// [`FEATURE_NAMES`](crate::types::FEATURE_NAMES). Values are taken as-is:
/// clinical plausibility checks (negative age, zero blood pressure, ...) are
/// deliberately out of scope here and belong to whatever request-validation
/// layer sits in front of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

impl RiskFactors {
    /// Build a record from values already in fit order.
    pub fn from_ordered(values: [f64; FEATURE_COUNT]) -> Self {
        let [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, diabetes_pedigree, age] =
            values;
        Self {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            diabetes_pedigree,
            age,
        }
    }

    /// Validate a loose JSON object into a typed record.
    ///
    /// Fields are checked in fit order; the first absent field is reported
    /// as [`CoreError::MissingField`] and the first non-numeric or
    /// non-finite value as [`CoreError::NonNumericField`]. Unknown extra
    /// fields are ignored.
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let mut values = [0.0_f64; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = value
                .get(name)
                .ok_or(CoreError::MissingField { field: name })?;
            let number = raw
                .as_f64()
                .filter(|n| n.is_finite())
                .ok_or(CoreError::NonNumericField { field: name })?;
            *slot = number;
        }
        Ok(Self::from_ordered(values))
    }

    /// Assemble the fixed-order feature vector for this record.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector::new([
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age,
        ])
    }
}
