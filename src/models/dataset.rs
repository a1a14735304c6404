use serde::Serialize;

use crate::models::Observation;

/// An observation together with the minimum temperatures derived from it.
///
/// A `None` correction means no K band applied to the observation; the
/// predicted and actual minima are then missing as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysedRow {
    pub observation: Observation,
    pub correction: Option<f64>,
    pub predicted_min: Option<f64>,
    pub actual_min: Option<f64>,
}

impl AnalysedRow {
    pub fn new(
        observation: Observation,
        correction: Option<f64>,
        predicted_min: Option<f64>,
        actual_min: Option<f64>,
    ) -> Self {
        Self {
            observation,
            correction,
            predicted_min,
            actual_min,
        }
    }

    /// Both sides of the comparison are defined
    pub fn is_comparable(&self) -> bool {
        self.predicted_min.is_some() && self.actual_min.is_some()
    }
}

/// Rows in source order, addressed by position only
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    rows: Vec<AnalysedRow>,
}

impl Dataset {
    pub fn new(rows: Vec<AnalysedRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AnalysedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn predicted_column(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.predicted_min).collect()
    }

    pub fn actual_column(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.actual_min).collect()
    }

    pub fn undefined_count(&self) -> usize {
        self.rows.iter().filter(|r| r.correction.is_none()).count()
    }
}
