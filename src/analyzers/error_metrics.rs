use serde::Serialize;

use crate::error::{PredictorError, Result};

/// Error between the predicted and actual minimum for a single row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowError {
    pub absolute_error: Option<f64>,
    pub squared_error: Option<f64>,
}

impl RowError {
    pub fn between(predicted: Option<f64>, actual: Option<f64>) -> Self {
        match (predicted, actual) {
            (Some(p), Some(a)) => {
                let diff = p - a;
                Self {
                    absolute_error: Some(diff.abs()),
                    squared_error: Some(diff * diff),
                }
            }
            _ => Self {
                absolute_error: None,
                squared_error: None,
            },
        }
    }

    pub fn is_defined(&self) -> bool {
        self.absolute_error.is_some() && self.squared_error.is_some()
    }
}

/// Per-row errors for paired predicted/actual columns, in row order
pub fn calculate_errors<I>(pairs: I) -> Vec<RowError>
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    pairs
        .into_iter()
        .map(|(predicted, actual)| RowError::between(predicted, actual))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetrics {
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    pub included_rows: usize,
    pub excluded_rows: usize,
}

impl ErrorMetrics {
    /// Aggregate row errors, skipping rows whose errors are undefined
    pub fn from_row_errors(errors: &[RowError]) -> Result<Self> {
        let mut abs_sum = 0.0f64;
        let mut sq_sum = 0.0f64;
        let mut included = 0usize;

        for err in errors {
            if let (Some(abs), Some(sq)) = (err.absolute_error, err.squared_error) {
                abs_sum += abs;
                sq_sum += sq;
                included += 1;
            }
        }

        if included == 0 {
            return Err(PredictorError::NoComparableRows);
        }

        let mae = abs_sum / included as f64;
        let mse = sq_sum / included as f64;
        let rmse = mse.sqrt();

        if !(mae.is_finite() && mse.is_finite()) {
            return Err(PredictorError::Computation(format!(
                "Non-finite error metrics (MAE={}, MSE={})",
                mae, mse
            )));
        }

        Ok(Self {
            mae,
            mse,
            rmse,
            included_rows: included,
            excluded_rows: errors.len() - included,
        })
    }

    /// Metric values in the order of their chart labels
    pub fn values(&self) -> [f64; 3] {
        [self.mae, self.mse, self.rmse]
    }

    pub fn summary(&self) -> String {
        format!(
            "Mean Absolute Error (MAE): {:.2}\n\
            Mean Squared Error (MSE): {:.2}\n\
            Root Mean Squared Error (RMSE): {:.2}\n\
            Rows compared: {} ({} without a defined prediction)",
            self.mae, self.mse, self.rmse, self.included_rows, self.excluded_rows
        )
    }
}
