use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Load error: {0}")]
    Load(String),

    #[error("Computation failure: {0}")]
    Computation(String),

    #[error("No rows with a defined prediction to compare")]
    NoComparableRows,

    #[error("Cannot run {step} from state {from}")]
    InvalidTransition { from: String, step: &'static str },

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

impl PredictorError {
    /// True for failures raised while reading the input table
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            PredictorError::Io(_)
                | PredictorError::Csv(_)
                | PredictorError::MissingColumn { .. }
                | PredictorError::Load(_)
        )
    }

    pub fn is_computation_failure(&self) -> bool {
        matches!(
            self,
            PredictorError::Computation(_)
                | PredictorError::NoComparableRows
                | PredictorError::InvalidTransition { .. }
        )
    }
}
