pub mod error_metrics;

pub use error_metrics::{calculate_errors, ErrorMetrics, RowError};
