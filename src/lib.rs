pub mod analyzers;
pub mod charts;
pub mod cli;
pub mod error;
pub mod models;
pub mod predictor;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{PredictorError, Result};
