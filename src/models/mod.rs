pub mod dataset;
pub mod observation;

pub use dataset::{AnalysedRow, Dataset};
pub use observation::Observation;
