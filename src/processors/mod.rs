pub mod pipeline;

pub use pipeline::{analyse_observation, Pipeline, PipelineState};
