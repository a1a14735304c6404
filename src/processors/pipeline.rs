use crate::analyzers::{calculate_errors, ErrorMetrics, RowError};
use crate::charts::ChartRenderer;
use crate::error::{PredictorError, Result};
use crate::models::{AnalysedRow, Dataset, Observation};
use crate::predictor::{calculate_actual_min_temp, calculate_min_temp, correction_constant};
use crate::readers::ObservationReader;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    NotStarted,
    Loaded,
    Computed,
    Aggregated,
    Visualized,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::NotStarted => "NotStarted",
            PipelineState::Loaded => "Loaded",
            PipelineState::Computed => "Computed",
            PipelineState::Aggregated => "Aggregated",
            PipelineState::Visualized => "Visualized",
            PipelineState::Done => "Done",
            PipelineState::Failed => "Failed",
        };
        f.write_str(name)
    }
}

/// Derive the predicted and actual minimum for one observation.
///
/// Both formulas use the same K lookup, so a row without a correction
/// constant has neither value.
pub fn analyse_observation(observation: &Observation) -> AnalysedRow {
    let k = correction_constant(observation.wind_speed, observation.cloud_cover);
    let predicted = calculate_min_temp(
        observation.midday_temperature,
        observation.midday_dew_point,
        observation.wind_speed,
        observation.cloud_cover,
    );
    let actual = k.map(|k| {
        calculate_actual_min_temp(
            observation.midday_temperature,
            observation.midday_dew_point,
            k,
        )
    });

    AnalysedRow::new(*observation, k, predicted, actual)
}

/// Load, compute, aggregate and visualise a single input table.
///
/// Each step is only valid from the state the previous step leaves behind.
/// A failing step moves the pipeline to `Failed`, where it stays.
pub struct Pipeline {
    state: PipelineState,
    reader: ObservationReader,
    observations: Vec<Observation>,
    dataset: Option<Dataset>,
    row_errors: Vec<RowError>,
    metrics: Option<ErrorMetrics>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_reader(ObservationReader::new())
    }

    pub fn with_reader(reader: ObservationReader) -> Self {
        Self {
            state: PipelineState::NotStarted,
            reader,
            observations: Vec::new(),
            dataset: None,
            row_errors: Vec::new(),
            metrics: None,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn row_errors(&self) -> &[RowError] {
        &self.row_errors
    }

    pub fn metrics(&self) -> Option<&ErrorMetrics> {
        self.metrics.as_ref()
    }

    fn require(&mut self, expected: PipelineState, step: &'static str) -> Result<()> {
        if self.state == expected {
            return Ok(());
        }
        let from = self.state.to_string();
        self.state = PipelineState::Failed;
        Err(PredictorError::InvalidTransition { from, step })
    }

    fn settle<T>(&mut self, result: Result<T>, next: PipelineState) -> Result<T> {
        self.state = if result.is_ok() {
            next
        } else {
            PipelineState::Failed
        };
        result
    }

    /// Read the input table
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        self.require(PipelineState::NotStarted, "load")?;

        let result = self.reader.read_observations(path).map(|observations| {
            let rows = observations.len();
            self.observations = observations;
            rows
        });
        let rows = self.settle(result, PipelineState::Loaded)?;

        info!(rows, "Data loaded successfully.");
        Ok(rows)
    }

    /// Apply both temperature formulas to every row
    pub fn compute(&mut self) -> Result<&Dataset> {
        self.require(PipelineState::Loaded, "compute")?;

        let rows: Vec<AnalysedRow> = self.observations.iter().map(analyse_observation).collect();
        let dataset = Dataset::new(rows);

        let undefined = dataset.undefined_count();
        if undefined > 0 {
            warn!(
                "{} of {} rows have no correction constant and are left without a prediction",
                undefined,
                dataset.len()
            );
        }
        debug!(rows = dataset.len(), "Computed minimum temperatures");

        self.state = PipelineState::Computed;
        Ok(&*self.dataset.insert(dataset))
    }

    /// Per-row errors and the aggregate metrics
    pub fn aggregate(&mut self) -> Result<ErrorMetrics> {
        self.require(PipelineState::Computed, "aggregate")?;

        let result = match self.dataset.as_ref() {
            Some(dataset) => {
                let errors = calculate_errors(
                    dataset
                        .rows()
                        .iter()
                        .map(|row| (row.predicted_min, row.actual_min)),
                );
                ErrorMetrics::from_row_errors(&errors).map(|metrics| (errors, metrics))
            }
            None => Err(PredictorError::Computation(
                "No computed dataset to aggregate".to_string(),
            )),
        };
        let (errors, metrics) = self.settle(result, PipelineState::Aggregated)?;

        for line in metrics.summary().lines() {
            info!("{}", line);
        }

        self.row_errors = errors;
        self.metrics = Some(metrics);
        Ok(metrics)
    }

    /// Render the comparison and error metric charts
    pub fn visualize<R: ChartRenderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        self.require(PipelineState::Aggregated, "visualize")?;

        let result = match (self.dataset.as_ref(), self.metrics.as_ref()) {
            (Some(dataset), Some(metrics)) => renderer.render(dataset, metrics),
            _ => Err(PredictorError::Computation(
                "No aggregated results to visualise".to_string(),
            )),
        };
        self.settle(result, PipelineState::Visualized)
    }

    pub fn finish(&mut self) -> Result<ErrorMetrics> {
        self.require(PipelineState::Visualized, "finish")?;

        let result = self
            .metrics
            .ok_or_else(|| PredictorError::Computation("No metrics recorded".to_string()));
        self.settle(result, PipelineState::Done)
    }

    /// Drive every step in order, stopping at the first failure
    pub fn run<R: ChartRenderer + ?Sized>(
        &mut self,
        path: &Path,
        renderer: &mut R,
    ) -> Result<ErrorMetrics> {
        self.load(path)?;
        self.compute()?;
        self.aggregate()?;
        self.visualize(renderer)?;
        self.finish()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
