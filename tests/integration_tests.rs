use min_temp_predictor::analyzers::ErrorMetrics;
use min_temp_predictor::charts::{ChartRenderer, TerminalRenderer};
use min_temp_predictor::cli::{run_with_renderer, Cli};
use min_temp_predictor::models::Dataset;
use min_temp_predictor::processors::{Pipeline, PipelineState};
use min_temp_predictor::utils::constants::{
    ACTUAL_SERIES_LABEL, ERROR_METRIC_LABELS, PREDICTED_SERIES_LABEL,
};
use min_temp_predictor::{PredictorError, Result};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Default)]
struct CapturingRenderer {
    rendered: Vec<(usize, ErrorMetrics)>,
}

impl ChartRenderer for CapturingRenderer {
    fn render(&mut self, dataset: &Dataset, metrics: &ErrorMetrics) -> Result<()> {
        self.rendered.push((dataset.len(), *metrics));
        Ok(())
    }
}

fn write_observations(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(
        &path,
        format!(
            "Date,Midday_Temperature,Midday_Dew_Point,Wind_Speed,Cloud_Cover\n{}",
            body
        ),
    )
    .expect("Failed to write observations");
    path
}

fn run_once(path: &Path) -> ErrorMetrics {
    let mut pipeline = Pipeline::new();
    pipeline
        .run(path, &mut CapturingRenderer::default())
        .expect("Pipeline run failed")
}

#[test]
fn test_pipeline_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_observations(
        &temp_dir,
        "met_office_data.csv",
        "2023-03-01,20,10,10,2\n\
         2023-03-02,15,8,30,5\n\
         2023-03-03,9,7,60,8\n\
         2023-03-04,12,4,45,8\n",
    );

    let mut renderer = CapturingRenderer::default();
    let mut pipeline = Pipeline::new();
    let metrics = pipeline.run(&path, &mut renderer).unwrap();

    assert_eq!(pipeline.state(), PipelineState::Done);
    assert_eq!(metrics.included_rows, 3);
    assert_eq!(metrics.excluded_rows, 1);
    assert_eq!(renderer.rendered, vec![(4, metrics)]);

    // Row by row: |predicted - actual| with the shared K
    let expected_abs = [
        (8.36f64 - 17.2).abs(),
        (0.316f64 * 15.0 + 0.548 * 8.0 - 1.24 + 0.6 - (11.5 - 0.6)).abs(),
        (0.316f64 * 12.0 + 0.548 * 4.0 - 1.24 + 3.5 - (8.0 - 3.5)).abs(),
    ];
    let mae = expected_abs.iter().sum::<f64>() / 3.0;
    let mse = expected_abs.iter().map(|e| e * e).sum::<f64>() / 3.0;
    assert!((metrics.mae - mae).abs() < 1e-9);
    assert!((metrics.mse - mse).abs() < 1e-9);
    assert!((metrics.rmse - mse.sqrt()).abs() < 1e-9);
}

#[test]
fn test_pipeline_prints_both_charts() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_observations(
        &temp_dir,
        "met_office_data.csv",
        "2023-03-01,20,10,10,2\n\
         2023-03-02,15,8,30,5\n\
         2023-03-03,9,7,60,8\n",
    );

    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    let mut pipeline = Pipeline::new();
    pipeline.run(&path, &mut renderer).unwrap();
    assert_eq!(pipeline.state(), PipelineState::Done);

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(output.contains("Actual vs Predicted Minimum Temperature"));
    assert!(output.contains(ACTUAL_SERIES_LABEL), "{}", output);
    assert!(output.contains(PREDICTED_SERIES_LABEL), "{}", output);
    assert!(output.contains("Error Metrics: MAE, MSE, RMSE"));
    for label in ERROR_METRIC_LABELS {
        assert!(output.contains(label), "missing {} in\n{}", label, output);
    }
}

#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_observations(
        &temp_dir,
        "observations.csv",
        "2023-01-01,5.5,1.0,3,0\n\
         2023-01-02,7.0,4.5,18,4\n\
         2023-01-03,10.5,9.0,40,7\n",
    );

    let first = run_once(&path);
    let second = run_once(&path);

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_reported_not_raised() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut renderer = CapturingRenderer::default();

    let state = run_with_renderer(
        Cli {
            file: temp_dir.path().join("absent.csv"),
        },
        &mut renderer,
    );

    assert_eq!(state, PipelineState::Failed);
    assert!(renderer.rendered.is_empty());
}

#[test]
fn test_malformed_table_is_a_load_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("bad.csv");
    fs::write(&path, "Midday_Temperature,Wind_Speed,Cloud_Cover\n20,10,2\n").unwrap();

    let mut pipeline = Pipeline::new();
    let err = pipeline
        .run(&path, &mut CapturingRenderer::default())
        .unwrap_err();

    assert!(err.is_load_error());
    assert!(matches!(err, PredictorError::MissingColumn { ref column } if column == "Midday_Dew_Point"));
    assert_eq!(pipeline.state(), PipelineState::Failed);
}

#[test]
fn test_cli_run_completes() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_observations(&temp_dir, "obs.csv", "2023-05-01,18,11,22,3\n");
    let mut renderer = CapturingRenderer::default();

    let state = run_with_renderer(Cli { file: path }, &mut renderer);

    assert_eq!(state, PipelineState::Done);
    assert_eq!(renderer.rendered.len(), 1);
}
