use crate::charts::{ChartRenderer, TerminalRenderer};
use crate::cli::args::Cli;
use crate::error::PredictorError;
use crate::processors::{Pipeline, PipelineState};
use tracing::{error, info};

/// Run the analysis and print charts to the terminal.
///
/// Failures are logged here and never returned; the final pipeline state
/// tells the caller how far the run got.
pub fn run(cli: Cli) -> PipelineState {
    run_with_renderer(cli, &mut TerminalRenderer::new())
}

pub fn run_with_renderer<R: ChartRenderer + ?Sized>(cli: Cli, renderer: &mut R) -> PipelineState {
    info!(path = %cli.file.display(), "Starting overnight minimum analysis");

    let mut pipeline = Pipeline::new();
    match pipeline.run(&cli.file, renderer) {
        Ok(metrics) => info!(
            compared = metrics.included_rows,
            excluded = metrics.excluded_rows,
            "Analysis complete"
        ),
        Err(e) => report_failure(&e),
    }

    pipeline.state()
}

fn report_failure(err: &PredictorError) {
    match err {
        PredictorError::FileNotFound { .. } => error!("{}", err),
        e if e.is_load_error() => error!("Error loading data: {}", e),
        e => error!("Error in main pipeline: {}", e),
    }
}
