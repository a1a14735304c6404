pub mod plots;
pub mod text_canvas;

pub use plots::{render_comparison_chart, render_error_metrics_chart};
pub use text_canvas::TextCanvas;

use crate::analyzers::ErrorMetrics;
use crate::error::Result;
use crate::models::Dataset;
use std::io::{self, Stdout, Write};

/// Presents the diagnostic charts for a finished run
pub trait ChartRenderer {
    fn render(&mut self, dataset: &Dataset, metrics: &ErrorMetrics) -> Result<()>;
}

/// Prints both charts to a terminal, stdout unless told otherwise
pub struct TerminalRenderer<W = Stdout> {
    out: W,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for TerminalRenderer<W> {
    fn render(&mut self, dataset: &Dataset, metrics: &ErrorMetrics) -> Result<()> {
        // Render both before printing so a failure never leaves half the output
        let comparison = render_comparison_chart(dataset)?;
        let error_bars = render_error_metrics_chart(metrics)?;

        writeln!(self.out, "{}", comparison)?;
        writeln!(self.out, "{}", error_bars)?;
        self.out.flush()?;
        Ok(())
    }
}
