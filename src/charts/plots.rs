use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::ops::Range;

use crate::analyzers::ErrorMetrics;
use crate::charts::text_canvas::TextCanvas;
use crate::error::{PredictorError, Result};
use crate::models::Dataset;
use crate::utils::constants::{
    ACTUAL_SERIES_LABEL, BAR_CHART_HEIGHT, BAR_CHART_WIDTH, CHART_HEIGHT, CHART_WIDTH,
    ERROR_METRIC_LABELS, PREDICTED_SERIES_LABEL,
};

type PlotResult = std::result::Result<(), Box<dyn Error>>;

const ACTUAL_MARKER: &str = "o";
const PREDICTED_MARKER: &str = "x";
const MAX_INDEX_LABELS: usize = 10;

// MAE, MSE, RMSE
const BAR_COLOURS: [RGBColor; 3] = [BLUE, RGBColor(255, 165, 0), GREEN];

fn cell_font() -> TextStyle<'static> {
    TextStyle::from(("sans-serif", 1).into_font())
}

fn marker<C>(symbol: &'static str, coord: C) -> Text<'static, C, &'static str> {
    Text::new(
        symbol,
        coord,
        cell_font().pos(Pos::new(HPos::Center, VPos::Center)),
    )
}

/// Split a column into runs of consecutive defined values so missing rows
/// leave a gap in the line instead of being bridged.
fn defined_runs(column: &[Option<f64>]) -> Vec<Vec<(i32, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (idx, value) in column.iter().enumerate() {
        match value {
            Some(v) => current.push((idx as i32, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(*v), hi.max(*v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(1.0);
    (lo - pad, hi + pad)
}

/// Legend box laid out in whole cells at the top right of the plotting area.
/// The built-in series legend measures text with font metrics instead.
fn draw_legend(
    root: &DrawingArea<TextCanvas<'_>, Shift>,
    plot_pixels: (Range<i32>, Range<i32>),
    entries: &[(&str, &str)],
) -> PlotResult {
    let lines: Vec<String> = entries
        .iter()
        .map(|(symbol, label)| format!("{} {}", symbol, label))
        .collect();
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;

    let (x_range, y_range) = plot_pixels;
    let right = x_range.end - 2;
    let left = right - text_width - 3;
    let top = y_range.start + 1;
    let bottom = top + lines.len() as i32 + 1;

    root.draw(&Rectangle::new([(left, top), (right, bottom)], WHITE.filled()))?;
    root.draw(&Rectangle::new([(left, top), (right, bottom)], &BLACK))?;
    for (row, line) in lines.into_iter().enumerate() {
        root.draw(&Text::new(line, (left + 2, top + 1 + row as i32), cell_font()))?;
    }
    Ok(())
}

fn bar_colour(key: &SegmentValue<u32>) -> RGBColor {
    let idx = match key {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
        SegmentValue::Last => 0,
    };
    BAR_COLOURS.get(idx).copied().unwrap_or(BLUE)
}

/// Line chart of actual and predicted minimum temperature by row position
pub fn render_comparison_chart(dataset: &Dataset) -> Result<String> {
    let mut frame = String::new();
    draw_comparison(dataset, &mut frame).map_err(|e| PredictorError::Chart(e.to_string()))?;
    Ok(frame)
}

fn draw_comparison(dataset: &Dataset, frame: &mut String) -> PlotResult {
    let actual = dataset.actual_column();
    let predicted = dataset.predicted_column();
    let actual_runs = defined_runs(&actual);
    let predicted_runs = defined_runs(&predicted);

    let (y_min, y_max) = value_range(actual.iter().chain(predicted.iter()).flatten());
    let x_max = dataset.len().max(2) as i32 - 1;

    let root = TextCanvas::new(frame, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Actual vs Predicted Minimum Temperature", cell_font())
        .margin(1)
        .x_label_area_size(4)
        .y_label_area_size(9)
        .build_cartesian_2d(0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(dataset.len().clamp(2, MAX_INDEX_LABELS))
        .y_labels(6)
        .set_all_tick_mark_size(1)
        .label_style(cell_font())
        .axis_desc_style(cell_font())
        .x_desc("Data Point Index")
        .y_desc("Temperature (°C)")
        .x_label_formatter(&|x| x.to_string())
        .y_label_formatter(&|y| format!("{:.1}", y))
        .draw()?;

    for run in actual_runs.iter().chain(predicted_runs.iter()) {
        chart.draw_series(LineSeries::new(run.iter().copied(), &BLACK))?;
    }

    chart.draw_series(
        actual_runs
            .iter()
            .flatten()
            .map(|&point| marker(ACTUAL_MARKER, point)),
    )?;
    chart.draw_series(
        predicted_runs
            .iter()
            .flatten()
            .map(|&point| marker(PREDICTED_MARKER, point)),
    )?;

    draw_legend(
        &root,
        chart.plotting_area().get_pixel_range(),
        &[
            (ACTUAL_MARKER, ACTUAL_SERIES_LABEL),
            (PREDICTED_MARKER, PREDICTED_SERIES_LABEL),
        ],
    )?;

    root.present()?;
    Ok(())
}

/// Bar chart of the three aggregate error metrics
pub fn render_error_metrics_chart(metrics: &ErrorMetrics) -> Result<String> {
    let mut frame = String::new();
    draw_error_metrics(metrics, &mut frame).map_err(|e| PredictorError::Chart(e.to_string()))?;
    Ok(frame)
}

fn draw_error_metrics(metrics: &ErrorMetrics, frame: &mut String) -> PlotResult {
    let values = metrics.values();
    let top = values.iter().cloned().fold(0.0f64, f64::max);
    let y_max = if top > 0.0 { top * 1.25 } else { 1.0 };

    let root = TextCanvas::new(frame, (BAR_CHART_WIDTH, BAR_CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Error Metrics: MAE, MSE, RMSE", cell_font())
        .margin(1)
        .x_label_area_size(4)
        .y_label_area_size(9)
        .build_cartesian_2d(
            (0u32..values.len() as u32).into_segmented(),
            0f64..y_max,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(5)
        .set_all_tick_mark_size(1)
        .label_style(cell_font())
        .axis_desc_style(cell_font())
        .x_desc("Error Metric")
        .y_desc("Error Value")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(idx) => ERROR_METRIC_LABELS
                .get(*idx as usize)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style_func(|key, _| bar_colour(key).filled())
            .margin(2)
            .data(values.iter().enumerate().map(|(idx, v)| (idx as u32, *v))),
    )?;

    chart.draw_series(values.iter().enumerate().map(|(idx, v)| {
        Text::new(
            format!("{:.2}", v),
            (SegmentValue::CenterOf(idx as u32), *v),
            cell_font().pos(Pos::new(HPos::Center, VPos::Bottom)),
        )
    }))?;

    root.present()?;
    Ok(())
}
