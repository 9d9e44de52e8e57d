//! Density curve rendering.
//!
//! The curve is drawn as one line dataset per run of finite points, so the
//! regions where a density is undefined or infinite show up as gaps.

use distplot_core::DistributionPlot;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::{format_axis, format_value};
use crate::util::styles::{CURVE_COLOR, ERROR_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};

/// Headroom above the highest point of the curve
const Y_HEADROOM: f64 = 0.05;

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 6;

/// Y-axis bounds for a curve whose finite values span `[lo, hi]`.
///
/// The axis always includes zero. A flat curve gets a unit-height axis.
pub fn y_bounds(range: Option<(f64, f64)>) -> [f64; 2] {
    let Some((lo, hi)) = range else {
        return [0.0, 1.0];
    };
    let min = lo.min(0.0);
    let max = hi.max(0.0);
    if max <= min {
        return [min, min + 1.0];
    }
    let padded = max + (max - min) * Y_HEADROOM;
    [min, if padded.is_finite() { padded } else { max }]
}

/// Three evenly spaced tick labels across `bounds`
fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = bounds[0] + (bounds[1] - bounds[0]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .into_iter()
        .map(|v| Span::raw(format_axis(v)))
        .collect()
}

/// Current parameter values, e.g. `Mean (μ)=1.00  Std Dev (σ)=1.00`
fn parameter_summary(plot: &DistributionPlot) -> String {
    plot.controls()
        .iter()
        .map(|c| format!("{}={}", c.label(), format_value(c.value())))
        .collect::<Vec<_>>()
        .join("  ")
}

pub struct DensityChart;

impl DensityChart {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DensityChart {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DensityChart {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let msg = Paragraph::new("Area too small").style(Style::default().fg(HELP_COLOR));
            frame.render_widget(msg, area);
            return;
        }

        let plot = state.active_plot();
        let line = plot.line();

        let summary = Line::from(format!(" {} ", parameter_summary(plot)))
            .style(Style::default().fg(HELP_COLOR));
        let block = focused_block(&format!(" {} ", plot.title()), false).title_bottom(summary);

        let segments = line.finite_segments();
        let datasets: Vec<Dataset> = segments
            .iter()
            .map(|segment| {
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(CURVE_COLOR))
                    .data(segment)
            })
            .collect();

        let x_bounds = [plot.grid().start(), plot.grid().end()];
        let y_bounds = y_bounds(line.y_range());

        let x_axis = Axis::default()
            .title(Span::styled(plot.x_label(), Style::default().fg(HEADER_COLOR)))
            .style(Style::default().fg(HELP_COLOR))
            .bounds(x_bounds)
            .labels(axis_labels(x_bounds));

        let y_axis = Axis::default()
            .title(Span::styled(plot.y_label(), Style::default().fg(HEADER_COLOR)))
            .style(Style::default().fg(HELP_COLOR))
            .bounds(y_bounds)
            .labels(axis_labels(y_bounds));

        let inner = block.inner(area);
        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);
        frame.render_widget(chart, area);

        if !line.has_finite_points() && inner.height > 0 {
            let notice = Paragraph::new(Line::from(Span::styled(
                "Density is undefined for these parameters",
                Style::default()
                    .fg(ERROR_COLOR)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            let row = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            frame.render_widget(notice, row);
        }
    }
}
