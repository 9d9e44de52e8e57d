//! A density curve bound to a set of parameter controls.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::controls::{ParameterControl, ParameterSet};
use crate::distribution::{DensityFn, DistributionSpec};
use crate::error::ConfigError;
use crate::grid::Grid;

static NEXT_LINE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a drawable line. Fixed for the lifetime of its plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl LineId {
    fn next() -> Self {
        LineId(NEXT_LINE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Evaluate `density` at every grid point.
pub fn evaluate(grid: &Grid, density: DensityFn, values: &[f64]) -> Vec<f64> {
    grid.xs().iter().map(|&x| density(x, values)).collect()
}

fn evaluate_into(grid: &Grid, density: DensityFn, values: &[f64], out: &mut [f64]) {
    for (y, &x) in out.iter_mut().zip(grid.xs()) {
        *y = density(x, values);
    }
}

/// The drawable line: x-values from the shared grid, y-values owned here.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    grid: Arc<Grid>,
    ys: Vec<f64>,
}

impl Line {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn xs(&self) -> &[f64] {
        self.grid.xs()
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.xs().iter().copied().zip(self.ys.iter().copied())
    }

    /// Maximal runs of consecutive finite points.
    ///
    /// Renderers draw each run separately so NaN and infinite values show up
    /// as gaps instead of being connected across.
    pub fn finite_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.points() {
            if y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Smallest and largest finite y-value, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.ys
            .iter()
            .copied()
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    pub fn has_finite_points(&self) -> bool {
        self.ys.iter().any(|y| y.is_finite())
    }
}

/// A titled density plot with one control per parameter.
///
/// Every distribution uses this same structure; what differs is the
/// [`DistributionSpec`] it was built from.
#[derive(Debug, Clone)]
pub struct DistributionPlot {
    title: &'static str,
    density: DensityFn,
    controls: Vec<ParameterControl>,
    line: Line,
}

impl DistributionPlot {
    pub const X_LABEL: &'static str = "x";
    pub const Y_LABEL: &'static str = "Density";

    /// Build controls at their defaults and evaluate the initial curve.
    pub fn initialize(spec: &DistributionSpec, grid: Arc<Grid>) -> Self {
        let controls = spec.params.iter().copied().map(ParameterControl::new).collect();
        Self::from_controls(spec, grid, controls)
    }

    /// Like [`DistributionPlot::initialize`], with some initial values replaced.
    ///
    /// Every key of `initial` must name a parameter, and every value must lie
    /// inside that parameter's slider range.
    pub fn with_initial_values(
        spec: &DistributionSpec,
        grid: Arc<Grid>,
        initial: &BTreeMap<String, f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = initial
            .keys()
            .find(|name| !spec.params.iter().any(|p| p.name == name.as_str()))
        {
            return Err(ConfigError::UnknownParameter {
                distribution: spec.title,
                name: name.clone(),
            });
        }

        let mut controls = Vec::with_capacity(spec.params.len());
        for p in spec.params {
            let value = initial.get(p.name).copied().unwrap_or(p.default);
            if !p.contains(value) {
                return Err(ConfigError::OutOfRange {
                    distribution: spec.title,
                    name: p.name,
                    value,
                    min: p.min,
                    max: p.max,
                });
            }
            controls.push(ParameterControl::with_initial(*p, value));
        }

        Ok(Self::from_controls(spec, grid, controls))
    }

    fn from_controls(
        spec: &DistributionSpec,
        grid: Arc<Grid>,
        controls: Vec<ParameterControl>,
    ) -> Self {
        let params = ParameterSet::from_controls(&controls);
        let ys = evaluate(&grid, spec.density, params.values());
        Self {
            title: spec.title,
            density: spec.density,
            controls,
            line: Line {
                id: LineId::next(),
                grid,
                ys,
            },
        }
    }

    /// Recompute the curve for `params` and overwrite the line's y-values in place.
    ///
    /// The result depends only on `params`; the grid, the line identity and
    /// the controls are left untouched.
    pub fn update(&mut self, params: &ParameterSet) {
        let Line { grid, ys, .. } = &mut self.line;
        evaluate_into(grid, self.density, params.values(), ys);
    }

    /// Move one control and redraw from the current value of every control.
    ///
    /// Returns `true` if the control moved. Out-of-range values are clamped;
    /// an unknown index is ignored.
    pub fn set_control(&mut self, index: usize, value: f64) -> bool {
        let Some(control) = self.controls.get_mut(index) else {
            return false;
        };
        let changed = control.set(value);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Step one control by `steps` keyboard steps and redraw.
    pub fn nudge_control(&mut self, index: usize, steps: i32) -> bool {
        let Some(control) = self.controls.get_mut(index) else {
            return false;
        };
        let changed = control.nudge(steps);
        if changed {
            self.refresh();
        }
        changed
    }

    /// Return every control to its initial value and redraw.
    pub fn reset_controls(&mut self) -> bool {
        let mut changed = false;
        for control in &mut self.controls {
            changed |= control.reset();
        }
        if changed {
            self.refresh();
        }
        changed
    }

    fn refresh(&mut self) {
        let params = self.parameters();
        self.update(&params);
    }

    /// Current value of every control.
    pub fn parameters(&self) -> ParameterSet {
        ParameterSet::from_controls(&self.controls)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn x_label(&self) -> &'static str {
        Self::X_LABEL
    }

    pub fn y_label(&self) -> &'static str {
        Self::Y_LABEL
    }

    pub fn controls(&self) -> &[ParameterControl] {
        &self.controls
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.line.grid
    }
}
