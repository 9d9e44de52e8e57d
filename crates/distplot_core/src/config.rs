//! Session configuration
//!
//! `PlotConfig` describes the shared grid, which distribution is shown first,
//! and optional initial slider values. Every field has a default, so an empty
//! document is a valid configuration:
//!
//! ```yaml
//! grid: { start: -10.0, end: 10.0, points: 1000 }
//! start_distribution: pareto
//! initial:
//!   normal: { mean: 0.0, std_dev: 2.0 }
//!   pareto: { shape: 0.0 }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::distribution::DistributionKind;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::plot::DistributionPlot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: Grid::DEFAULT_START,
            end: Grid::DEFAULT_END,
            points: Grid::DEFAULT_POINTS,
        }
    }
}

/// Initial slider values keyed by parameter name, per distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialValues {
    pub normal: BTreeMap<String, f64>,
    pub exponential: BTreeMap<String, f64>,
    pub gamma: BTreeMap<String, f64>,
    pub pareto: BTreeMap<String, f64>,
}

impl InitialValues {
    pub fn for_kind(&self, kind: DistributionKind) -> &BTreeMap<String, f64> {
        match kind {
            DistributionKind::Normal => &self.normal,
            DistributionKind::Exponential => &self.exponential,
            DistributionKind::Gamma => &self.gamma,
            DistributionKind::Pareto => &self.pareto,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub grid: GridConfig,
    pub start_distribution: DistributionKind,
    pub initial: InitialValues,
}

impl PlotConfig {
    pub fn build_grid(&self) -> Result<Arc<Grid>, ConfigError> {
        let grid = Grid::linspace(self.grid.start, self.grid.end, self.grid.points)?;
        Ok(Arc::new(grid))
    }

    /// Validate the configuration and build one plot per distribution,
    /// in [`DistributionKind::ALL`] order, all sharing one grid.
    pub fn build_plots(&self) -> Result<Vec<DistributionPlot>, ConfigError> {
        let grid = self.build_grid()?;
        DistributionKind::ALL
            .iter()
            .map(|kind| {
                DistributionPlot::with_initial_values(
                    &kind.spec(),
                    Arc::clone(&grid),
                    self.initial.for_kind(*kind),
                )
            })
            .collect()
    }
}
