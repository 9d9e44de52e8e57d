//! Interactive probability density plots
//!
//! This crate holds everything about a density plot that does not depend on
//! a rendering surface:
//! - Density functions for the normal, exponential, gamma and generalized
//!   Pareto distributions
//! - The shared evaluation grid
//! - Range-bounded parameter controls (the model behind sliders)
//! - `DistributionPlot`, which binds a density and its controls to a line
//!   that is recomputed in place whenever a control moves
//!
//! ```ignore
//! use std::sync::Arc;
//! use distplot_core::{DistributionKind, DistributionPlot, Grid};
//!
//! let grid = Arc::new(Grid::default());
//! let mut plot = DistributionPlot::initialize(&DistributionKind::Pareto.spec(), grid);
//! plot.set_control(0, 0.0); // ξ = 0 takes the exponential branch
//! assert_eq!(plot.line().len(), 1000);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod controls;
pub mod density;
pub mod distribution;
pub mod grid;
pub mod plot;

// ============================================================================
// Configuration and errors
// ============================================================================

pub mod config;
pub mod error;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{GridConfig, InitialValues, PlotConfig};
pub use controls::{ParamSpec, ParameterControl, ParameterSet};
pub use density::{exponential_pdf, gamma_pdf, genpareto_pdf, normal_pdf};
pub use distribution::{DensityFn, DistributionKind, DistributionSpec};
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use plot::{DistributionPlot, Line, LineId, evaluate};
