//! Catalog of the plottable distributions.
//!
//! Each entry pairs a title with its parameter specs and a density function.
//! The plot itself is generic over these; nothing outside this module matches
//! on the kind of distribution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controls::ParamSpec;
use crate::density::{exponential_pdf, gamma_pdf, genpareto_pdf, normal_pdf};
use crate::error::ConfigError;

/// Density evaluated at `x` with parameter values in spec order.
pub type DensityFn = fn(f64, &[f64]) -> f64;

/// Everything a plot needs to know about one distribution.
#[derive(Debug, Clone, Copy)]
pub struct DistributionSpec {
    pub title: &'static str,
    pub params: &'static [ParamSpec],
    pub density: DensityFn,
}

const NORMAL_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new("mean", "Mean (μ)", -5.0, 5.0, 1.0),
    ParamSpec::new("std_dev", "Std Dev (σ)", 0.1, 5.0, 1.0),
];

// Rate and gamma ranges include non-positive values; the densities return
// NaN there.
const EXPONENTIAL_PARAMS: [ParamSpec; 1] = [ParamSpec::new("rate", "Lambda (λ)", -5.0, 5.0, 1.0)];

const GAMMA_PARAMS: [ParamSpec; 2] = [
    ParamSpec::new("shape", "K", -5.0, 5.0, 2.0),
    ParamSpec::new("scale", "theta", -5.0, 5.0, 1.0),
];

const PARETO_PARAMS: [ParamSpec; 3] = [
    ParamSpec::new("shape", "ξ", -5.0, 5.0, 0.8),
    ParamSpec::new("location", "μ", -5.0, 5.0, 1.0),
    ParamSpec::new("scale", "σ", 0.0, 5.0, 1.0),
];

/// Missing trailing parameters read as NaN rather than panicking.
fn arg(values: &[f64], i: usize) -> f64 {
    values.get(i).copied().unwrap_or(f64::NAN)
}

fn normal_density(x: f64, p: &[f64]) -> f64 {
    normal_pdf(x, arg(p, 0), arg(p, 1))
}

fn exponential_density(x: f64, p: &[f64]) -> f64 {
    exponential_pdf(x, arg(p, 0))
}

fn gamma_density(x: f64, p: &[f64]) -> f64 {
    gamma_pdf(x, arg(p, 0), arg(p, 1))
}

fn pareto_density(x: f64, p: &[f64]) -> f64 {
    genpareto_pdf(x, arg(p, 0), arg(p, 1), arg(p, 2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    #[default]
    Normal,
    Exponential,
    Gamma,
    #[serde(alias = "generalized_pareto")]
    Pareto,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Normal,
        DistributionKind::Exponential,
        DistributionKind::Gamma,
        DistributionKind::Pareto,
    ];

    /// Identifier used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "normal",
            DistributionKind::Exponential => "exponential",
            DistributionKind::Gamma => "gamma",
            DistributionKind::Pareto => "pareto",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DistributionKind::Normal => 0,
            DistributionKind::Exponential => 1,
            DistributionKind::Gamma => 2,
            DistributionKind::Pareto => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn spec(&self) -> DistributionSpec {
        match self {
            DistributionKind::Normal => DistributionSpec {
                title: "Normal Distribution",
                params: &NORMAL_PARAMS,
                density: normal_density,
            },
            DistributionKind::Exponential => DistributionSpec {
                title: "Exponential Distribution",
                params: &EXPONENTIAL_PARAMS,
                density: exponential_density,
            },
            DistributionKind::Gamma => DistributionSpec {
                title: "Gamma Distribution",
                params: &GAMMA_PARAMS,
                density: gamma_density,
            },
            DistributionKind::Pareto => DistributionSpec {
                title: "Generalized Pareto Distribution",
                params: &PARETO_PARAMS,
                density: pareto_density,
            },
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(DistributionKind::Normal),
            "exponential" => Ok(DistributionKind::Exponential),
            "gamma" => Ok(DistributionKind::Gamma),
            "pareto" | "generalized_pareto" | "gpd" => Ok(DistributionKind::Pareto),
            _ => Err(ConfigError::UnknownDistribution(s.to_string())),
        }
    }
}
