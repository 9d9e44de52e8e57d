use std::fmt;

/// Errors raised while constructing an evaluation grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    TooFewPoints(usize),
    NonFiniteBound { start: f64, end: f64 },
    EmptyRange { start: f64, end: f64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TooFewPoints(n) => {
                write!(f, "grid needs at least 2 points, got {n}")
            }
            GridError::NonFiniteBound { start, end } => {
                write!(f, "grid bounds must be finite (start={start}, end={end})")
            }
            GridError::EmptyRange { start, end } => {
                write!(f, "grid start must be below end (start={start}, end={end})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors raised while turning a session configuration into plots
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Grid(GridError),
    UnknownDistribution(String),
    UnknownParameter {
        distribution: &'static str,
        name: String,
    },
    OutOfRange {
        distribution: &'static str,
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Grid(e) => write!(f, "invalid grid: {e}"),
            ConfigError::UnknownDistribution(name) => {
                write!(
                    f,
                    "unknown distribution '{name}' (expected normal, exponential, gamma or pareto)"
                )
            }
            ConfigError::UnknownParameter { distribution, name } => {
                write!(f, "{distribution} has no parameter named '{name}'")
            }
            ConfigError::OutOfRange {
                distribution,
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "initial {distribution} {name}={value} is outside its slider range [{min}, {max}]"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        ConfigError::Grid(e)
    }
}
