use crate::error::GridError;

/// Evenly spaced evaluation points shared by every plot in a session.
///
/// Follows `linspace` semantics: the first point is `start`, the last point
/// is exactly `end`, and `points` values are produced in total.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    xs: Vec<f64>,
}

impl Grid {
    pub const DEFAULT_START: f64 = -10.0;
    pub const DEFAULT_END: f64 = 10.0;
    pub const DEFAULT_POINTS: usize = 1000;

    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self, GridError> {
        if points < 2 {
            return Err(GridError::TooFewPoints(points));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFiniteBound { start, end });
        }
        if start >= end {
            return Err(GridError::EmptyRange { start, end });
        }

        Ok(Self {
            xs: spaced(start, end, points),
        })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.xs[0]
    }

    pub fn end(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            xs: spaced(Self::DEFAULT_START, Self::DEFAULT_END, Self::DEFAULT_POINTS),
        }
    }
}

/// Caller guarantees `points >= 2`.
fn spaced(start: f64, end: f64, points: usize) -> Vec<f64> {
    let step = (end - start) / (points - 1) as f64;
    let mut xs: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
    // Pin the closing bound against accumulated rounding
    xs[points - 1] = end;
    xs
}
