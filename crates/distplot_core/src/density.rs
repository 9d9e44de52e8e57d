//! Probability density functions.
//!
//! Normal, exponential and gamma densities delegate to `statrs`. The
//! generalized Pareto density is evaluated from its closed form.
//!
//! None of these functions reject parameters. A combination outside the
//! distribution's valid domain produces `NaN` (or an infinity) so callers
//! can keep drawing while a slider passes through it.

use statrs::distribution::{Continuous, Exp, Gamma, Normal};

/// Normal density with the given mean and standard deviation.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev)
        .map(|d| d.pdf(x))
        .unwrap_or(f64::NAN)
}

/// Exponential density with rate `λ`. Zero for `x < 0`.
///
/// `rate` is a rate, not a location shift: the density is `λ e^{-λx}`.
pub fn exponential_pdf(x: f64, rate: f64) -> f64 {
    Exp::new(rate).map(|d| d.pdf(x)).unwrap_or(f64::NAN)
}

/// Gamma density in shape/scale form (`k`, `θ`). Zero for `x < 0`.
pub fn gamma_pdf(x: f64, shape: f64, scale: f64) -> f64 {
    // statrs is parametrized by rate; a zero scale would become an infinite rate
    if scale.is_nan() || scale <= 0.0 {
        return f64::NAN;
    }
    Gamma::new(shape, 1.0 / scale)
        .map(|d| d.pdf(x))
        .unwrap_or(f64::NAN)
}

/// Generalized Pareto density with shape `ξ`, location `μ` and scale `σ`.
///
/// For `ξ ≠ 0`:
///
/// ```text
/// f(x) = (1/σ) * (1 + ξ(x-μ)/σ) ^ (-(1/ξ + 1))
/// ```
///
/// For `ξ` exactly zero the limiting exponential form `(1/σ) * exp(-(x-μ)/σ)`
/// is used instead. The comparison is exact: any nonzero shape,
/// however small, takes the general branch.
///
/// No support mask is applied and `σ ≤ 0` is not rejected; the arithmetic
/// simply yields `NaN` or an infinity there.
pub fn genpareto_pdf(x: f64, shape: f64, location: f64, scale: f64) -> f64 {
    let z = (x - location) / scale;
    if shape != 0.0 {
        (1.0 / scale) * (1.0 + shape * z).powf(-(1.0 / shape + 1.0))
    } else {
        (1.0 / scale) * (-z).exp()
    }
}
