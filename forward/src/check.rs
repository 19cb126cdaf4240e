//! Finite-difference checks of forward-mode gradients.

use dual_number::DualNumber;
use nalgebra::SVector;

use crate::{gradient, unit, DriverError, Pass, Result};

/// Outcome of comparing a forward-mode gradient with central differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCheck<const N: usize> {
    pub analytic: SVector<f64, N>,
    pub numeric: SVector<f64, N>,
    pub tolerance: f64,
}

impl<const N: usize> GradientCheck<N> {
    pub fn errors(&self) -> SVector<f64, N> {
        (self.analytic - self.numeric).abs()
    }

    pub fn max_error(&self) -> f64 {
        self.errors().max()
    }

    /// Every component agrees within `tolerance`, scaled by the magnitude
    /// of the analytic partial once it exceeds one.
    pub fn passed(&self) -> bool {
        self.errors()
            .iter()
            .zip(self.analytic.iter())
            .all(|(error, a)| *error <= self.tolerance * a.abs().max(1.0))
    }
}

/// `(f(x + h·e_i) - f(x - h·e_i)) / 2h`, evaluated on constant inputs.
///
/// `step` must be positive and finite.
pub fn central_difference<F, const N: usize>(
    f: F,
    point: &SVector<f64, N>,
    index: usize,
    step: f64,
) -> Result<f64>
where
    F: Fn(&SVector<DualNumber, N>) -> Pass,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(DriverError::InvalidStep { step });
    }
    let e = unit::<N>(index)? * step;
    let forward = f(&(point + e).map(DualNumber::constant))?.primal();
    let backward = f(&(point - e).map(DualNumber::constant))?.primal();
    Ok((forward - backward) / (2.0 * step))
}

pub fn verify_gradient<F, const N: usize>(
    f: F,
    point: &SVector<f64, N>,
    step: f64,
    tolerance: f64,
) -> Result<GradientCheck<N>>
where
    F: Fn(&SVector<DualNumber, N>) -> Pass,
{
    let analytic = gradient(&f, point)?.partials;
    let mut numeric = SVector::<f64, N>::zeros();
    for i in 0..N {
        numeric[i] = central_difference(&f, point, i, step)?;
    }

    let check = GradientCheck { analytic, numeric, tolerance };
    if !check.passed() {
        tracing::warn!(max_error = check.max_error(), tolerance, "gradient check failed");
    }
    Ok(check)
}
