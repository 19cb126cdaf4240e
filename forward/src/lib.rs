//! Evaluation driver for forward-mode differentiation.
//!
//! Every helper here runs one or more independent passes of a user
//! expression over [`DualNumber`] inputs. A pass seeds each input with a
//! tangent (its component of the chosen direction), evaluates the
//! expression once and reads the primal and tangent off the result.
//! A gradient over `N` inputs therefore costs `N` passes.

use dual_number::DualNumber;
use nalgebra::SVector;
use named_vars::NamedVars;

pub mod check;
mod error;

pub use error::{DriverError, Result};

/// Return type of the expressions the driver evaluates.
pub type Pass = dual_number::Result<DualNumber>;

/// Value of a function together with all of its partial derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient<const N: usize> {
    pub value: f64,
    pub partials: SVector<f64, N>,
}

/// Dual inputs `x_i = (point_i, direction_i)`.
pub fn seed<const N: usize>(
    point: &SVector<f64, N>,
    direction: &SVector<f64, N>,
) -> SVector<DualNumber, N> {
    point.zip_map(direction, DualNumber::new)
}

/// The `index`-th standard basis vector.
pub fn unit<const N: usize>(index: usize) -> Result<SVector<f64, N>> {
    if index >= N {
        return Err(DriverError::IndexOutOfRange { index, len: N });
    }
    let mut e = SVector::<f64, N>::zeros();
    e[index] = 1.0;
    Ok(e)
}

pub fn derivative<F>(f: F, x: f64) -> Result<DualNumber>
where
    F: FnOnce(DualNumber) -> Pass,
{
    Ok(f(DualNumber::variable(x))?)
}

/// Single pass along `direction`. The tangent of the result is the
/// directional derivative `∇f(point) · direction`.
pub fn directional<F, const N: usize>(
    f: F,
    point: &SVector<f64, N>,
    direction: &SVector<f64, N>,
) -> Result<DualNumber>
where
    F: Fn(&SVector<DualNumber, N>) -> Pass,
{
    Ok(f(&seed(point, direction))?)
}

pub fn partial<F, const N: usize>(
    f: F,
    point: &SVector<f64, N>,
    index: usize,
) -> Result<DualNumber>
where
    F: Fn(&SVector<DualNumber, N>) -> Pass,
{
    directional(f, point, &unit(index)?)
}

/// Full gradient of `f` at `point`, one pass per input.
pub fn gradient<F, const N: usize>(f: F, point: &SVector<f64, N>) -> Result<Gradient<N>>
where
    F: Fn(&SVector<DualNumber, N>) -> Pass,
{
    let mut partials = SVector::<f64, N>::zeros();
    let mut value = None;

    for i in 0..N {
        let out = partial(&f, point, i)?;
        tracing::debug!(pass = i, primal = out.primal(), tangent = out.tangent(), "forward pass");

        // The primal never depends on the seed.
        debug_assert!(value.is_none_or(|v: f64| v.to_bits() == out.primal().to_bits()));
        value = Some(out.primal());
        partials[i] = out.tangent();
    }

    let value = match value {
        Some(value) => value,
        None => f(&point.map(DualNumber::constant))?.primal(),
    };

    Ok(Gradient { value, partials })
}

/// [`gradient`] over a struct of named inputs. The partials come back in
/// the same struct, `∂f/∂field` stored under `field`.
pub fn gradient_named<F, V, VD, const N: usize>(f: F, point: &V) -> Result<(f64, V)>
where
    V: NamedVars<f64, N>,
    VD: NamedVars<DualNumber, N>,
    F: Fn(&VD) -> Pass,
{
    let grad = gradient(|x: &SVector<DualNumber, N>| f(&VD::from_svector(x)), &point.to_svector())?;
    Ok((grad.value, V::from_svector(&grad.partials)))
}
