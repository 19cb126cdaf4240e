use thiserror::Error;

pub type Result<T> = std::result::Result<T, DualError>;

/// Failures raised while propagating a dual number through an expression.
///
/// Operands of the wrong kind never reach runtime: only types converting
/// into [`crate::Operand`] are accepted by the operator layer, so there is
/// no variant for them here.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DualError {
    #[error("'{op}' is undefined at primal value {primal}")]
    Domain { op: &'static str, primal: f64 },
}

pub(crate) fn domain(op: &'static str, primal: f64) -> DualError {
    tracing::trace!(op, primal, "domain error");
    DualError::Domain { op, primal }
}
