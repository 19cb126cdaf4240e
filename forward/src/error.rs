use dual_number::DualError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriverError>;

/// Failures of an evaluation pass or of the seeding around it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DriverError {
    #[error(transparent)]
    Dual(#[from] DualError),

    #[error("variable index {index} out of range for {len} variables")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("finite-difference step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },
}
