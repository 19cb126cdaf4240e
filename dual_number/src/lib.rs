//! Dual numbers for forward-mode automatic differentiation.
//!
//! A [`DualNumber`] carries a primal value together with its tangent, the
//! derivative of that value along one chosen input direction. Arithmetic
//! and the elementary functions propagate both parts through the chain
//! rule, so evaluating an expression on seeded inputs yields `f(x)` and
//! `f'(x)` in the same pass.
//!
//! Operations that leave their mathematical domain (`ln` at a non-positive
//! primal, division by a zero primal, ...) return a [`DualError`] instead of
//! a NaN or infinite tangent. This is why `/` produces a `Result`:
//!
//! ```
//! use dual_number::DualNumber;
//!
//! # fn main() -> dual_number::Result<()> {
//! // f(x1, x2) = ln(x1) + x1*x2 - sin(x2), differentiated w.r.t. x1
//! let x1 = DualNumber::new(2.0, 1.0);
//! let x2 = DualNumber::new(5.0, 0.0);
//!
//! let f = x1.ln()? + x1 * x2 - x2.sin();
//!
//! assert!((f.primal() - 11.6521).abs() < 1e-4);
//! assert!((f.tangent() - 5.5).abs() < 1e-12);
//!
//! let q = (x1 / x2)?;
//! assert_eq!(q.primal(), 0.4);
//! assert!((x1 / 0.0).is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

mod error;
pub mod ops;

pub use error::{DualError, Result};
pub use ops::Operand;

use error::domain;

/// A real number paired with its derivative along one direction.
///
/// Values are immutable: every operation builds a new `DualNumber` and no
/// history is kept between them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualNumber {
    primal: f64,
    tangent: f64,
}

impl DualNumber {
    pub fn new(primal: f64, tangent: f64) -> Self {
        Self { primal, tangent }
    }

    /// Seed for the variable being differentiated (tangent 1).
    pub fn variable(primal: f64) -> Self {
        Self::new(primal, 1.0)
    }

    /// A value that does not depend on the seeded direction (tangent 0).
    pub fn constant(primal: f64) -> Self {
        Self::new(primal, 0.0)
    }

    pub fn primal(&self) -> f64 {
        self.primal
    }

    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.primal, self.tangent)
    }
}

impl From<f64> for DualNumber {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value:{:.4}, grad:{}", self.primal, self.tangent)
    }
}

impl Add for DualNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        DualNumber {
            primal: self.primal + rhs.primal,
            tangent: self.tangent + rhs.tangent,
        }
    }
}

impl Add<f64> for DualNumber {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        DualNumber {
            primal: self.primal + rhs,
            tangent: self.tangent,
        }
    }
}

impl Add<DualNumber> for f64 {
    type Output = DualNumber;

    fn add(self, rhs: DualNumber) -> DualNumber {
        rhs + self
    }
}

impl Sub for DualNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        DualNumber {
            primal: self.primal - rhs.primal,
            tangent: self.tangent - rhs.tangent,
        }
    }
}

impl Sub<f64> for DualNumber {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        DualNumber {
            primal: self.primal - rhs,
            tangent: self.tangent,
        }
    }
}

impl Sub<DualNumber> for f64 {
    type Output = DualNumber;

    fn sub(self, rhs: DualNumber) -> DualNumber {
        DualNumber {
            primal: self - rhs.primal,
            tangent: -rhs.tangent,
        }
    }
}

/// Product rule: `(a·b)' = a·b' + a'·b`.
impl Mul for DualNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        DualNumber {
            primal: self.primal * rhs.primal,
            tangent: self.primal * rhs.tangent + self.tangent * rhs.primal,
        }
    }
}

impl Mul<f64> for DualNumber {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        DualNumber {
            primal: self.primal * rhs,
            tangent: self.tangent * rhs,
        }
    }
}

impl Mul<DualNumber> for f64 {
    type Output = DualNumber;

    fn mul(self, rhs: DualNumber) -> DualNumber {
        rhs * self
    }
}

/// Quotient rule: `(a/b)' = (a'·b - a·b') / b²`.
///
/// A divisor whose primal is zero or NaN is a domain error.
impl Div for DualNumber {
    type Output = Result<Self>;

    fn div(self, rhs: Self) -> Result<Self> {
        if rhs.primal.is_nan() || rhs.primal == 0.0 {
            return Err(domain("div", rhs.primal));
        }
        let quotient = self.primal / rhs.primal;
        // Same as (a'·b - a·b') / b², without squaring b.
        Ok(DualNumber {
            primal: quotient,
            tangent: (self.tangent - quotient * rhs.tangent) / rhs.primal,
        })
    }
}

impl Div<f64> for DualNumber {
    type Output = Result<Self>;

    fn div(self, rhs: f64) -> Result<Self> {
        self / DualNumber::constant(rhs)
    }
}

impl Div<DualNumber> for f64 {
    type Output = Result<DualNumber>;

    fn div(self, rhs: DualNumber) -> Result<DualNumber> {
        DualNumber::constant(self) / rhs
    }
}

impl Neg for DualNumber {
    type Output = Self;

    fn neg(self) -> Self {
        DualNumber {
            primal: -self.primal,
            tangent: -self.tangent,
        }
    }
}

impl DualNumber {
    /// Natural logarithm, `ln(a)' = a' / a`.
    ///
    /// Fails for a primal that is zero, negative or NaN.
    ///
    /// ```
    /// use dual_number::DualNumber;
    ///
    /// let y = DualNumber::variable(2.0).ln().unwrap();
    /// assert_eq!(y.tangent(), 0.5);
    ///
    /// assert!(DualNumber::variable(0.0).ln().is_err());
    /// ```
    pub fn ln(self) -> Result<Self> {
        if self.primal.is_nan() || self.primal <= 0.0 {
            return Err(domain("ln", self.primal));
        }
        Ok(DualNumber {
            primal: self.primal.ln(),
            tangent: self.tangent / self.primal,
        })
    }

    pub fn sin(self) -> Self {
        DualNumber {
            primal: self.primal.sin(),
            tangent: self.tangent * self.primal.cos(),
        }
    }

    pub fn cos(self) -> Self {
        DualNumber {
            primal: self.primal.cos(),
            tangent: -self.tangent * self.primal.sin(),
        }
    }

    pub fn exp(self) -> Self {
        let value = self.primal.exp();
        DualNumber {
            primal: value,
            tangent: self.tangent * value,
        }
    }

    /// Reciprocal, `(1/a)' = -a' / a²`.
    pub fn recip(self) -> Result<Self> {
        if self.primal.is_nan() || self.primal == 0.0 {
            return Err(domain("recip", self.primal));
        }
        let inverse = self.primal.recip();
        Ok(DualNumber {
            primal: inverse,
            tangent: -self.tangent * inverse * inverse,
        })
    }

    /// Square root, `√a' = a' / (2√a)`.
    ///
    /// Negative primals are outside the domain. At zero the derivative is
    /// unbounded, so only a zero tangent is accepted there.
    pub fn sqrt(self) -> Result<Self> {
        if self.primal.is_nan() || self.primal < 0.0 {
            return Err(domain("sqrt", self.primal));
        }
        if self.primal == 0.0 {
            if self.tangent != 0.0 {
                return Err(domain("sqrt", self.primal));
            }
            return Ok(DualNumber::constant(0.0));
        }
        let root = self.primal.sqrt();
        Ok(DualNumber {
            primal: root,
            tangent: self.tangent / (root + root),
        })
    }

    /// Integer power, `(aⁿ)' = n·aⁿ⁻¹·a'`.
    pub fn powi(self, n: i32) -> Result<Self> {
        if n == 0 {
            return Ok(DualNumber::constant(1.0));
        }
        if n < 0 && self.primal == 0.0 {
            return Err(domain("powi", self.primal));
        }
        let value = self.primal.powi(n);
        // n - 1 overflows for i32::MIN; the primal is nonzero on that path.
        let lower = if n > 0 {
            self.primal.powi(n - 1)
        } else {
            value / self.primal
        };
        Ok(DualNumber {
            primal: value,
            tangent: f64::from(n) * lower * self.tangent,
        })
    }
}
