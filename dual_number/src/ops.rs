//! Free-function form of the operator layer.
//!
//! Each binary function takes a [`DualNumber`] on the left and anything that
//! converts into an [`Operand`] on the right. The set of conversions is
//! closed: a dual number or a real constant. Anything else does not compile.

use crate::{DualNumber, Result};

/// Right-hand operand of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Dual(DualNumber),
    /// A real constant; its tangent is zero.
    Constant(f64),
}

impl From<DualNumber> for Operand {
    fn from(value: DualNumber) -> Self {
        Operand::Dual(value)
    }
}

impl From<&DualNumber> for Operand {
    fn from(value: &DualNumber) -> Self {
        Operand::Dual(*value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Constant(f64::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Constant(f64::from(value))
    }
}

pub fn add(a: DualNumber, b: impl Into<Operand>) -> DualNumber {
    match b.into() {
        Operand::Dual(b) => a + b,
        Operand::Constant(c) => a + c,
    }
}

pub fn sub(a: DualNumber, b: impl Into<Operand>) -> DualNumber {
    match b.into() {
        Operand::Dual(b) => a - b,
        Operand::Constant(c) => a - c,
    }
}

pub fn mul(a: DualNumber, b: impl Into<Operand>) -> DualNumber {
    match b.into() {
        Operand::Dual(b) => a * b,
        Operand::Constant(c) => a * c,
    }
}

pub fn div(a: DualNumber, b: impl Into<Operand>) -> Result<DualNumber> {
    match b.into() {
        Operand::Dual(b) => a / b,
        Operand::Constant(c) => a / c,
    }
}

pub fn log(a: DualNumber) -> Result<DualNumber> {
    a.ln()
}

pub fn sin(a: DualNumber) -> DualNumber {
    a.sin()
}

pub fn cos(a: DualNumber) -> DualNumber {
    a.cos()
}

pub fn exp(a: DualNumber) -> DualNumber {
    a.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DualError;

    #[test]
    fn constants_of_every_kind_have_zero_tangent() {
        let a = DualNumber::new(2.0, 3.0);
        assert_eq!(add(a, 1.0_f64), add(a, 1_i32));
        assert_eq!(add(a, 1.0_f32).into_parts(), (3.0, 3.0));
        assert_eq!(sub(a, 5).into_parts(), (-3.0, 3.0));
        assert_eq!(mul(a, 2.5).into_parts(), (5.0, 7.5));
    }

    #[test]
    fn dual_operands_match_operators() {
        let a = DualNumber::new(2.0, 3.0);
        let b = DualNumber::new(-1.5, 0.5);
        assert_eq!(add(a, b), a + b);
        assert_eq!(sub(a, &b), a - b);
        assert_eq!(mul(a, b), a * b);
        assert_eq!(div(a, b), a / b);
    }

    #[test]
    fn fallible_functions_report_domain() {
        let zero = DualNumber::variable(0.0);
        assert_eq!(
            log(zero),
            Err(DualError::Domain { op: "ln", primal: 0.0 })
        );
        assert_eq!(
            div(DualNumber::variable(1.0), 0),
            Err(DualError::Domain { op: "div", primal: 0.0 })
        );
    }

    #[test]
    fn elementary_functions_delegate() {
        let x = DualNumber::new(0.7, -2.0);
        assert_eq!(sin(x), x.sin());
        assert_eq!(cos(x), x.cos());
        assert_eq!(exp(x), x.exp());
        assert_eq!(log(x), x.ln());
    }
}
