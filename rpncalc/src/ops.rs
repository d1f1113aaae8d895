#![deny(warnings)]

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpErr {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// The closed set of binary operators an expression may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(&self) -> &'static str {
        match *self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Apply to (lhs, rhs), where rhs was on top of the stack.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, OpErr> {
        match *self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(OpErr::DivisionByZero),
            Operator::Div => Ok(lhs / rhs),
        }
    }
}

pub fn resolve(symbol: &str) -> Result<Operator, OpErr> {
    match symbol {
        "+" => Ok(Operator::Add),
        "-" => Ok(Operator::Sub),
        "*" => Ok(Operator::Mul),
        "/" => Ok(Operator::Div),
        _ => Err(OpErr::UnknownOperator(symbol.to_string())),
    }
}

impl FromStr for Operator {
    type Err = OpErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{resolve, OpErr, Operator};

    #[test]
    fn resolve_symbols() {
        for op in Operator::ALL.iter() {
            assert_eq!(resolve(op.symbol()), Ok(*op));
            assert_eq!(op.to_string().parse::<Operator>(), Ok(*op));
        }
        for bad in ["%", "^", "**", "add", "", "++"].iter() {
            assert_eq!(resolve(bad), Err(OpErr::UnknownOperator(bad.to_string())));
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operator::Sub.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Div.apply(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(Operator::Div.apply(4.0, 0.0), Err(OpErr::DivisionByZero));
        assert_eq!(Operator::Div.apply(4.0, -0.0), Err(OpErr::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, 0.0), Err(OpErr::DivisionByZero));
    }

    #[test]
    fn float_semantics_unguarded() {
        let big = Operator::Mul.apply(f64::MAX, 2.0).unwrap();
        assert!(big.is_infinite());
        assert!(Operator::Sub.apply(f64::INFINITY, f64::INFINITY).unwrap().is_nan());
    }
}
