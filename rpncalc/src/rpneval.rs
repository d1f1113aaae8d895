use crate::ops::OpErr;
use crate::stack::{EmptyStack, ValueStack};
use crate::tokenizer::{RpnToken, RpnTokenizer};
use thiserror::Error;

macro_rules! trace {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenErr {
    #[error("insufficient operands")]
    InsufficientOperands,
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("invalid number format")]
    InvalidNumber,
    #[error("numbers must be non-negative")]
    NegativeOperand,
    #[error("division by zero")]
    DivisionByZero,
    #[error("operation error: {0}")]
    Operation(#[from] EmptyStack),
}

impl From<OpErr> for TokenErr {
    fn from(err: OpErr) -> Self {
        match err {
            OpErr::DivisionByZero => TokenErr::DivisionByZero,
            OpErr::UnknownOperator(op) => TokenErr::UnknownOperator(op),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalErr {
    #[error("empty expression")]
    EmptyExpression,
    #[error("error in token '{token}': {source}")]
    InToken { token: String, source: TokenErr },
    // number of values left on the stack
    #[error("malformed expression: exactly one value must remain")]
    MalformedResult(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyExpression,
    InsufficientOperands,
    UnknownOperator,
    InvalidNumberFormat,
    NegativeOperand,
    DivisionByZero,
    MalformedResult,
    EmptyStackPop,
}

impl EvalErr {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            EvalErr::EmptyExpression => ErrorKind::EmptyExpression,
            EvalErr::MalformedResult(_) => ErrorKind::MalformedResult,
            EvalErr::InToken { ref source, .. } => match *source {
                TokenErr::InsufficientOperands => ErrorKind::InsufficientOperands,
                TokenErr::UnknownOperator(_) => ErrorKind::UnknownOperator,
                TokenErr::InvalidNumber => ErrorKind::InvalidNumberFormat,
                TokenErr::NegativeOperand => ErrorKind::NegativeOperand,
                TokenErr::DivisionByZero => ErrorKind::DivisionByZero,
                TokenErr::Operation(_) => ErrorKind::EmptyStackPop,
            },
        }
    }
}

/// An evaluation session. The stack is reused across sequential calls.
#[derive(Debug, Default)]
pub struct RpnEvaluator {
    stack: ValueStack,
}

impl RpnEvaluator {
    pub fn new() -> RpnEvaluator {
        RpnEvaluator{stack: ValueStack::new()}
    }

    pub fn calculate(&mut self, expr: &str) -> Result<f64, EvalErr> {
        if expr.trim().is_empty() {
            return Err(EvalErr::EmptyExpression);
        }
        // a previous call may have bailed out mid expression
        self.stack.clear();

        for (lexeme, token) in RpnTokenizer::new(expr) {
            self.step(token).map_err(|source| EvalErr::InToken {
                token: lexeme.to_string(),
                source,
            })?;
            trace!("rpn: '{}' -> depth {}", lexeme, self.stack.size());
        }

        if self.stack.size() != 1 {
            let left = self.stack.size();
            self.stack.clear();
            return Err(EvalErr::MalformedResult(left));
        }
        let result = self.stack.pop().map_err(|_| EvalErr::MalformedResult(0))?;
        trace!("rpn: result {}", result);
        Ok(result)
    }

    fn step(&mut self, token: RpnToken) -> Result<(), TokenErr> {
        match token {
            RpnToken::Op(op) => {
                if self.stack.size() < 2 {
                    return Err(TokenErr::InsufficientOperands);
                }
                let rhs = self.stack.pop()?;
                let lhs = self.stack.pop()?;
                self.stack.push(op.apply(lhs, rhs)?);
            }
            RpnToken::Operand(lexeme) => {
                let num = Self::parse_operand(lexeme)?;
                self.stack.push(num);
            }
        }
        Ok(())
    }

    fn parse_operand(lexeme: &str) -> Result<f64, TokenErr> {
        let num = match lexeme.parse::<f64>() {
            Ok(num) => num,
            // alphabetic garbage is assumed to be a mistyped operator
            Err(_) if lexeme.chars().any(char::is_alphabetic) =>
                return Err(TokenErr::UnknownOperator(lexeme.to_string())),
            Err(_) => return Err(TokenErr::InvalidNumber),
        };
        if num < 0.0 {
            return Err(TokenErr::NegativeOperand);
        }
        Ok(num)
    }
}

pub fn calculate(expr: &str) -> Result<f64, EvalErr> {
    RpnEvaluator::new().calculate(expr)
}
