#![deny(warnings)]

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pop from empty stack")]
pub struct EmptyStack;

/// LIFO accumulator for operands and intermediate results.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueStack(Vec<f64>);

impl ValueStack {
    pub fn new() -> ValueStack {
        ValueStack(Vec::new())
    }

    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    pub fn pop(&mut self) -> Result<f64, EmptyStack> {
        self.0.pop().ok_or(EmptyStack)
    }

    pub fn peek(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn size(&self) -> usize { self.0.len() }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

///////////////////////////////////////////////////////////////////////////////
