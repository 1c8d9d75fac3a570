//! Runtime evaluation errors.
//!
//! Type mismatches cannot happen here: every tree handed to the evaluator was
//! type-checked when it was built.
//!
//! # Error Categories
//!
//! - **Arithmetic errors**: a well-typed operation with no defined result
//!   (division or remainder by zero).
//!
//! - **Resource exceeded errors**: evaluation hit a configured limit
//!   (stack depth) and was stopped instead of crashing.

use thiserror::Error;

/// Runtime evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

/// Integer operations without a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Remainder by zero")]
    RemainderByZero,
}

/// Resource limit exceeded errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResourceExceeded {
    /// Evaluation recursion depth exceeded.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl ArithmeticError {
    pub fn code(&self) -> &'static str {
        match self {
            ArithmeticError::DivisionByZero => "R001",
            ArithmeticError::RemainderByZero => "R002",
        }
    }
}
