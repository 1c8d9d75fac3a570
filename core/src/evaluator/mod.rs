//! Tree-walking evaluator for tally expressions.
//!
//! The evaluator reduces a typed [`Expr`] to an `i64`. Booleans evaluate to
//! `0` or `1`.
//!
//! ## Design Principles
//!
//! - **Never panic**: overflow wraps and a zero divisor is an error value
//! - **Stack-safe**: depth tracking stops deeply nested expressions
//! - **Type-safe**: only type-checked trees can be built, so operand kinds never mismatch
//!
//! ## Example
//!
//! ```
//! use tally_core::{analyzer, evaluator, parser};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "1 + 2").unwrap();
//! let typed = analyzer::analyze(&parsed).unwrap();
//!
//! assert_eq!(evaluator::eval(&typed).unwrap(), 3);
//! ```

mod error;
mod eval;
mod operators;


pub use error::{ArithmeticError, EvalError, ResourceExceeded};
pub use eval::Evaluator;

use tracing::debug;

use crate::analyzer::Expr;

/// Default maximum evaluation depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Limits applied while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting of node visits before evaluation is stopped.
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a type-checked expression with default limits.
///
/// Uses default stack depth limit of 1000.
pub fn eval(expr: &Expr) -> Result<i64, EvalError> {
    eval_with_limits(expr, DEFAULT_MAX_DEPTH)
}

/// Evaluate a type-checked expression with custom depth limit.
pub fn eval_with_limits(expr: &Expr, max_depth: usize) -> Result<i64, EvalError> {
    debug!(max_depth, "evaluating expression");
    Evaluator::new(EvaluatorOptions { max_depth }).eval(expr)
}
