//! tally - a tiny typed expression calculator
//!
//! # Overview
//!
//! tally evaluates boolean and integer expressions such as
//! `1 < 2 ? 0x10 * 3 : -1`. Every expression is type-checked while its tree is
//! built, so evaluation never meets an operand of the wrong kind. Booleans
//! evaluate to `0` or `1`.
//!
//! # Quick Start
//!
//! ```
//! use tally::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! // Compile an expression
//! let expr = engine.compile("(2 + 3) * 4 == 20").unwrap();
//!
//! // Execute
//! assert_eq!(expr.run().unwrap(), 1);
//! ```
//!
//! # Errors
//!
//! Compilation and runtime failures carry [`Diagnostic`]s pointing into the
//! source. [`render_error`] prints them with source snippets:
//!
//! ```
//! use tally::{Engine, EngineOptions, render_error_to_string_no_color};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let err = engine.compile("1 + true").unwrap_err();
//! assert!(render_error_to_string_no_color(&err).contains("[E001]"));
//! ```
//!
//! # Building trees directly
//!
//! ```
//! use tally::{evaluator, typed::Expr};
//!
//! let expr = Expr::cond(Expr::bool(true), Expr::int(2), Expr::int(3)).unwrap();
//! assert_eq!(evaluator::eval(&expr).unwrap(), 2);
//! assert!(Expr::add(Expr::bool(true), Expr::int(1)).is_err());
//! ```

mod error_renderer;

// Re-export public API from tally_core
pub use tally_core::api::{
    CompilationOptions, CompiledExpression, Diagnostic, Engine, EngineOptions, Error,
    ExecutionOptions, Severity,
};

// Re-export the language layers
pub use tally_core::types::{self, Type};
pub use tally_core::{analyzer, evaluator, parser};

/// The typed expression tree and its construction errors.
pub mod typed {
    pub use tally_core::analyzer::{Expr, ExprInner, Operand, TypeError, TypeRule};
}

// Re-export errors
pub use tally_core::evaluator::{ArithmeticError, EvalError, ResourceExceeded};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
