//! Public API for the tally expression language.
//!
//! This module provides the stable public API for compiling and executing
//! tally expressions. Internal parse, type and evaluation errors are turned
//! into [`Error`] values carrying [`Diagnostic`]s.
//!
//! # Example
//!
//! ```
//! use tally_core::api::{Engine, EngineOptions, ExecutionOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! // Compile a line of statements
//! let exprs = engine.compile_line("1 + 2; 0x10 > 15").unwrap();
//!
//! // Execute
//! let results: Vec<i64> = exprs.iter().map(|e| e.run().unwrap()).collect();
//! assert_eq!(results, vec![3, 1]);
//!
//! // Override limits for a single run
//! let result = exprs[0].run_with_options(ExecutionOptions { max_depth: 1 });
//! assert!(result.is_err());
//! ```

pub mod engine;
pub mod error;
pub mod expression;
pub mod options;

#[cfg(test)]
mod api_test;

pub use engine::Engine;
pub use error::{Diagnostic, Error, Severity};
pub use expression::CompiledExpression;
pub use options::{CompilationOptions, EngineOptions, ExecutionOptions};
