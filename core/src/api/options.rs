//! Configuration options for the tally engine.

use crate::{evaluator, parser};

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use tally_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 100 };
/// assert!(options.max_depth < CompilationOptions::default().max_depth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Maximum nesting depth of a parsed expression.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            max_depth: parser::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for expression execution.
///
/// These options control resource limits during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: evaluator::DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<ExecutionOptions> for evaluator::EvaluatorOptions {
    fn from(options: ExecutionOptions) -> Self {
        Self {
            max_depth: options.max_depth,
        }
    }
}

/// Configuration options for the tally engine.
///
/// These options set the defaults for compilation and execution,
/// which can be overridden on a per-call basis.
///
/// # Example
///
/// ```
/// use tally_core::api::{CompilationOptions, EngineOptions, ExecutionOptions};
///
/// let options = EngineOptions {
///     default_compilation_options: CompilationOptions::default(),
///     default_execution_options: ExecutionOptions { max_depth: 50 },
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Default options for compilation.
    ///
    /// These can be overridden when calling `Engine::compile_with_options()`.
    pub default_compilation_options: CompilationOptions,

    /// Default options for execution.
    ///
    /// These can be overridden when calling `CompiledExpression::run_with_options()`.
    pub default_execution_options: ExecutionOptions,
}
