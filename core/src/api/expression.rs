//! Compiled tally expressions.

use super::{Error, ExecutionOptions};
use crate::{
    analyzer::Expr,
    evaluator::{EvalError, Evaluator},
    parser::Span,
    types::Type,
};

/// A compiled tally expression ready for execution.
///
/// The expression owns its typed tree and can be executed any number of times.
/// Each run uses a fresh [`Evaluator`], so no state carries over between runs.
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    /// The type-checked tree
    expr: Expr,

    /// Source text the expression was compiled from
    source: String,

    /// Location of this expression within `source`
    span: Span,

    /// Default runtime options (max_depth)
    options: ExecutionOptions,
}

impl CompiledExpression {
    /// Called internally by `Engine::compile()`.
    pub(crate) fn new(expr: Expr, source: String, span: Span, options: ExecutionOptions) -> Self {
        Self {
            expr,
            source,
            span,
            options,
        }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The source text of this expression alone.
    pub fn snippet(&self) -> &str {
        self.span.str_of(&self.source)
    }

    /// Get the expression's result type.
    pub fn return_type(&self) -> Type {
        self.expr.check()
    }

    /// Execute with the options the engine was configured with.
    pub fn run(&self) -> Result<i64, Error> {
        self.run_with_options(self.options)
    }

    pub fn run_with_options(&self, options: ExecutionOptions) -> Result<i64, Error> {
        let mut evaluator = Evaluator::new(options.into());
        evaluator.eval(&self.expr).map_err(|err| match err {
            EvalError::Arithmetic(error) => Error::runtime(error, &self.source, self.span.clone()),
            EvalError::ResourceExceeded(error) => Error::ResourceExceeded(error),
        })
    }
}
