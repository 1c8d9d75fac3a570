//! The tally compilation engine.

use bumpalo::Bump;
use tracing::debug;

use super::{CompilationOptions, CompiledExpression, EngineOptions, Error};
use crate::{analyzer, parser};

/// The tally compilation engine.
///
/// The engine only holds configuration. Compiled expressions own their typed
/// tree and do not borrow from the engine.
///
/// # Example
///
/// ```
/// use tally_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let expr = engine.compile("1 < 2 ? 40 + 2 : 0").unwrap();
/// assert_eq!(expr.run().unwrap(), 42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile exactly one expression.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, Error> {
        self.compile_with_options(self.options.default_compilation_options, source)
    }

    pub fn compile_with_options(
        &self,
        options: CompilationOptions,
        source: &str,
    ) -> Result<CompiledExpression, Error> {
        let arena = Bump::new();
        let parsed = parser::parse_with_max_depth(&arena, source, options.max_depth)?;
        self.lower(&parsed)
    }

    /// Compile a line of `;`-separated expressions.
    ///
    /// The first statement that fails to compile fails the whole line, so no
    /// statement runs before every one of them is known to be well-typed.
    pub fn compile_line(&self, source: &str) -> Result<Vec<CompiledExpression>, Error> {
        self.compile_line_with_options(self.options.default_compilation_options, source)
    }

    pub fn compile_line_with_options(
        &self,
        options: CompilationOptions,
        source: &str,
    ) -> Result<Vec<CompiledExpression>, Error> {
        let arena = Bump::new();
        let line = parser::parse_line_with_max_depth(&arena, source, options.max_depth)?;
        debug!(statements = line.exprs.len(), "compiling line");
        line.statements().map(|stmt| self.lower(&stmt)).collect()
    }

    fn lower(&self, parsed: &parser::ParsedExpr<'_>) -> Result<CompiledExpression, Error> {
        let expr = analyzer::analyze(parsed)?;
        let source = parsed.ann.source;
        let span = parsed
            .span_of(parsed.expr)
            .unwrap_or_else(|| parser::Span::new(0, source.len()));
        Ok(CompiledExpression::new(
            expr,
            source.to_string(),
            span,
            self.options.default_execution_options,
        ))
    }
}
