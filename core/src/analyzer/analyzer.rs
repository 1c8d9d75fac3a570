use tracing::{debug, trace};

use crate::{
    analyzer::{AnalyzeError, TypeError, typed_expr::Expr},
    parser::{self, Literal, Span},
};

/// Lower a parsed expression into a typed [`Expr`].
///
/// Every node goes through its checked constructor, so the first operator whose
/// operands break its typing rule aborts the whole analysis, pointing at that
/// operator's span.
pub fn analyze(parsed: &parser::ParsedExpr<'_>) -> Result<Expr, AnalyzeError> {
    let analyzer = Analyzer {
        ann: parsed.ann,
        whole: parsed
            .span_of(parsed.expr)
            .unwrap_or_else(|| Span::new(0, parsed.ann.source.len())),
    };
    let expr = analyzer.analyze(parsed.expr)?;
    debug!(ty = %expr.check(), depth = expr.depth(), "analyzed expression");
    Ok(expr)
}

struct Analyzer<'a> {
    ann: &'a parser::AnnotatedSource<'a, parser::Expr<'a>>,
    whole: Span,
}

impl<'a> Analyzer<'a> {
    fn error(&self, expr: &parser::Expr<'a>, error: TypeError) -> AnalyzeError {
        let span = self
            .ann
            .span_of(expr)
            .unwrap_or_else(|| self.whole.clone());
        trace!(%error, ?span, "type error");
        AnalyzeError::new(error, self.ann.source.to_string(), span)
    }

    fn analyze(&self, expr: &parser::Expr<'a>) -> Result<Expr, AnalyzeError> {
        let result = match expr {
            parser::Expr::Literal(Literal::Int(value)) => Ok(Expr::int(*value)),
            parser::Expr::Literal(Literal::Bool(value)) => Ok(Expr::bool(*value)),
            parser::Expr::Unary { op, expr: operand } => {
                Expr::unary(*op, self.analyze(operand)?)
            }
            parser::Expr::Binary { op, left, right } => {
                Expr::binary(*op, self.analyze(left)?, self.analyze(right)?)
            }
            parser::Expr::Boolean { op, left, right } => {
                Expr::boolean(*op, self.analyze(left)?, self.analyze(right)?)
            }
            parser::Expr::Comparison { op, left, right } => {
                Expr::comparison(*op, self.analyze(left)?, self.analyze(right)?)
            }
            parser::Expr::OrElse { primary, fallback } => {
                Expr::or_else(self.analyze(primary)?, self.analyze(fallback)?)
            }
            parser::Expr::If {
                cond,
                then_branch,
                else_branch,
            } => Expr::cond(
                self.analyze(cond)?,
                self.analyze(then_branch)?,
                self.analyze(else_branch)?,
            ),
        };
        result.map_err(|error| self.error(expr, error))
    }
}
