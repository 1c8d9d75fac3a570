use crate::parser::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp, syntax::AnnotatedSource};

/// A single parsed expression and its source annotations.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> ParsedExpr<'a> {
    pub fn span_of(&self, expr: &Expr<'a>) -> Option<Span> {
        self.ann.span_of(expr)
    }
}

/// A parsed line: zero or more `;`-separated expressions sharing one source.
#[derive(Debug)]
pub struct ParsedLine<'a> {
    pub exprs: &'a [&'a Expr<'a>],
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> ParsedLine<'a> {
    /// View each statement as a standalone [`ParsedExpr`].
    pub fn statements(&self) -> impl Iterator<Item = ParsedExpr<'a>> {
        let ann = self.ann;
        self.exprs.iter().map(move |&expr| ParsedExpr { expr, ann })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Boolean {
        op: BoolOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Comparison {
        op: ComparisonOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    OrElse {
        primary: &'a Expr<'a>,
        fallback: &'a Expr<'a>,
    },
    If {
        cond: &'a Expr<'a>,
        then_branch: &'a Expr<'a>,
        else_branch: &'a Expr<'a>,
    },
    Literal(Literal),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
}

impl core::fmt::Debug for Literal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "Int({value})"),
            Literal::Bool(b) => write!(f, "Bool({b})"),
        }
    }
}
