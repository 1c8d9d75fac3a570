// These are common syntax structures used in ParsedExpr and the typed Expr.

use core::{cell::RefCell, fmt, ops::Range};

use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};

#[derive(Debug)]
pub struct AnnotatedSource<'a, T> {
    pub source: &'a str,
    spans: RefCell<HashMap<*const T, Span, DefaultHashBuilder, &'a Bump>>,
}

impl<'a, T> AnnotatedSource<'a, T> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self {
            source,
            spans: RefCell::new(HashMap::new_in(arena)),
        }
    }
    pub fn add_span(&self, expr: &T, span: Span) {
        let p = expr as *const _;
        self.spans.borrow_mut().insert(p, span);
    }
    pub fn span_of(&self, expr: &T) -> Option<Span> {
        let p = expr as *const _;
        self.spans.borrow().get(&p).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// Integer arithmetic: `Int, Int -> Int`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Boolean connectives: `Bool, Bool -> Bool`.
///
/// `And`, `Or` and `Xor` always evaluate both operands. `AndThen` skips its
/// right operand when the left one is false.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Xor,
    AndThen,
}

/// Comparisons. Equality works on any pair of same-typed operands, ordering
/// only on `Int`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl ComparisonOp {
    pub fn is_equality(self) -> bool {
        matches!(self, ComparisonOp::Eq | ComparisonOp::Neq)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

impl BoolOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BoolOp::And => "&",
            BoolOp::Or => "|",
            BoolOp::Xor => "^",
            BoolOp::AndThen => "&&",
        }
    }
}

impl ComparisonOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "==",
            ComparisonOp::Neq => "!=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
        }
    }
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Every operator of the language, used to name the culprit in errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Boolean(BoolOp),
    Comparison(ComparisonOp),
    OrElse,
    Cond,
}

impl Operator {
    /// Human readable operator name, e.g. `and-then` or `less-than`.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Unary(UnaryOp::Neg) => "negation",
            Operator::Unary(UnaryOp::Not) => "not",
            Operator::Binary(BinaryOp::Add) => "addition",
            Operator::Binary(BinaryOp::Sub) => "subtraction",
            Operator::Binary(BinaryOp::Mul) => "multiplication",
            Operator::Binary(BinaryOp::Div) => "division",
            Operator::Binary(BinaryOp::Rem) => "remainder",
            Operator::Boolean(BoolOp::And) => "and",
            Operator::Boolean(BoolOp::Or) => "or",
            Operator::Boolean(BoolOp::Xor) => "xor",
            Operator::Boolean(BoolOp::AndThen) => "and-then",
            Operator::Comparison(ComparisonOp::Eq) => "equal",
            Operator::Comparison(ComparisonOp::Neq) => "not-equal",
            Operator::Comparison(ComparisonOp::Lt) => "less-than",
            Operator::Comparison(ComparisonOp::Gt) => "greater-than",
            Operator::Comparison(ComparisonOp::Le) => "less-than-or-equal",
            Operator::Comparison(ComparisonOp::Ge) => "greater-than-or-equal",
            Operator::OrElse => "or-else",
            Operator::Cond => "conditional",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Unary(op) => op.symbol(),
            Operator::Binary(op) => op.symbol(),
            Operator::Boolean(op) => op.symbol(),
            Operator::Comparison(op) => op.symbol(),
            Operator::OrElse => "||",
            Operator::Cond => "? :",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}`)", self.name(), self.symbol())
    }
}
