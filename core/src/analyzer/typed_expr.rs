//! The typed expression tree.
//!
//! An [`Expr`] can only be obtained through its constructors, and every
//! constructor applies the operator's typing rule (see [`rules`]) to the
//! operands it receives. Operands are moved in and owned exclusively by the new
//! node; when the rule rejects them they are dropped together with the error,
//! so an ill-typed node never exists.
//!
//! [`rules`]: crate::analyzer::rules

use core::fmt;

use crate::{
    analyzer::{TypeError, rules},
    parser::{BinaryOp, BoolOp, ComparisonOp, UnaryOp},
    types::Type,
};

/// A type-checked expression node.
///
/// Dropping a tree is iterative and safe at any depth. `Clone`, `PartialEq`,
/// `Debug` and `Display` recurse once per level, so they are only stack-safe
/// for trees within the parser's depth limit ([`DEFAULT_MAX_DEPTH`] unless
/// configured otherwise). Trees built by hand deeper than that should not be
/// cloned, compared or formatted.
///
/// [`DEFAULT_MAX_DEPTH`]: crate::parser::DEFAULT_MAX_DEPTH
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(Type, ExprInner);

#[derive(Debug, Clone, PartialEq)]
pub enum ExprInner {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Boolean {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    OrElse {
        primary: Box<Expr>,
        fallback: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Bool(bool),
    Int(i64),
}

type Checked = Result<Expr, TypeError>;

impl Expr {
    pub fn bool(value: bool) -> Expr {
        Expr(Type::Bool, ExprInner::Bool(value))
    }

    pub fn int(value: i64) -> Expr {
        Expr(Type::Int, ExprInner::Int(value))
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Checked {
        let ty = rules::check_unary(op, expr.0)?;
        Ok(Expr(
            ty,
            ExprInner::Unary {
                op,
                expr: Box::new(expr),
            },
        ))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Checked {
        let ty = rules::check_binary(op, left.0, right.0)?;
        Ok(Expr(
            ty,
            ExprInner::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }

    pub fn boolean(op: BoolOp, left: Expr, right: Expr) -> Checked {
        let ty = rules::check_boolean(op, left.0, right.0)?;
        Ok(Expr(
            ty,
            ExprInner::Boolean {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }

    pub fn comparison(op: ComparisonOp, left: Expr, right: Expr) -> Checked {
        let ty = rules::check_comparison(op, left.0, right.0)?;
        Ok(Expr(
            ty,
            ExprInner::Comparison {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }

    /// `primary || fallback`: the value of `primary` unless it is zero/false,
    /// in which case the value of `fallback`.
    pub fn or_else(primary: Expr, fallback: Expr) -> Checked {
        let ty = rules::check_or_else(primary.0, fallback.0)?;
        Ok(Expr(
            ty,
            ExprInner::OrElse {
                primary: Box::new(primary),
                fallback: Box::new(fallback),
            },
        ))
    }

    /// `cond ? then_branch : else_branch`.
    pub fn cond(cond: Expr, then_branch: Expr, else_branch: Expr) -> Checked {
        let ty = rules::check_cond(cond.0, then_branch.0, else_branch.0)?;
        Ok(Expr(
            ty,
            ExprInner::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
        ))
    }

    pub fn not(expr: Expr) -> Checked {
        Self::unary(UnaryOp::Not, expr)
    }

    pub fn neg(expr: Expr) -> Checked {
        Self::unary(UnaryOp::Neg, expr)
    }

    pub fn and(left: Expr, right: Expr) -> Checked {
        Self::boolean(BoolOp::And, left, right)
    }

    pub fn or(left: Expr, right: Expr) -> Checked {
        Self::boolean(BoolOp::Or, left, right)
    }

    pub fn xor(left: Expr, right: Expr) -> Checked {
        Self::boolean(BoolOp::Xor, left, right)
    }

    pub fn and_then(left: Expr, right: Expr) -> Checked {
        Self::boolean(BoolOp::AndThen, left, right)
    }

    pub fn equal(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Eq, left, right)
    }

    pub fn not_equal(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Neq, left, right)
    }

    pub fn less_than(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Lt, left, right)
    }

    pub fn greater_than(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Gt, left, right)
    }

    pub fn less_than_eq(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Le, left, right)
    }

    pub fn greater_than_eq(left: Expr, right: Expr) -> Checked {
        Self::comparison(ComparisonOp::Ge, left, right)
    }

    pub fn add(left: Expr, right: Expr) -> Checked {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Checked {
        Self::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Checked {
        Self::binary(BinaryOp::Mul, left, right)
    }

    pub fn div(left: Expr, right: Expr) -> Checked {
        Self::binary(BinaryOp::Div, left, right)
    }

    pub fn rem(left: Expr, right: Expr) -> Checked {
        Self::binary(BinaryOp::Rem, left, right)
    }

    /// The type established when this node was constructed.
    ///
    /// The rule was already enforced by the constructor, so this never fails
    /// and has no side effects.
    pub fn check(&self) -> Type {
        self.0
    }

    pub fn ty(&self) -> Type {
        self.0
    }

    pub fn inner(&self) -> &ExprInner {
        &self.1
    }

    /// Direct operands, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match &self.1 {
            ExprInner::Binary { left, right, .. }
            | ExprInner::Boolean { left, right, .. }
            | ExprInner::Comparison { left, right, .. } => vec![&**left, &**right],
            ExprInner::Unary { expr, .. } => vec![&**expr],
            ExprInner::OrElse { primary, fallback } => vec![&**primary, &**fallback],
            ExprInner::If {
                cond,
                then_branch,
                else_branch,
            } => vec![&**cond, &**then_branch, &**else_branch],
            ExprInner::Bool(_) | ExprInner::Int(_) => vec![],
        }
    }

    pub fn arity(&self) -> usize {
        self.children().len()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(expr.children().into_iter().map(|c| (c, depth + 1)));
        }
        max
    }
}

impl ExprInner {
    fn is_leaf(&self) -> bool {
        matches!(self, ExprInner::Bool(_) | ExprInner::Int(_))
    }

    fn take_children(&mut self, out: &mut Vec<Box<Expr>>) {
        if self.is_leaf() {
            return;
        }
        match core::mem::replace(self, ExprInner::Bool(false)) {
            ExprInner::Binary { left, right, .. }
            | ExprInner::Boolean { left, right, .. }
            | ExprInner::Comparison { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            ExprInner::Unary { expr, .. } => out.push(expr),
            ExprInner::OrElse { primary, fallback } => {
                out.push(primary);
                out.push(fallback);
            }
            ExprInner::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push(cond);
                out.push(then_branch);
                out.push(else_branch);
            }
            ExprInner::Bool(_) | ExprInner::Int(_) => {}
        }
    }
}

// Iterative so that dropping a deep tree cannot overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.1.take_children(&mut stack);
        while let Some(mut child) = stack.pop() {
            child.1.take_children(&mut stack);
        }
    }
}

/// Renders fully parenthesised source text.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.1 {
            ExprInner::Bool(value) => write!(f, "{}", value),
            ExprInner::Int(value) => write!(f, "{}", value),
            ExprInner::Unary { op, expr } => write!(f, "({}{})", op.symbol(), expr),
            ExprInner::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            ExprInner::Boolean { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            ExprInner::Comparison { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            ExprInner::OrElse { primary, fallback } => write!(f, "({} || {})", primary, fallback),
            ExprInner::If {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "({} ? {} : {})", cond, then_branch, else_branch),
        }
    }
}
