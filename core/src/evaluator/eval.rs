//! Core evaluation logic.

use tracing::{trace, warn};

use crate::{
    analyzer::{Expr, ExprInner},
    evaluator::{EvalError, EvaluatorOptions, ResourceExceeded, operators},
    parser::BoolOp,
};

/// Evaluator for type-checked expressions.
///
/// Holds no state besides its limits and counters, so one evaluator can run
/// any number of trees; a fresh one starts from zero.
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
    nodes_evaluated: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self {
            options,
            depth: 0,
            nodes_evaluated: 0,
        }
    }

    /// Number of nodes visited so far, across all calls to [`Evaluator::eval`].
    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated
    }

    /// Evaluate a type-checked expression.
    pub fn eval(&mut self, expr: &Expr) -> Result<i64, EvalError> {
        self.depth = 0;
        self.eval_expr(expr)
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<i64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            warn!(
                depth = self.depth,
                max_depth = self.options.max_depth,
                "evaluation depth limit reached"
            );
            return Err(ResourceExceeded::StackOverflow {
                depth: self.depth + 1,
                max_depth: self.options.max_depth,
            }
            .into());
        }

        self.depth += 1;
        self.nodes_evaluated += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        trace!(depth = self.depth, ?result, "evaluated node");
        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &Expr) -> Result<i64, EvalError> {
        match expr.inner() {
            ExprInner::Bool(value) => Ok(i64::from(*value)),
            ExprInner::Int(value) => Ok(*value),

            ExprInner::Unary { op, expr } => {
                let value = self.eval_expr(expr)?;
                Ok(operators::eval_unary_int(*op, value))
            }

            ExprInner::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(operators::eval_binary_int(*op, left, right)?)
            }

            ExprInner::Boolean { op, left, right } => {
                let left = self.eval_expr(left)?;
                if *op == BoolOp::AndThen && left != 1 {
                    return Ok(0);
                }
                let right = self.eval_expr(right)?;
                Ok(operators::eval_bool_int(*op, left, right))
            }

            ExprInner::Comparison { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(operators::eval_comparison_int(*op, left, right))
            }

            ExprInner::OrElse { primary, fallback } => {
                let primary = self.eval_expr(primary)?;
                if primary != 0 {
                    return Ok(primary);
                }
                self.eval_expr(fallback)
            }

            ExprInner::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(cond)? != 0 {
                    self.eval_expr(then_branch)
                } else {
                    self.eval_expr(else_branch)
                }
            }
        }
    }
}
