//! Integer implementations of every operator.
//!
//! Booleans are represented as `0` and `1`.

use crate::{
    evaluator::ArithmeticError,
    parser::{BinaryOp, BoolOp, ComparisonOp, UnaryOp},
};

/// Evaluate an arithmetic operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division and remainder by zero return an error.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, ArithmeticError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        BinaryOp::Rem => {
            if right == 0 {
                Err(ArithmeticError::RemainderByZero)
            } else {
                Ok(left.wrapping_rem(right))
            }
        }
    }
}

/// Bitwise combination of two evaluated operands.
///
/// `AndThen` only reaches here once its left operand evaluated to `1`.
pub(super) fn eval_bool_int(op: BoolOp, left: i64, right: i64) -> i64 {
    match op {
        BoolOp::And | BoolOp::AndThen => left & right,
        BoolOp::Or => left | right,
        BoolOp::Xor => left ^ right,
    }
}

pub(super) fn eval_comparison_int(op: ComparisonOp, left: i64, right: i64) -> i64 {
    let result = match op {
        ComparisonOp::Eq => left == right,
        ComparisonOp::Neq => left != right,
        ComparisonOp::Lt => left < right,
        ComparisonOp::Gt => left > right,
        ComparisonOp::Le => left <= right,
        ComparisonOp::Ge => left >= right,
    };
    i64::from(result)
}

pub(super) fn eval_unary_int(op: UnaryOp, value: i64) -> i64 {
    match op {
        UnaryOp::Neg => value.wrapping_neg(),
        UnaryOp::Not => i64::from(value == 0),
    }
}
