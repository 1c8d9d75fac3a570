//! Typing rules for every operator.
//!
//! Each rule looks only at the already-known types of the operands, so applying
//! it is constant time. Operands are checked left to right and the first
//! violation wins.

use crate::{
    analyzer::error::{Operand, TypeError, TypeRule},
    parser::{BinaryOp, BoolOp, ComparisonOp, Operator, UnaryOp},
    types::{Type, type_equals},
};

fn expect(op: Operator, operand: Operand, found: Type, expected: Type) -> Result<(), TypeError> {
    if type_equals(found, expected) {
        Ok(())
    } else {
        Err(TypeError::new(
            op,
            TypeRule::OperandMustBe {
                operand,
                expected,
                found,
            },
        ))
    }
}

fn expect_same(
    op: Operator,
    (first, first_ty): (Operand, Type),
    (second, second_ty): (Operand, Type),
) -> Result<Type, TypeError> {
    if type_equals(first_ty, second_ty) {
        Ok(first_ty)
    } else {
        Err(TypeError::new(
            op,
            TypeRule::OperandsMustMatch {
                first,
                second,
                first_ty,
                second_ty,
            },
        ))
    }
}

pub fn check_unary(op: UnaryOp, operand: Type) -> Result<Type, TypeError> {
    let expected = match op {
        UnaryOp::Neg => Type::Int,
        UnaryOp::Not => Type::Bool,
    };
    expect(Operator::Unary(op), Operand::Only, operand, expected)?;
    Ok(expected)
}

pub fn check_binary(op: BinaryOp, left: Type, right: Type) -> Result<Type, TypeError> {
    let op = Operator::Binary(op);
    expect(op, Operand::Left, left, Type::Int)?;
    expect(op, Operand::Right, right, Type::Int)?;
    Ok(Type::Int)
}

pub fn check_boolean(op: BoolOp, left: Type, right: Type) -> Result<Type, TypeError> {
    let op = Operator::Boolean(op);
    expect(op, Operand::Left, left, Type::Bool)?;
    expect(op, Operand::Right, right, Type::Bool)?;
    Ok(Type::Bool)
}

pub fn check_comparison(op: ComparisonOp, left: Type, right: Type) -> Result<Type, TypeError> {
    let operator = Operator::Comparison(op);
    if op.is_equality() {
        expect_same(operator, (Operand::Left, left), (Operand::Right, right))?;
    } else {
        expect(operator, Operand::Left, left, Type::Int)?;
        expect(operator, Operand::Right, right, Type::Int)?;
    }
    Ok(Type::Bool)
}

pub fn check_or_else(primary: Type, fallback: Type) -> Result<Type, TypeError> {
    expect_same(
        Operator::OrElse,
        (Operand::Left, primary),
        (Operand::Right, fallback),
    )
}

pub fn check_cond(cond: Type, then_branch: Type, else_branch: Type) -> Result<Type, TypeError> {
    expect(Operator::Cond, Operand::Condition, cond, Type::Bool)?;
    expect_same(
        Operator::Cond,
        (Operand::Then, then_branch),
        (Operand::Else, else_branch),
    )
}
