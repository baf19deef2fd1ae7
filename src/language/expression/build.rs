//! Constructors for expression trees.

use std::sync::Arc;

use super::{BinaryOperator, ExprRef, Expression};
use crate::error::ArithmeticError;
use crate::language::number::Number;

pub fn number(value: Number) -> ExprRef {
    Arc::new(Expression::Number(value))
}

pub fn num(value: i64) -> ExprRef {
    number(Number::integer(value))
}

pub fn ratio(numerator: i64, denominator: i64) -> Result<ExprRef, ArithmeticError> {
    Number::ratio(numerator, denominator).map(number)
}

pub fn var(name: impl Into<String>) -> ExprRef {
    Arc::new(Expression::Variable(name.into()))
}

pub fn binary(op: BinaryOperator, left: ExprRef, right: ExprRef) -> ExprRef {
    Arc::new(Expression::BinaryOp { op, left, right })
}

pub fn add(left: ExprRef, right: ExprRef) -> ExprRef {
    binary(BinaryOperator::Add, left, right)
}

pub fn sub(left: ExprRef, right: ExprRef) -> ExprRef {
    binary(BinaryOperator::Sub, left, right)
}

pub fn mul(left: ExprRef, right: ExprRef) -> ExprRef {
    binary(BinaryOperator::Mul, left, right)
}

pub fn div(left: ExprRef, right: ExprRef) -> ExprRef {
    binary(BinaryOperator::Div, left, right)
}

pub fn unary(op: impl Into<String>, operand: ExprRef) -> ExprRef {
    Arc::new(Expression::UnaryOp {
        op: op.into(),
        operand,
    })
}

pub fn neg(operand: ExprRef) -> ExprRef {
    unary(Expression::NEGATION, operand)
}
