//! The term language: exact numbers and the four-variant expression tree.

pub mod expression;
pub mod number;

pub use expression::{BinaryOperator, ExprRef, Expression};
pub use number::Number;
