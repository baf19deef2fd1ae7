//! Errors raised while rewriting.
//!
//! A rule that does not match is not an error: matching and application report
//! that through `bool`/`Option`. The only failure mode is arithmetic raised while
//! folding constants during instantiation.

use thiserror::Error;

use crate::language::number::Number;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division of {dividend} by zero")]
    DivisionByZero { dividend: Number },
    #[error("overflow while evaluating ({lhs} {op} {rhs})")]
    Overflow {
        op: &'static str,
        lhs: Number,
        rhs: Number,
    },
    #[error("overflow while negating {operand}")]
    NegationOverflow { operand: Number },
}
