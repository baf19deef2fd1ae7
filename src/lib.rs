//! Rule-based rewriting of arithmetic expressions with labeled proof traces.

#[macro_use]
mod macros;

pub mod error;
pub mod generation;
pub mod language;
pub mod report;
pub mod rewriting;

pub use error::ArithmeticError;
pub use language::{BinaryOperator, ExprRef, Expression, Number};
pub use rewriting::{
    applier::{ApplicationStrategy, RuleApplier},
    matching::{Bindings, Matcher, NonLinearCheck},
    proof::{ProofStep, ProofTrace},
    random::{WalkConfig, random_walk, random_walk_seeded, walk_batch},
    rule::Rule,
    system::{RuleSetKind, TermRewritingSystem},
};
