pub mod build;
mod display;
mod tree;

pub use tree::{BinaryOperator, ExprRef, Expression};
