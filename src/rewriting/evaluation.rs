//! Whole-expression constant folding.

use crate::error::ArithmeticError;
use crate::language::expression::ExprRef;
use crate::rewriting::{instantiation::instantiate, matching::Bindings};

/// Folds every constant sub-computation of `expression`, bottom-up.
///
/// This is instantiation with folding enabled and no captures: variables stay as
/// they are, subtrees without constants are reused.
pub fn fold_constants(expression: &ExprRef) -> Result<ExprRef, ArithmeticError> {
    instantiate(expression, &Bindings::default(), true)
}
