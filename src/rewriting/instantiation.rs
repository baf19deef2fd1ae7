//! Building concrete expressions from replacement templates.

use std::sync::Arc;

use crate::error::ArithmeticError;
use crate::language::expression::{ExprRef, Expression, build};
use crate::rewriting::matching::Bindings;

/// Instantiates `template` with the captures in `bindings`.
///
/// Bound variables are replaced by the captured subtree (shared, not copied) and
/// unbound ones are kept verbatim. With `evaluate` set, a binary node whose
/// instantiated children are both numbers is folded, as is unary `-` applied to a
/// number. Template nodes that come out unchanged are reused as they are.
pub fn instantiate(
    template: &ExprRef,
    bindings: &Bindings,
    evaluate: bool,
) -> Result<ExprRef, ArithmeticError> {
    match template.as_ref() {
        Expression::Variable(name) => Ok(Arc::clone(bindings.at(name).unwrap_or(template))),
        Expression::Number(_) => Ok(Arc::clone(template)),
        Expression::BinaryOp { op, left, right } => {
            let new_left = instantiate(left, bindings, evaluate)?;
            let new_right = instantiate(right, bindings, evaluate)?;

            if evaluate {
                if let (Some(lhs), Some(rhs)) = (new_left.as_number(), new_right.as_number()) {
                    return lhs.apply_binary(*op, rhs).map(build::number);
                }
            }

            if Arc::ptr_eq(&new_left, left) && Arc::ptr_eq(&new_right, right) {
                return Ok(Arc::clone(template));
            }

            Ok(build::binary(*op, new_left, new_right))
        }
        Expression::UnaryOp { op, operand } => {
            let new_operand = instantiate(operand, bindings, evaluate)?;

            if evaluate && op == Expression::NEGATION {
                if let Some(value) = new_operand.as_number() {
                    return value.negate().map(build::number);
                }
            }

            if Arc::ptr_eq(&new_operand, operand) {
                return Ok(Arc::clone(template));
            }

            Ok(build::unary(op.as_str(), new_operand))
        }
    }
}
