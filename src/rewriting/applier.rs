//! Where in a tree a rule is tried.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ArithmeticError;
use crate::language::expression::{ExprRef, Expression, build};
use crate::rewriting::{matching::Matcher, rule::Rule};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ApplicationStrategy {
    /// Only the root of the expression is rewritten.
    #[default]
    RootOnly,
    /// The root is tried first; failing that, every child is rewritten independently.
    Recursive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleApplier {
    pub strategy: ApplicationStrategy,
    pub matcher: Matcher,
}

impl RuleApplier {
    pub fn new(strategy: ApplicationStrategy) -> Self {
        Self {
            strategy,
            matcher: Matcher::default(),
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Applies `rule` to `expression` according to the strategy.
    ///
    /// Returns `Ok(None)` if nothing was rewritten.
    pub fn apply(
        &self,
        rule: &Rule,
        expression: &ExprRef,
    ) -> Result<Option<ExprRef>, ArithmeticError> {
        match self.strategy {
            ApplicationStrategy::RootOnly => rule.apply_at_root(expression, &self.matcher),
            ApplicationStrategy::Recursive => self.apply_recursive(rule, expression),
        }
    }

    // A root rewrite that reproduces its input is not progress, so descent continues.
    fn apply_recursive(
        &self,
        rule: &Rule,
        expression: &ExprRef,
    ) -> Result<Option<ExprRef>, ArithmeticError> {
        if let Some(rewritten) = rule.apply_at_root(expression, &self.matcher)? {
            if rewritten != *expression {
                return Ok(Some(rewritten));
            }
        }

        match expression.as_ref() {
            Expression::Number(_) | Expression::Variable(_) => Ok(None),
            Expression::BinaryOp { op, left, right } => {
                let new_left = self.apply_recursive(rule, left)?;
                let new_right = self.apply_recursive(rule, right)?;

                if new_left.is_none() && new_right.is_none() {
                    return Ok(None);
                }

                Ok(Some(build::binary(
                    *op,
                    new_left.unwrap_or_else(|| Arc::clone(left)),
                    new_right.unwrap_or_else(|| Arc::clone(right)),
                )))
            }
            Expression::UnaryOp { op, operand } => Ok(self
                .apply_recursive(rule, operand)?
                .map(|operand| build::unary(op.as_str(), operand))),
        }
    }
}
