//! Pattern matching of rule left-hand sides against concrete expressions.
//!
//! A pattern is an ordinary [`Expression`] whose `Variable` nodes are capture slots.
//! Matching walks pattern and candidate in lockstep and records what every slot
//! captured in a [`Bindings`] scope.

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::language::expression::{ExprRef, Expression};

/// Captures produced by one match attempt.
///
/// A scope belongs to a single top-level attempt. Failed attempts leave partial
/// captures behind, so callers start every attempt with a fresh scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    substitutions: HashMap<String, ExprRef>,
}

impl Bindings {
    /// Gets the subtree captured by a pattern variable.
    pub fn at(&self, variable: &str) -> Option<&ExprRef> {
        self.substitutions.get(variable)
    }

    pub fn set(&mut self, variable: &str, expression: ExprRef) {
        self.substitutions.insert(variable.to_owned(), expression);
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExprRef)> {
        self.substitutions
            .iter()
            .map(|(name, expression)| (name.as_str(), expression))
    }
}

/// How a pattern variable that occurs more than once is constrained.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum NonLinearCheck {
    /// A repeated variable re-matches the candidate against the subtree it captured
    /// first, using that subtree as a pattern in an empty scope.
    Rematch,
    /// Like `Rematch`, and a binary pattern `x op x` additionally requires both
    /// candidate children to be structurally equal.
    #[default]
    EqualityShortcut,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matcher {
    pub non_linear: NonLinearCheck,
    /// Log every attempt and capture at `trace` level.
    pub trace: bool,
}

impl Matcher {
    pub fn new(non_linear: NonLinearCheck) -> Self {
        Self {
            non_linear,
            trace: false,
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Matches `pattern` against `candidate` in a fresh scope.
    pub fn match_pattern(&self, candidate: &ExprRef, pattern: &Expression) -> Option<Bindings> {
        let mut bindings = Bindings::default();
        self.try_match(candidate, pattern, &mut bindings)
            .then_some(bindings)
    }

    /// Tries to match `pattern` against `candidate`, extending `bindings` with new
    /// captures. Returns `false` on a mismatch; captures made before the mismatch
    /// are not rolled back.
    pub fn try_match(
        &self,
        candidate: &ExprRef,
        pattern: &Expression,
        bindings: &mut Bindings,
    ) -> bool {
        if self.trace {
            trace!("matching {candidate} against {pattern}");
        }

        match pattern {
            Expression::Variable(name) => {
                if let Some(bound) = bindings.at(name) {
                    return self.try_match(candidate, bound, &mut Bindings::default());
                }
                if self.trace {
                    trace!("bound {name} to {candidate}");
                }
                bindings.set(name, Arc::clone(candidate));
                true
            }
            Expression::Number(value) => candidate.as_number() == Some(*value),
            Expression::BinaryOp { op, left, right } => {
                let Expression::BinaryOp {
                    op: candidate_op,
                    left: candidate_left,
                    right: candidate_right,
                } = candidate.as_ref()
                else {
                    return false;
                };

                if op != candidate_op {
                    return false;
                }

                if self.non_linear == NonLinearCheck::EqualityShortcut
                    && same_variable(left, right)
                {
                    return self.try_match(candidate_left, left, bindings)
                        && candidate_left == candidate_right;
                }

                self.try_match(candidate_left, left, bindings)
                    && self.try_match(candidate_right, right, bindings)
            }
            Expression::UnaryOp { op, operand } => match candidate.as_ref() {
                Expression::UnaryOp {
                    op: candidate_op,
                    operand: candidate_operand,
                } if candidate_op == op => self.try_match(candidate_operand, operand, bindings),
                _ => false,
            },
        }
    }
}

fn same_variable(left: &Expression, right: &Expression) -> bool {
    matches!(
        (left, right),
        (Expression::Variable(a), Expression::Variable(b)) if a == b
    )
}
