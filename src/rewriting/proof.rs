//! Labeled traces of rewrite steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::expression::ExprRef;

/// Label of the first step of every trace.
pub const INITIAL_LABEL: &str = "Initial";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Name of the rule that produced `expression`, or [`INITIAL_LABEL`]
    pub label: String,
    pub expression: ExprRef,
}

/// An ordered record of the rewrites performed by a search.
///
/// A trace always starts with the `Initial` step holding the start expression and
/// only grows while the search runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofTrace {
    steps: Vec<ProofStep>,
}

#[allow(clippy::len_without_is_empty)]
impl ProofTrace {
    pub fn new(start: ExprRef) -> Self {
        Self {
            steps: vec![ProofStep {
                label: String::from(INITIAL_LABEL),
                expression: start,
            }],
        }
    }

    pub(crate) fn push(&mut self, label: &str, expression: ExprRef) {
        self.steps.push(ProofStep {
            label: label.to_owned(),
            expression,
        });
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Number of rewrites performed.
    pub fn rewrite_count(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn initial(&self) -> &ExprRef {
        &self.steps[0].expression
    }

    /// The expression reached by the last rewrite.
    pub fn result(&self) -> &ExprRef {
        // `steps` is never empty
        &self.steps[self.steps.len() - 1].expression
    }

    /// Names of the applied rules, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().skip(1).map(|step| step.label.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }
}

impl<'t> IntoIterator for &'t ProofTrace {
    type Item = &'t ProofStep;
    type IntoIter = std::slice::Iter<'t, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ProofTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", step.label, step.expression)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{INITIAL_LABEL, ProofTrace};
    use crate::language::expression::build::{add, num, var};

    #[test]
    fn starts_with_initial_step() {
        let trace = ProofTrace::new(add(var("a"), num(0)));

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.rewrite_count(), 0);
        assert_eq!(trace.steps()[0].label, INITIAL_LABEL);
        assert_eq!(trace.initial(), trace.result());
        assert_eq!(trace.labels().count(), 0);
    }

    #[test]
    fn display() {
        let mut trace = ProofTrace::new(add(var("a"), num(0)));
        trace.push("Identity of Addition", var("a"));

        assert_eq!(trace.to_string(), "Initial: (a + 0)\nIdentity of Addition: a");
        assert_eq!(trace.result(), &var("a"));
        assert_eq!(trace.labels().collect::<Vec<_>>(), vec!["Identity of Addition"]);
    }

    #[test]
    fn trace_serialization() {
        let mut trace = ProofTrace::new(add(var("a"), num(0)));
        trace.push("Identity of Addition", var("a"));

        let serialized = serde_json::to_string(&trace).unwrap();
        let deserialized: ProofTrace = serde_json::from_str(&serialized).unwrap();
        assert_eq!(trace, deserialized);
    }
}
