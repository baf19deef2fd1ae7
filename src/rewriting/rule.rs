use serde::{Deserialize, Serialize};

use crate::error::ArithmeticError;
use crate::language::expression::ExprRef;
use crate::rewriting::{
    instantiation::instantiate,
    matching::{Bindings, Matcher},
};

/// A named rewrite `pattern => replacement`.
///
/// Rules are plain data. A rule whose pattern can never match is not rejected; it
/// simply never applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    name: String,
    pattern: ExprRef,
    replacement: ExprRef,
    /// Fold constant sub-results while instantiating the replacement.
    #[serde(default)]
    evaluate: bool,
}

impl Rule {
    pub fn new(name: impl Into<String>, pattern: ExprRef, replacement: ExprRef) -> Self {
        Self {
            name: name.into(),
            pattern,
            replacement,
            evaluate: false,
        }
    }

    /// A rule that folds constants in its instantiated replacement.
    pub fn evaluating(name: impl Into<String>, pattern: ExprRef, replacement: ExprRef) -> Self {
        Self::new(name, pattern, replacement).with_evaluate(true)
    }

    pub fn with_evaluate(mut self, evaluate: bool) -> Self {
        self.evaluate = evaluate;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &ExprRef {
        &self.pattern
    }

    pub fn replacement(&self) -> &ExprRef {
        &self.replacement
    }

    pub fn evaluate(&self) -> bool {
        self.evaluate
    }

    /// Applies the rule at the root of `expression` with the default matcher.
    ///
    /// Returns `Ok(None)` when the pattern does not match and an error only when
    /// constant folding fails.
    pub fn apply(&self, expression: &ExprRef) -> Result<Option<ExprRef>, ArithmeticError> {
        self.apply_at_root(expression, &Matcher::default())
    }

    pub fn apply_at_root(
        &self,
        expression: &ExprRef,
        matcher: &Matcher,
    ) -> Result<Option<ExprRef>, ArithmeticError> {
        match matcher.match_pattern(expression, &self.pattern) {
            Some(bindings) => self.instantiate(&bindings).map(Some),
            None => Ok(None),
        }
    }

    /// Instantiates the replacement with captures from a successful match.
    pub fn instantiate(&self, bindings: &Bindings) -> Result<ExprRef, ArithmeticError> {
        instantiate(&self.replacement, bindings, self.evaluate)
    }
}
