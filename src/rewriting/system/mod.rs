//! Rule sets and the searches run over them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::language::expression::ExprRef;
use crate::rewriting::{
    applier::RuleApplier,
    proof::ProofTrace,
    random::{WalkConfig, random_walk, random_walk_seeded, walk_batch},
    rule::Rule,
    sequential::sequential_pass,
};

pub mod library;

/// The built-in rule sets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum RuleSetKind {
    /// Commutativity, associativity, distributivity and identities
    #[default]
    Basic,
    /// The basic rules plus factoring, regrouping and zero/one laws, both ways
    Inverses,
    /// Negation, inverses, literal rewrites and constant evaluation
    Evaluating,
    /// Constant evaluation, like-term collection, zero products and `pow` splitting
    Simplification,
    /// Every built-in rule
    All,
}

/// An ordered, read-only collection of rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRewritingSystem {
    rules: Vec<Rule>,
}

impl TermRewritingSystem {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn from_kind(kind: RuleSetKind) -> Self {
        match kind {
            RuleSetKind::Basic => Self::basic_algebra(),
            RuleSetKind::Inverses => Self::with_inverses(),
            RuleSetKind::Evaluating => Self::evaluating(),
            RuleSetKind::Simplification => Self::simplification(),
            RuleSetKind::All => Self::all(),
        }
    }

    pub fn basic_algebra() -> Self {
        Self::new(library::basic_algebra())
    }

    pub fn with_inverses() -> Self {
        let mut rules = library::basic_algebra();
        rules.extend(library::inverses());
        Self::new(rules)
    }

    pub fn evaluating() -> Self {
        Self::new(library::evaluating())
    }

    /// The evaluation rules of [`library::evaluating`] followed by
    /// [`library::simplification`], in the order a single pass should try them.
    pub fn simplification() -> Self {
        let mut rules: Vec<Rule> = library::evaluating()
            .into_iter()
            .filter(Rule::evaluate)
            .collect();
        rules.extend(library::simplification());
        Self::new(rules)
    }

    pub fn all() -> Self {
        let mut rules = library::basic_algebra();
        rules.extend(library::inverses());
        rules.extend(library::evaluating());
        rules.extend(library::simplification());
        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn random_walk<R: Rng + ?Sized>(
        &self,
        start: ExprRef,
        config: &WalkConfig,
        rng: &mut R,
    ) -> ProofTrace {
        random_walk(&self.rules, start, config, rng)
    }

    pub fn random_walk_seeded(&self, start: ExprRef, config: &WalkConfig, seed: u64) -> ProofTrace {
        random_walk_seeded(&self.rules, start, config, seed)
    }

    pub fn walk_batch(&self, starts: &[ExprRef], config: &WalkConfig, seed: u64) -> Vec<ProofTrace> {
        walk_batch(&self.rules, starts, config, seed)
    }

    pub fn sequential_pass(&self, start: ExprRef, applier: &RuleApplier) -> ProofTrace {
        sequential_pass(&self.rules, start, applier)
    }
}
