//! Deterministic single-pass proofs.

use std::sync::Arc;

use log::debug;

use crate::language::expression::ExprRef;
use crate::rewriting::{applier::RuleApplier, proof::ProofTrace, rule::Rule};

/// Tries every rule once, in the given order, against the current expression.
///
/// A step is recorded only when a rule changes the expression. Rules that fail
/// arithmetically are skipped.
pub fn sequential_pass(rules: &[Rule], start: ExprRef, applier: &RuleApplier) -> ProofTrace {
    let mut trace = ProofTrace::new(Arc::clone(&start));
    let mut current = start;

    for rule in rules {
        match applier.apply(rule, &current) {
            Ok(Some(rewritten)) if rewritten != current => {
                debug!("{}: {}", rule.name(), rewritten);
                trace.push(rule.name(), Arc::clone(&rewritten));
                current = rewritten;
            }
            Ok(_) => {}
            Err(err) => debug!("skipping {}: {err}", rule.name()),
        }
    }

    trace
}
