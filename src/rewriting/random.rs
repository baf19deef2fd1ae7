//! Randomized proof search.
//!
//! A random walk repeatedly picks one applicable rule uniformly at random and
//! records the rewrite. It stops after the configured number of steps, or earlier
//! once no rule applies to the current expression. Cycles are allowed; only the
//! step budget bounds the walk.

use std::sync::Arc;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::language::expression::ExprRef;
use crate::rewriting::{applier::RuleApplier, proof::ProofTrace, rule::Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Upper bound on the number of rewrites.
    pub max_steps: usize,
    pub applier: RuleApplier,
    /// Log every recorded step at `info` level instead of `debug`.
    pub log_steps: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_steps: 5,
            applier: RuleApplier::default(),
            log_steps: false,
        }
    }
}

impl WalkConfig {
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            ..Self::default()
        }
    }

    pub fn with_applier(mut self, applier: RuleApplier) -> Self {
        self.applier = applier;
        self
    }

    pub fn with_log_steps(mut self, log_steps: bool) -> Self {
        self.log_steps = log_steps;
        self
    }
}

/// Runs a random walk from `start`, drawing every random choice from `rng`.
///
/// The returned trace has between `1` and `config.max_steps + 1` entries.
pub fn random_walk<R: Rng + ?Sized>(
    rules: &[Rule],
    start: ExprRef,
    config: &WalkConfig,
    rng: &mut R,
) -> ProofTrace {
    let mut trace = ProofTrace::new(Arc::clone(&start));
    let mut current = start;
    let mut order: Vec<&Rule> = rules.iter().collect();

    for step in 0..config.max_steps {
        order.shuffle(rng);

        let candidates = applicable_rules(&order, &current, &config.applier);
        let Some((rule, rewritten)) = candidates.choose(rng) else {
            debug!("no rule applies to {current} after {step} steps");
            break;
        };

        if config.log_steps {
            info!("{}: {}", rule.name(), rewritten);
        } else {
            debug!("{}: {}", rule.name(), rewritten);
        }

        trace.push(rule.name(), Arc::clone(rewritten));
        current = Arc::clone(rewritten);
    }

    trace
}

/// Runs a random walk with a generator seeded from `seed`.
///
/// The same seed, rules, start and configuration always give the same trace.
pub fn random_walk_seeded(
    rules: &[Rule],
    start: ExprRef,
    config: &WalkConfig,
    seed: u64,
) -> ProofTrace {
    let mut rng = StdRng::seed_from_u64(seed);
    random_walk(rules, start, config, &mut rng)
}

/// Runs one independent walk per start expression in parallel.
///
/// Walk `i` is seeded with `seed + i`, so the batch is as reproducible as a single
/// seeded walk and its order follows `starts`.
pub fn walk_batch(
    rules: &[Rule],
    starts: &[ExprRef],
    config: &WalkConfig,
    seed: u64,
) -> Vec<ProofTrace> {
    starts
        .par_iter()
        .enumerate()
        .map(|(i, start)| {
            random_walk_seeded(rules, Arc::clone(start), config, seed.wrapping_add(i as u64))
        })
        .collect()
}

/// Every rule of `order` that rewrites `current`, paired with its result.
///
/// A rule whose application fails arithmetically is left out.
fn applicable_rules<'r>(
    order: &[&'r Rule],
    current: &ExprRef,
    applier: &RuleApplier,
) -> Vec<(&'r Rule, ExprRef)> {
    order
        .iter()
        .filter_map(|&rule| match applier.apply(rule, current) {
            Ok(rewritten) => rewritten.map(|rewritten| (rule, rewritten)),
            Err(err) => {
                debug!("{} is not applicable to {current}: {err}", rule.name());
                None
            }
        })
        .collect()
}
