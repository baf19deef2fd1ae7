//! Random start expressions for proof search.

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::language::expression::{
    BinaryOperator, ExprRef,
    build::{binary, neg, num, var},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomGenerationConfig {
    /// Maximum number of operator levels above the leaves.
    pub max_depth: usize,
    /// Chance of stopping at a leaf before `max_depth` is reached.
    pub leaf_probability: f64,
    /// Inclusive range of generated numbers.
    pub number_range: (i64, i64),
    /// Names to draw variables from. Empty means numbers only.
    pub variables: Vec<String>,
    pub operators: Vec<BinaryOperator>,
    /// Chance of an internal node being a unary negation.
    pub negation_probability: f64,
}

impl Default for RandomGenerationConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            leaf_probability: 0.5,
            number_range: (1, 10),
            variables: ('a'..='z').map(String::from).collect(),
            operators: BinaryOperator::ALL.to_vec(),
            negation_probability: 0.0,
        }
    }
}

impl RandomGenerationConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_variables<S: Into<String>>(mut self, variables: impl IntoIterator<Item = S>) -> Self {
        self.variables = variables.into_iter().map(Into::into).collect();
        self
    }
}

pub fn generate_random_expression(config: &RandomGenerationConfig, rng: &mut impl Rng) -> ExprRef {
    generate_random_expression_recursive(config, config.max_depth, rng)
}

pub fn generate_random_expressions(
    config: &RandomGenerationConfig,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<ExprRef> {
    (0..count)
        .map(|_| generate_random_expression(config, rng))
        .collect()
}

fn generate_random_expression_recursive(
    config: &RandomGenerationConfig,
    depth: usize,
    rng: &mut impl Rng,
) -> ExprRef {
    if depth == 0 || rng.gen_bool(probability(config.leaf_probability)) {
        return generate_random_leaf(config, rng);
    }

    if rng.gen_bool(probability(config.negation_probability)) {
        return neg(generate_random_expression_recursive(config, depth - 1, rng));
    }

    let Some(&op) = config.operators.choose(rng) else {
        return generate_random_leaf(config, rng);
    };

    let left = generate_random_expression_recursive(config, depth - 1, rng);
    let right = generate_random_expression_recursive(config, depth - 1, rng);
    binary(op, left, right)
}

// NaN counts as never.
fn probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

fn generate_random_leaf(config: &RandomGenerationConfig, rng: &mut impl Rng) -> ExprRef {
    let (low, high) = config.number_range;

    match config.variables.choose(rng) {
        Some(name) if rng.gen_bool(0.5) => var(name.as_str()),
        _ => num(rng.gen_range(low.min(high)..=high.max(low))),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{RandomGenerationConfig, generate_random_expression, generate_random_expressions};
    use crate::language::expression::{BinaryOperator, Expression};

    #[test]
    fn respects_depth() {
        let mut rng = StdRng::seed_from_u64(11);

        for max_depth in 0..6 {
            let config = RandomGenerationConfig::default().with_max_depth(max_depth);
            for _ in 0..20 {
                let expr = generate_random_expression(&config, &mut rng);
                assert!(expr.depth() <= max_depth + 1);
            }
        }
    }

    #[test]
    fn leaves_come_from_config() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = RandomGenerationConfig {
            leaf_probability: 0.0,
            number_range: (2, 4),
            operators: vec![BinaryOperator::Mul],
            ..RandomGenerationConfig::default().with_variables(["p", "q"])
        };

        let expr = generate_random_expression(&config, &mut rng);
        assert_eq!(expr.depth(), config.max_depth + 1);
        assert!(expr.variables().iter().all(|name| ["p", "q"].contains(name)));
        assert_all_leaves(&expr, &|leaf| match leaf {
            Expression::Number(number) => {
                let value = number.to_integer().unwrap();
                (2..=4).contains(&value)
            }
            Expression::Variable(_) => true,
            _ => false,
        });
    }

    fn assert_all_leaves(expr: &Expression, check: &dyn Fn(&Expression) -> bool) {
        match expr {
            Expression::BinaryOp { op, left, right } => {
                assert_eq!(*op, BinaryOperator::Mul);
                assert_all_leaves(left, check);
                assert_all_leaves(right, check);
            }
            Expression::UnaryOp { operand, .. } => assert_all_leaves(operand, check),
            leaf => assert!(check(leaf)),
        }
    }

    #[test]
    fn negation_only() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = RandomGenerationConfig {
            leaf_probability: 0.0,
            negation_probability: 1.0,
            max_depth: 2,
            ..RandomGenerationConfig::default()
        };

        let expr = generate_random_expression(&config, &mut rng);
        assert!(matches!(expr.as_ref(), Expression::UnaryOp { op, .. } if op == "-"));
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn nan_probabilities_never_fire() {
        let mut rng = StdRng::seed_from_u64(13);
        let config = RandomGenerationConfig {
            leaf_probability: f64::NAN,
            negation_probability: f64::NAN,
            max_depth: 3,
            ..RandomGenerationConfig::default()
        };

        for _ in 0..10 {
            let expr = generate_random_expression(&config, &mut rng);
            assert_eq!(expr.depth(), 4);
            assert!(!matches!(expr.as_ref(), Expression::UnaryOp { .. }));
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = RandomGenerationConfig::default();
        let first = generate_random_expressions(&config, 5, &mut StdRng::seed_from_u64(8));
        let second = generate_random_expressions(&config, 5, &mut StdRng::seed_from_u64(8));
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
