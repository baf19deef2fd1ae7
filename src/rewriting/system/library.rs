//! Built-in algebraic rules.
//!
//! Pattern variables are upper-case (`A`, `B`, `C`) so they are easy to tell apart
//! from the lower-case free variables of the expressions being rewritten. `X` in
//! "Rewrite 1 as X/X" is unbound and survives into the result.

use crate::language::expression::build::{add, div, mul, neg, num, sub, unary, var};
use crate::rewriting::rule::Rule;

pub fn basic_algebra() -> Vec<Rule> {
    rules!(
        "Commutativity of Addition": add(var("A"), var("B")) => add(var("B"), var("A")),
        "Commutativity of Multiplication": mul(var("A"), var("B")) => mul(var("B"), var("A")),
        "Associativity of Addition":
            add(add(var("A"), var("B")), var("C")) => add(var("A"), add(var("B"), var("C"))),
        "Distributive Property":
            mul(var("A"), add(var("B"), var("C")))
                => add(mul(var("A"), var("B")), mul(var("A"), var("C"))),
        "Identity of Addition": add(var("A"), num(0)) => var("A"),
        "Identity of Multiplication": mul(var("A"), num(1)) => var("A"),
    )
}

/// Rules that come in forward/backward pairs.
pub fn inverses() -> Vec<Rule> {
    rules!(
        "Distribution of Multiplication over Addition (Forward)"
            <=> "Distribution of Multiplication over Addition (Backward)":
            mul(add(var("A"), var("B")), var("C"))
                => add(mul(var("A"), var("C")), mul(var("B"), var("C"))),
        "Factoring out Common Factor (Forward)" <=> "Factoring out Common Factor (Backward)":
            add(mul(var("A"), var("B")), mul(var("A"), var("C")))
                => mul(var("A"), add(var("B"), var("C"))),
        "Grouping of Addition (Forward)" <=> "Grouping of Addition (Backward)":
            add(var("A"), add(var("B"), var("C"))) => add(add(var("A"), var("B")), var("C")),
        "Distribution of Division over Addition (Forward)"
            <=> "Distribution of Division over Addition (Backward)":
            div(add(var("A"), var("B")), var("C"))
                => add(div(var("A"), var("C")), div(var("B"), var("C"))),
        "Multiplication by Zero" <=> "Multiplication by Zero (Reverse)":
            mul(var("A"), num(0)) => num(0),
        "Identity of Division" <=> "Identity of Division (Reverse)":
            div(var("A"), num(1)) => var("A"),
    )
}

pub fn evaluating() -> Vec<Rule> {
    rules!(
        "Negation": neg(var("A")) => sub(num(0), var("A")),
        "Double Negation": neg(neg(var("A"))) => var("A"),
        "Additive Inverse": add(var("A"), neg(var("A"))) => num(0),
        "Multiplicative Inverse": mul(var("A"), div(num(1), var("A"))) => num(1),
        "Rewrite 1 as X/X": num(1) => div(var("X"), var("X")),
        "Rewrite -4 as -1 * 4": num(-4) => mul(num(-1), num(4)),
        "Rewrite x + x as 2*x": add(var("x"), var("x")) => mul(num(2), var("x")),
        eval "Evaluate Addition": add(var("A"), var("B")) => add(var("A"), var("B")),
        eval "Evaluate Subtraction": sub(var("A"), var("B")) => sub(var("A"), var("B")),
        eval "Evaluate Multiplication": mul(var("A"), var("B")) => mul(var("A"), var("B")),
        eval "Evaluate Division": div(var("A"), var("B")) => div(var("A"), var("B")),
        eval "Evaluate Negation": neg(var("A")) => neg(var("A")),
    )
}

/// Simplifications for single-pass proofs: collecting repeated addends, zero
/// products and splitting a `pow` of a product.
///
/// Run after the evaluation rules, the two collection rules turn
/// `(x + x) + (x + x)` into `2 * (x + x)` and then `4 * x`.
pub fn simplification() -> Vec<Rule> {
    rules!(
        "Collect Like Terms": add(var("A"), var("A")) => mul(num(2), var("A")),
        eval "Collect Scaled Like Terms":
            mul(var("N"), add(var("A"), var("A"))) => mul(mul(var("N"), num(2)), var("A")),
        "Zero Multiplication (Left)": mul(num(0), var("A")) => num(0),
        "Zero Multiplication (Right)": mul(var("A"), num(0)) => num(0),
        "Power of Product":
            unary("pow", mul(var("A"), var("B")))
                => mul(unary("pow", var("A")), unary("pow", var("B"))),
    )
}

#[cfg(test)]
mod tests {
    use super::{basic_algebra, evaluating, inverses, simplification};
    use crate::language::expression::build::{add, div, mul, neg, num, unary, var};
    use crate::rewriting::rule::Rule;

    fn find<'r>(rules: &'r [Rule], name: &str) -> &'r Rule {
        rules
            .iter()
            .find(|rule| rule.name() == name)
            .unwrap_or_else(|| panic!("missing rule {name}"))
    }

    #[test]
    fn distributive_property() {
        let rules = basic_algebra();
        let rule = find(&rules, "Distributive Property");

        assert_eq!(
            rule.apply(&mul(var("a"), add(var("b"), var("c")))).unwrap(),
            Some(add(mul(var("a"), var("b")), mul(var("a"), var("c"))))
        );
    }

    #[test]
    fn factoring_requires_common_factor() {
        let rules = inverses();
        let rule = find(&rules, "Factoring out Common Factor (Forward)");

        assert_eq!(
            rule.apply(&add(mul(num(2), var("b")), mul(num(2), var("c"))))
                .unwrap(),
            Some(mul(num(2), add(var("b"), var("c"))))
        );
        assert_eq!(
            rule.apply(&add(mul(num(2), var("b")), mul(num(3), var("c"))))
                .unwrap(),
            None
        );
    }

    #[test]
    fn double_negation() {
        let rules = evaluating();
        let rule = find(&rules, "Double Negation");

        assert_eq!(rule.apply(&neg(neg(var("q")))).unwrap(), Some(var("q")));
        assert_eq!(rule.apply(&neg(var("q"))).unwrap(), None);
    }

    #[test]
    fn x_plus_x() {
        let rules = evaluating();
        let rule = find(&rules, "Rewrite x + x as 2*x");

        assert_eq!(
            rule.apply(&add(var("a"), var("a"))).unwrap(),
            Some(mul(num(2), var("a")))
        );
        assert_eq!(rule.apply(&add(num(3), num(4))).unwrap(), None);
        assert_eq!(
            rule.apply(&add(num(3), num(3))).unwrap(),
            Some(mul(num(2), num(3)))
        );
    }

    #[test]
    fn rewrite_one() {
        let rules = evaluating();
        let rule = find(&rules, "Rewrite 1 as X/X");

        assert_eq!(rule.apply(&num(1)).unwrap(), Some(div(var("X"), var("X"))));
    }

    #[test]
    fn evaluate_division_by_zero() {
        let rules = evaluating();
        let rule = find(&rules, "Evaluate Division");

        assert!(rule.apply(&div(num(5), num(0))).is_err());
        assert_eq!(rule.apply(&div(num(6), num(3))).unwrap(), Some(num(2)));
    }

    #[test]
    fn collect_like_terms() {
        let rules = simplification();
        let collect = find(&rules, "Collect Like Terms");
        let scaled = find(&rules, "Collect Scaled Like Terms");

        assert_eq!(
            collect.apply(&add(var("x"), var("x"))).unwrap(),
            Some(mul(num(2), var("x")))
        );
        assert_eq!(collect.apply(&add(var("x"), var("y"))).unwrap(), None);

        let doubled = add(var("x"), var("x"));
        let once = collect
            .apply(&add(doubled.clone(), doubled))
            .unwrap()
            .unwrap();
        assert_eq!(once, mul(num(2), add(var("x"), var("x"))));
        assert_eq!(scaled.apply(&once).unwrap(), Some(mul(num(4), var("x"))));
    }

    #[test]
    fn zero_multiplication() {
        let rules = simplification();
        let left = find(&rules, "Zero Multiplication (Left)");
        let right = find(&rules, "Zero Multiplication (Right)");
        let power = unary("pow", add(num(2), num(3)));

        assert_eq!(left.apply(&mul(num(0), power.clone())).unwrap(), Some(num(0)));
        assert_eq!(left.apply(&mul(power.clone(), num(0))).unwrap(), None);
        assert_eq!(right.apply(&mul(power, num(0))).unwrap(), Some(num(0)));
    }

    #[test]
    fn power_of_product() {
        let rules = simplification();
        let rule = find(&rules, "Power of Product");

        assert_eq!(
            rule.apply(&unary("pow", mul(var("x"), var("y")))).unwrap(),
            Some(mul(unary("pow", var("x")), unary("pow", var("y"))))
        );
        assert_eq!(rule.apply(&unary("pow", add(var("x"), var("y")))).unwrap(), None);
        assert_eq!(rule.apply(&unary("neg", mul(var("x"), var("y")))).unwrap(), None);
    }
}
