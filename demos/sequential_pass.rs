//! Example demonstrating a deterministic pass over the evaluating rule set.

use proofgen::language::expression::build::{add, mul, neg, num, var};
use proofgen::report::{PrettyFormatter, StepRow};
use proofgen::{ApplicationStrategy, RuleApplier, TermRewritingSystem};

fn main() {
    let trs = TermRewritingSystem::evaluating();
    let applier = RuleApplier::new(ApplicationStrategy::Recursive);

    let expressions = vec![
        add(num(2), num(3)),
        mul(add(num(2), num(3)), num(4)),
        neg(neg(var("x"))),
        add(var("y"), var("y")),
    ];

    let traces: Vec<_> = expressions
        .into_iter()
        .map(|expr| trs.sequential_pass(expr, &applier))
        .collect();

    println!("{}", PrettyFormatter::format(&StepRow::from_traces(&traces)));
}
