//! Example demonstrating random-walk proof generation.
//!
//! Rules are chosen uniformly among those that apply, so each seed gives a
//! different, reproducible proof.

use proofgen::language::expression::build::{add, mul, num, var};
use proofgen::report::PlainFormatter;
use proofgen::{ApplicationStrategy, RuleApplier, TermRewritingSystem, WalkConfig};

fn main() {
    let trs = TermRewritingSystem::basic_algebra();

    // (a + a) * 4
    let expr = mul(add(var("a"), var("a")), num(4));
    let config = WalkConfig::new(5);

    for seed in 0..3 {
        let trace = trs.random_walk_seeded(expr.clone(), &config, seed);
        println!("Seed {seed}:");
        print!("{trace}");
        println!("Path: {}\n", PlainFormatter::format_path(&trace));
    }

    // Rewriting below the root reaches subterms a root-only walk never touches
    let nested = add(num(2), add(num(3), num(0)));
    let recursive = config.with_applier(RuleApplier::new(ApplicationStrategy::Recursive));

    println!("Root only:");
    print!("{}", trs.random_walk_seeded(nested.clone(), &config, 7));
    println!("\nRecursive:");
    print!("{}", trs.random_walk_seeded(nested, &recursive, 7));
}
