//! Example generating many random proofs in parallel.

use rand::{SeedableRng, rngs::StdRng};

use proofgen::generation::{RandomGenerationConfig, generate_random_expressions};
use proofgen::report::{CsvFormatter, StepRow};
use proofgen::{ApplicationStrategy, RuleApplier, TermRewritingSystem, WalkConfig};

fn main() -> anyhow::Result<()> {
    let seed = 42;
    let mut rng = StdRng::seed_from_u64(seed);

    let generation = RandomGenerationConfig::default()
        .with_max_depth(2)
        .with_variables(["x", "y"]);
    let starts = generate_random_expressions(&generation, 10, &mut rng);

    let trs = TermRewritingSystem::all();
    let config = WalkConfig::new(4).with_applier(RuleApplier::new(ApplicationStrategy::Recursive));
    let traces = trs.walk_batch(&starts, &config, seed);

    let rewrites: usize = traces.iter().map(|trace| trace.rewrite_count()).sum();
    eprintln!("{} proofs, {rewrites} rewrites", traces.len());

    print!("{}", CsvFormatter::format(&StepRow::from_traces(&traces))?);
    Ok(())
}
