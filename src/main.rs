use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};

use proofgen::generation::{RandomGenerationConfig, generate_random_expressions};
use proofgen::language::expression::build::{add, mul, num, unary, var};
use proofgen::report::{
    CsvFormatter, OutputFormat, PlainFormatter, PrettyFormatter, RuleRow, StepRow,
};
use proofgen::{
    ApplicationStrategy, ExprRef, Matcher, NonLinearCheck, ProofTrace, RuleApplier,
    RuleSetKind, TermRewritingSystem, WalkConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate rewrite proofs for arithmetic expressions", long_about = None)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Random-walk proofs from generated or built-in start expressions
    Walk(WalkArgs),
    /// Deterministic single-pass proofs of the built-in expressions (try `--rules simplification`)
    Pass(PassArgs),
    /// List the rules of a rule set
    Rules {
        #[arg(short, long, value_enum, default_value_t = RuleSetKind::Basic)]
        rules: RuleSetKind,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Args, Debug)]
struct ApplierArgs {
    #[arg(short, long, value_enum, default_value_t = RuleSetKind::Basic)]
    rules: RuleSetKind,

    #[arg(long, value_enum, default_value_t = ApplicationStrategy::Recursive)]
    strategy: ApplicationStrategy,

    #[arg(long, value_enum, default_value_t = NonLinearCheck::EqualityShortcut)]
    non_linear: NonLinearCheck,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct WalkArgs {
    #[command(flatten)]
    applier: ApplierArgs,

    /// Maximum number of rewrites per proof
    #[arg(short, long, default_value_t = 5)]
    steps: usize,

    /// Seed for expression generation and rule selection; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random start expressions
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// Maximum depth of random start expressions
    #[arg(short, long, default_value_t = 3)]
    depth: usize,

    /// Use the built-in demo expressions instead of random ones
    #[arg(long)]
    demo: bool,
}

#[derive(Args, Debug)]
struct PassArgs {
    #[command(flatten)]
    applier: ApplierArgs,
}

impl ApplierArgs {
    fn rule_applier(&self, trace: bool) -> RuleApplier {
        RuleApplier::new(self.strategy)
            .with_matcher(Matcher::new(self.non_linear).with_trace(trace))
    }
}

fn demo_expressions() -> Vec<ExprRef> {
    vec![
        mul(add(var("a"), var("a")), num(4)),
        mul(add(var("a"), var("a")), var("a")),
        mul(num(2), mul(num(3), var("x"))),
        add(num(2), num(3)),
        mul(add(num(2), num(3)), num(4)),
        add(num(1), mul(num(2), num(3))),
        add(mul(var("a"), var("b")), mul(var("a"), var("c"))),
        add(var("x"), add(var("y"), var("z"))),
        add(num(2), add(num(3), num(4))),
    ]
}

fn pass_expressions() -> Vec<ExprRef> {
    let mut expressions = demo_expressions();
    expressions.extend([
        mul(unary("pow", add(num(2), num(3))), num(0)),
        unary(
            "pow",
            mul(add(var("a"), var("b")), add(var("c"), var("d"))),
        ),
        add(mul(num(3), unary("pow", mul(var("x"), var("y")))), num(7)),
        add(add(var("x"), var("x")), add(var("x"), var("x"))),
    ]);
    expressions
}

fn print_traces(traces: &[ProofTrace], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => print!("{}", PlainFormatter::format_traces(traces)),
        OutputFormat::Table => println!("{}", PrettyFormatter::format(&StepRow::from_traces(traces))),
        OutputFormat::Csv => print!("{}", CsvFormatter::format(&StepRow::from_traces(traces))?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(traces)?),
    }
    Ok(())
}

fn walk(args: &WalkArgs, verbose: u8) -> Result<()> {
    let trs = TermRewritingSystem::from_kind(args.applier.rules);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("walking with seed {seed}");

    let starts = if args.demo {
        demo_expressions()
    } else {
        let config = RandomGenerationConfig::default().with_max_depth(args.depth);
        generate_random_expressions(&config, args.count, &mut StdRng::seed_from_u64(seed))
    };

    let config = WalkConfig::new(args.steps)
        .with_applier(args.applier.rule_applier(verbose >= 3))
        .with_log_steps(verbose >= 1);

    let traces = trs.walk_batch(&starts, &config, seed);
    print_traces(&traces, args.applier.format)
}

fn pass(args: &PassArgs, verbose: u8) -> Result<()> {
    let trs = TermRewritingSystem::from_kind(args.applier.rules);
    let applier = args.applier.rule_applier(verbose >= 3);

    let traces: Vec<_> = pass_expressions()
        .into_iter()
        .map(|start| trs.sequential_pass(start, &applier))
        .collect();
    print_traces(&traces, args.applier.format)
}

fn list_rules(kind: RuleSetKind, format: OutputFormat) -> Result<()> {
    let trs = TermRewritingSystem::from_kind(kind);
    let rows: Vec<RuleRow> = trs.rules().iter().map(RuleRow::from).collect();

    match format {
        OutputFormat::Plain => {
            for row in &rows {
                let marker = if row.evaluate { " (evaluate)" } else { "" };
                println!(
                    "{}{}: {} => {}",
                    row.name.cyan(),
                    marker,
                    row.pattern,
                    row.replacement
                );
            }
        }
        OutputFormat::Table => println!("{}", PrettyFormatter::format(&rows)),
        OutputFormat::Csv => print!("{}", CsvFormatter::format(&rows)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match &cli.command {
        Command::Walk(args) => walk(args, cli.verbose),
        Command::Pass(args) => pass(args, cli.verbose),
        Command::Rules { rules, format } => list_rules(*rules, *format),
    }
}
