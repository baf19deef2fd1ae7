//! Rendering proof traces and rule sets for the terminal.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::rewriting::{proof::ProofTrace, rule::Rule};

pub mod formatter;

pub use formatter::{CsvFormatter, Formattable, PlainFormatter, PrettyFormatter};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum OutputFormat {
    /// One `rule: expression` line per step
    #[default]
    Plain,
    /// A rounded table of all steps
    Table,
    Csv,
    Json,
}

/// One step of one proof, flattened for tabular output.
#[derive(Clone, Debug, PartialEq, Eq, Tabled, Serialize)]
pub struct StepRow {
    #[tabled(rename = "Proof")]
    pub proof: usize,
    #[tabled(rename = "Step")]
    pub step: usize,
    #[tabled(rename = "Rule")]
    pub rule: String,
    #[tabled(rename = "Expression")]
    pub expression: String,
}

impl StepRow {
    pub fn from_traces(traces: &[ProofTrace]) -> Vec<Self> {
        traces
            .iter()
            .enumerate()
            .flat_map(|(proof, trace)| {
                trace.iter().enumerate().map(move |(step, entry)| StepRow {
                    proof,
                    step,
                    rule: entry.label.clone(),
                    expression: entry.expression.to_string(),
                })
            })
            .collect()
    }
}

impl Formattable for StepRow {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.proof.to_string(),
            self.step.to_string(),
            self.rule.clone(),
            self.expression.clone(),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Proof", "Step", "Rule", "Expression"]
    }
}

fn format_evaluate(evaluate: &bool) -> String {
    String::from(if *evaluate { "yes" } else { "" })
}

#[derive(Clone, Debug, PartialEq, Eq, Tabled, Serialize)]
pub struct RuleRow {
    #[tabled(rename = "Rule")]
    pub name: String,
    #[tabled(rename = "Pattern")]
    pub pattern: String,
    #[tabled(rename = "Replacement")]
    pub replacement: String,
    #[tabled(rename = "Evaluate", display_with = "format_evaluate")]
    pub evaluate: bool,
}

impl From<&Rule> for RuleRow {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.name().to_owned(),
            pattern: rule.pattern().to_string(),
            replacement: rule.replacement().to_string(),
            evaluate: rule.evaluate(),
        }
    }
}

impl Formattable for RuleRow {
    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.pattern.clone(),
            self.replacement.clone(),
            self.evaluate.to_string(),
        ]
    }

    fn csv_headers() -> Vec<&'static str> {
        vec!["Rule", "Pattern", "Replacement", "Evaluate"]
    }
}

#[cfg(test)]
mod tests {
    use super::{RuleRow, StepRow};
    use crate::language::expression::build::{add, num, var};
    use crate::rewriting::{
        random::{WalkConfig, random_walk_seeded},
        rule::Rule,
    };

    #[test]
    fn flattens_traces() {
        let rules = vec![Rule::new("Identity of Addition", add(var("A"), num(0)), var("A"))];
        let traces = vec![
            random_walk_seeded(&rules, add(var("x"), num(0)), &WalkConfig::new(3), 0),
            random_walk_seeded(&rules, var("y"), &WalkConfig::new(3), 0),
        ];

        let rows = StepRow::from_traces(&traces);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].proof, 0);
        assert_eq!(rows[0].rule, "Initial");
        assert_eq!(rows[0].expression, "(x + 0)");
        assert_eq!(rows[1].step, 1);
        assert_eq!(rows[1].rule, "Identity of Addition");
        assert_eq!(rows[2].proof, 1);
        assert_eq!(rows[2].expression, "y");
    }

    #[test]
    fn rule_row() {
        let rule = Rule::evaluating("Evaluate Addition", add(var("A"), var("B")), add(var("A"), var("B")));
        let row = RuleRow::from(&rule);

        assert_eq!(row.pattern, "(A + B)");
        assert!(row.evaluate);
    }
}
