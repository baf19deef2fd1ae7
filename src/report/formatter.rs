use anyhow::Result;
use colored::*;
use itertools::Itertools;
use tabled::{Table, Tabled, settings::Style};

use crate::rewriting::proof::ProofTrace;

/// A row type that can be printed as a table or as CSV.
pub trait Formattable: Tabled {
    /// Convert the row to strings for CSV output
    fn to_csv_row(&self) -> Vec<String>;

    fn csv_headers() -> Vec<&'static str>;
}

/// Pretty table formatter using the tabled library
pub struct PrettyFormatter;

impl PrettyFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new(items);
        table.with(Style::rounded());

        table.to_string()
    }
}

pub struct CsvFormatter;

impl CsvFormatter {
    pub fn format<T: Formattable>(items: &[T]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(T::csv_headers())?;
        for item in items {
            writer.write_record(item.to_csv_row())?;
        }

        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Line-oriented output with highlighted rule names.
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn format_trace(trace: &ProofTrace) -> String {
        let mut buffer = format!(
            "{} {}\n",
            "Starting expression:".bold(),
            trace.initial()
        );
        buffer.push_str(&format!("{}\n", "Proof:".bold()));

        for step in trace {
            buffer.push_str(&format!("{}: {}\n", step.label.cyan(), step.expression));
        }

        buffer
    }

    pub fn format_traces(traces: &[ProofTrace]) -> String {
        traces.iter().map(Self::format_trace).join("\n")
    }

    /// The rule names of a trace on one line.
    pub fn format_path(trace: &ProofTrace) -> String {
        trace.labels().join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvFormatter, PlainFormatter, PrettyFormatter};
    use crate::language::expression::build::{add, mul, num, var};
    use crate::report::{RuleRow, StepRow};
    use crate::rewriting::{
        random::{WalkConfig, random_walk_seeded},
        rule::Rule,
    };

    fn traces() -> Vec<crate::rewriting::proof::ProofTrace> {
        let rules = vec![
            Rule::new("Identity of Addition", add(var("A"), num(0)), var("A")),
            Rule::new("Identity of Multiplication", mul(var("A"), num(1)), var("A")),
        ];
        vec![random_walk_seeded(
            &rules,
            mul(add(var("x"), num(0)), num(1)),
            &WalkConfig::new(5),
            1,
        )]
    }

    #[test]
    fn csv_output() {
        let rows = StepRow::from_traces(&traces());
        let csv = CsvFormatter::format(&rows).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "Proof,Step,Rule,Expression");
        assert_eq!(lines[1], "0,0,Initial,((x + 0) * 1)");
        assert_eq!(lines[2], "0,1,Identity of Multiplication,(x + 0)");
        assert_eq!(lines[3], "0,2,Identity of Addition,x");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn table_output() {
        colored::control::set_override(false);
        let rows = StepRow::from_traces(&traces());
        let table = PrettyFormatter::format(&rows);

        assert!(table.contains("Identity of Multiplication"));
        assert!(table.contains("((x + 0) * 1)"));
        assert!(PrettyFormatter::format::<RuleRow>(&[]).is_empty());
    }

    #[test]
    fn plain_output() {
        colored::control::set_override(false);
        let traces = traces();

        let plain = PlainFormatter::format_traces(&traces);
        assert!(plain.starts_with("Starting expression: ((x + 0) * 1)\n"));
        assert!(plain.contains("Identity of Addition: x\n"));
        assert_eq!(
            PlainFormatter::format_path(&traces[0]),
            "Identity of Multiplication -> Identity of Addition"
        );
    }
}
