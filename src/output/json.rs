use serde::Serialize;

use crate::checker::{CheckOutcome, Report};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    checks: Vec<CheckEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    successes: usize,
    attempts: usize,
    passed: bool,
}

#[derive(Serialize)]
struct CheckEntry<'a> {
    name: &'a str,
    successes: usize,
    attempts: usize,
    applicable: bool,
    messages: &'a [String],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let (successes, attempts) = report
            .outcomes()
            .fold((0, 0), |(s, a), o| (s + o.successes(), a + o.attempts()));

        let output = JsonOutput {
            summary: Summary {
                successes,
                attempts,
                passed: !report.has_failures(),
            },
            checks: report.outcomes().map(convert_outcome).collect(),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

fn convert_outcome(outcome: &CheckOutcome) -> CheckEntry<'_> {
    CheckEntry {
        name: outcome.name(),
        successes: outcome.successes(),
        attempts: outcome.attempts(),
        applicable: outcome.is_applicable(),
        messages: outcome.messages(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
