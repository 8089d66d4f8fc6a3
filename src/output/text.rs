use std::fmt::Write;

use crate::checker::{CheckOutcome, Report};
use crate::error::Result;

use super::OutputFormatter;

pub struct TextFormatter;

impl TextFormatter {
    fn format_outcome(outcome: &CheckOutcome, output: &mut String) {
        if outcome.is_applicable() {
            let _ = writeln!(
                output,
                "{}: {}/{}",
                outcome.name(),
                outcome.successes(),
                outcome.attempts()
            );
        } else {
            let _ = writeln!(output, "{}: not applicable", outcome.name());
        }

        for message in outcome.messages() {
            let _ = writeln!(output, "  - {message}");
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        output.push_str("=== DRS compliance report ===\n\n");

        for outcome in report.outcomes() {
            Self::format_outcome(outcome, &mut output);
        }

        let verdict = if report.has_failures() {
            "FAILED"
        } else {
            "PASSED"
        };
        let _ = write!(output, "\nResult: {verdict}\n");

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
