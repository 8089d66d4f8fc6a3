use indexmap::IndexMap;
use serde::Serialize;

/// Score and diagnostics for one logical check: (successes, attempts) plus
/// the ordered diagnostic messages accumulated across files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    name: String,
    successes: usize,
    attempts: usize,
    messages: Vec<String>,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            successes: 0,
            attempts: 0,
            messages: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.attempts += 1;
        self.successes += 1;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.attempts += 1;
        self.messages.push(message.into());
    }

    /// One failed attempt carrying every message accumulated for the file.
    pub fn record_failures<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.attempts += 1;
        self.messages.extend(messages);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn successes(&self) -> usize {
        self.successes
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// A check with zero attempts is "not applicable", never a failure.
    #[must_use]
    pub const fn is_applicable(&self) -> bool {
        self.attempts > 0
    }

    #[must_use]
    pub const fn passed(&self) -> bool {
        self.successes == self.attempts
    }
}

/// Aggregated outcomes keyed by check name, insertion-ordered.
///
/// `merge` sums counts and concatenates messages for outcomes sharing a
/// name, so combining is associative and order-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    checks: IndexMap<String, CheckOutcome>,
}

impl Report {
    pub fn merge(&mut self, outcome: CheckOutcome) {
        match self.checks.get_mut(outcome.name()) {
            Some(existing) => {
                existing.successes += outcome.successes;
                existing.attempts += outcome.attempts;
                existing.messages.extend(outcome.messages);
            }
            None => {
                self.checks.insert(outcome.name.clone(), outcome);
            }
        }
    }

    /// Fold many outcomes into one report.
    #[must_use]
    pub fn combine<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = CheckOutcome>,
    {
        let mut report = Self::default();
        for outcome in outcomes {
            report.merge(outcome);
        }
        report
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.values()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CheckOutcome> {
        self.checks.get(name)
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.checks.values().any(|o| !o.passed())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
