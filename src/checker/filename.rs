use crate::error::Result;
use crate::scanner::StructuredDataset;
use crate::template::Template;
use crate::vocabulary::VocabularySet;

use super::outcome::CheckOutcome;
use super::FILENAME_CHECK;

/// Filename layout: variable, table, source, experiment and member
/// identifiers joined by underscores, an optional time range, and the data
/// extension.
pub const FILENAME_TEMPLATE: &str = "{}_{}_{}_{}_{}[_{}].nc";

/// Collection binding for `FILENAME_TEMPLATE`, in placeholder order.
pub const FILENAME_COLLECTIONS: &[&str] = &[
    "variable-id",
    "table-id",
    "source-id",
    "experiment-id",
    "member-id",
    "time-range",
];

/// Validates file base names against the filename template.
pub struct FilenameChecker {
    template: Template,
}

impl FilenameChecker {
    /// Compile the filename template against `vocab`. Done once per run.
    ///
    /// # Errors
    /// Fails if a required collection is missing from `vocab` or the
    /// template/collection binding is invalid.
    pub fn new(vocab: &VocabularySet) -> Result<Self> {
        let collections = FILENAME_COLLECTIONS
            .iter()
            .map(|name| vocab.require(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        let template = Template::compile(FILENAME_TEMPLATE, collections)?;
        Ok(Self { template })
    }

    /// Check one base name: one attempt, one success iff it parses. The
    /// parse failure is recorded verbatim.
    pub fn check(&self, basename: &str, outcome: &mut CheckOutcome) {
        match self.template.parse(basename) {
            Ok(_) => outcome.record_success(),
            Err(e) => outcome.record_failure(format!("{basename} is not a valid DRS filename: {e}")),
        }
    }

    /// Check every file of `dataset` in enumeration order.
    #[must_use]
    pub fn check_all(&self, dataset: &StructuredDataset) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(FILENAME_CHECK);
        for path in dataset.file_paths() {
            let basename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.check(&basename, &mut outcome);
        }
        outcome
    }
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
