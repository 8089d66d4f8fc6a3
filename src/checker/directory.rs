use std::path::Path;

use crate::attributes::{attribute_name, require_mappings, AttributeReader, AttributeSource};
use crate::error::Result;
use crate::scanner::StructuredDataset;
use crate::template::Template;
use crate::vocabulary::VocabularySet;

use super::outcome::CheckOutcome;
use super::DIRECTORY_CHECK;

/// Collection binding for the directory template, in path-segment order
/// below the mip-era root.
pub const DIRECTORY_COLLECTIONS: &[&str] = &[
    "activity-id",
    "institution-id",
    "source-id",
    "experiment-id",
    "member-id",
];

/// Validates each file's directory path against the directory template and
/// cross-checks every parsed segment value against the matching attribute
/// read from the file itself.
pub struct DirectoryChecker<R: AttributeReader> {
    template: Template,
    reader: R,
}

impl<R: AttributeReader> DirectoryChecker<R> {
    /// Compile the directory template for datasets rooted at `mip_era` and
    /// validate the collection-to-attribute mapping. Done once per run.
    ///
    /// # Errors
    /// Fails if a required collection is missing from `vocab`, the binding
    /// is invalid, or a bound collection has no attribute mapping.
    pub fn new(vocab: &VocabularySet, reader: R, mip_era: &str) -> Result<Self> {
        require_mappings(DIRECTORY_COLLECTIONS.iter().copied())?;

        let collections = DIRECTORY_COLLECTIONS
            .iter()
            .map(|name| vocab.require(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        let template_str = format!("{mip_era}/{{}}/{{}}/{{}}/{{}}/{{}}");
        let template = Template::compile(&template_str, collections)?;
        Ok(Self { template, reader })
    }

    /// Check one file. Returns the messages accumulated for it; the file
    /// counts as a success iff the list is empty.
    ///
    /// A parse failure ends the file's check; a missing or mismatched
    /// attribute records a message and moves on to the next collection.
    fn check_file(&self, dataset: &StructuredDataset, path: &Path) -> Vec<String> {
        let display = path.display();

        let Some(subpath) = dataset.relative_dir(path) else {
            return vec![format!("{display} is not under the dataset root")];
        };

        let parsed = match self.template.parse(&subpath) {
            Ok(parsed) => parsed,
            Err(e) => {
                return vec![format!("{subpath} is not a valid DRS hierarchy ({e})")];
            }
        };

        let source = match self.reader.open(path) {
            Ok(source) => source,
            Err(e) => {
                return vec![format!("Cannot read attributes of {display}: {e}")];
            }
        };

        let mut messages = Vec::new();
        for (collection, path_value) in &parsed {
            // Mappings were validated at setup; an unmapped collection
            // cannot reach this point.
            let Some(attr) = attribute_name(collection) else {
                continue;
            };
            match source.get(attr) {
                None => {
                    messages.push(format!("Attribute {attr} not found in {display}"));
                }
                Some(file_value) if file_value != path_value.as_str() => {
                    messages.push(format!(
                        "DRS inconsistent with file contents: {file_value} != {path_value} ({attr})"
                    ));
                }
                Some(_) => {}
            }
        }
        messages
    }

    /// Check every file of `dataset` in enumeration order. One bad file
    /// never aborts the batch.
    #[must_use]
    pub fn check_all(&self, dataset: &StructuredDataset) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(DIRECTORY_CHECK);
        for path in dataset.file_paths() {
            let messages = self.check_file(dataset, path);
            if messages.is_empty() {
                outcome.record_success();
            } else {
                outcome.record_failures(messages);
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
