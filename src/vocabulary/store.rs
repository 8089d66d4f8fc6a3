use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use super::{Collection, VocabularyLookup};
use crate::error::{DrsGuardError, Result};

/// Controlled-vocabulary store backed by a local directory of JSON term
/// lists, one file per collection: `<dir>/<authority>/<collection>.json`.
pub struct JsonVocabularyStore {
    dir: PathBuf,
}

/// On-disk shape of one collection file. Exactly one of `terms` and
/// `term_pattern` must be present.
#[derive(Deserialize)]
struct CollectionFile {
    #[serde(default)]
    terms: Option<Vec<String>>,
    #[serde(default)]
    term_pattern: Option<String>,
}

impl JsonVocabularyStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn collection_path(&self, authority: &str, collection: &str) -> PathBuf {
        self.dir.join(authority).join(format!("{collection}.json"))
    }
}

impl VocabularyLookup for JsonVocabularyStore {
    fn lookup(&self, authority: &str, collection: &str) -> Result<Collection> {
        let path = self.collection_path(authority, collection);
        let content = fs::read_to_string(&path).map_err(|e| {
            DrsGuardError::VocabularyUnavailable {
                authority: authority.to_string(),
                collection: collection.to_string(),
                source: Some(e),
            }
        })?;

        let file: CollectionFile =
            serde_json::from_str(&content).map_err(|e| DrsGuardError::JsonParse {
                path: path.clone(),
                source: e,
            })?;

        match (file.terms, file.term_pattern) {
            (Some(terms), None) => Collection::enumerated(collection, terms),
            (None, Some(pattern)) => Collection::pattern(collection, &pattern),
            _ => Err(DrsGuardError::Config(format!(
                "collection file {} must define exactly one of `terms` or `term_pattern`",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
