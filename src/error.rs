use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateDefinitionError;

/// Fatal errors. Anything here aborts the run before (or instead of) producing
/// a report; per-candidate parse failures are `template::ParseError` and are
/// folded into report messages instead.
#[derive(Error, Debug)]
pub enum DrsGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template definition error: {0}")]
    TemplateDefinition(#[from] TemplateDefinitionError),

    #[error("Vocabulary collection not available: {authority}:{collection}")]
    VocabularyUnavailable {
        authority: String,
        collection: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid term pattern for collection {collection}: {pattern}")]
    InvalidPattern {
        collection: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate term {term} in collection {collection}")]
    DuplicateTerm { collection: String, term: String },

    #[error("No attribute mapping for collection: {0}")]
    UnmappedCollection(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrsGuardError>;
