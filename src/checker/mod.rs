mod directory;
mod filename;
mod outcome;

pub use directory::{DirectoryChecker, DIRECTORY_COLLECTIONS};
pub use filename::{FilenameChecker, FILENAME_COLLECTIONS, FILENAME_TEMPLATE};
pub use outcome::{CheckOutcome, Report};

use crate::attributes::AttributeReader;
use crate::error::Result;
use crate::scanner::StructuredDataset;
use crate::vocabulary::{Collection, VocabularyLookup, VocabularySet};

pub const FILENAME_CHECK: &str = "filename structure";
pub const DIRECTORY_CHECK: &str = "directory structure";

/// Member identifiers: realization/initialization/physics/forcing indices.
pub const MEMBER_ID_PATTERN: &str = r"^r\d+i\d+p\d+f\d+$";

/// Optional trailing time range of a filename, e.g. `201601-210012`.
pub const TIME_RANGE_PATTERN: &str = r"^\d{4,12}-\d{4,12}$";

/// Enumerated collections fetched from the controlled-vocabulary service.
const ENUMERATED_COLLECTIONS: &[&str] = &[
    "activity-id",
    "institution-id",
    "source-id",
    "experiment-id",
    "variable-id",
    "table-id",
];

/// Build the run's vocabulary set: the enumerated collections from `lookup`
/// plus the pattern-defined member-id and time-range term classes.
///
/// # Errors
/// Any lookup failure is fatal; no partial set is returned.
pub fn setup_vocabulary(lookup: &dyn VocabularyLookup, authority: &str) -> Result<VocabularySet> {
    let mut vocab = VocabularySet::load(lookup, authority, ENUMERATED_COLLECTIONS)?;
    vocab.insert(Collection::pattern("member-id", MEMBER_ID_PATTERN)?)?;
    vocab.insert(Collection::pattern("time-range", TIME_RANGE_PATTERN)?)?;
    Ok(vocab)
}

/// Run the filename and directory checks over `dataset`, sequentially and in
/// enumeration order, and aggregate the outcomes.
///
/// # Errors
/// Only setup failures (missing collections, template definition errors)
/// are returned; per-file failures land in the report.
pub fn run_checks<R: AttributeReader>(
    dataset: &StructuredDataset,
    vocab: &VocabularySet,
    reader: R,
    mip_era: &str,
) -> Result<Report> {
    let filename_checker = FilenameChecker::new(vocab)?;
    let directory_checker = DirectoryChecker::new(vocab, reader, mip_era)?;

    let mut report = Report::default();
    report.merge(filename_checker.check_all(dataset));
    report.merge(directory_checker.check_all(dataset));
    Ok(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
