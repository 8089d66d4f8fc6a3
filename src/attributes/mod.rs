mod sidecar;

pub use sidecar::{SidecarReader, SidecarSource};

use std::path::Path;

use crate::error::{DrsGuardError, Result};

/// Static mapping from collection name to the global-attribute name carrying
/// the same value inside a data file. `member-id` maps to the variant
/// identifier; everything else swaps hyphens for underscores.
const ATTRIBUTE_MAP: &[(&str, &str)] = &[
    ("activity-id", "activity_id"),
    ("institution-id", "institution_id"),
    ("source-id", "source_id"),
    ("experiment-id", "experiment_id"),
    ("member-id", "variant_id"),
    ("variable-id", "variable_id"),
    ("table-id", "table_id"),
    ("grid-label", "grid_label"),
];

#[must_use]
pub fn attribute_name(collection: &str) -> Option<&'static str> {
    ATTRIBUTE_MAP
        .iter()
        .find(|(name, _)| *name == collection)
        .map(|(_, attr)| *attr)
}

/// Validate at setup time that every named collection has an attribute
/// mapping, so unknown collections fail fast rather than at first use.
///
/// # Errors
/// Returns `UnmappedCollection` naming the first unmapped collection.
pub fn require_mappings<'a>(collections: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for collection in collections {
        if attribute_name(collection).is_none() {
            return Err(DrsGuardError::UnmappedCollection(collection.to_string()));
        }
    }
    Ok(())
}

/// Opens data files and exposes their named metadata attributes.
///
/// The binary format behind a source is not this crate's concern; anything
/// that can produce named string attributes per file can implement this.
pub trait AttributeReader {
    type Source: AttributeSource;

    /// Open the attribute source for one data file. The source is released
    /// when dropped, on every exit path.
    ///
    /// # Errors
    /// Returns an error if the file's metadata cannot be read.
    fn open(&self, path: &Path) -> Result<Self::Source>;
}

/// Read-only view of one file's named attributes.
pub trait AttributeSource {
    fn get(&self, name: &str) -> Option<&str>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
