use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use super::{AttributeReader, AttributeSource};
use crate::error::{DrsGuardError, Result};

/// Attribute reader backed by a JSON sidecar next to each data file:
/// `<data-file>.json`, a flat object of global attributes.
///
/// Stands in for a binary header reader; the checker only needs the
/// `AttributeReader` seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarReader;

#[derive(Debug)]
pub struct SidecarSource {
    attributes: IndexMap<String, String>,
}

impl SidecarReader {
    fn sidecar_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".json");
        PathBuf::from(name)
    }
}

impl AttributeReader for SidecarReader {
    type Source = SidecarSource;

    fn open(&self, path: &Path) -> Result<SidecarSource> {
        let sidecar = Self::sidecar_path(path);
        let content = fs::read_to_string(&sidecar).map_err(|e| DrsGuardError::FileRead {
            path: sidecar.clone(),
            source: e,
        })?;

        let document: serde_json::Map<String, Value> =
            serde_json::from_str(&content).map_err(|e| DrsGuardError::JsonParse {
                path: sidecar,
                source: e,
            })?;

        let mut attributes = IndexMap::with_capacity(document.len());
        for (name, value) in document {
            match value {
                Value::String(s) => {
                    attributes.insert(name, s);
                }
                Value::Number(n) => {
                    attributes.insert(name, n.to_string());
                }
                Value::Bool(b) => {
                    attributes.insert(name, b.to_string());
                }
                // Nested values are not global attributes; skip them.
                Value::Null | Value::Array(_) | Value::Object(_) => {}
            }
        }

        Ok(SidecarSource { attributes })
    }
}

impl AttributeSource for SidecarSource {
    fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "sidecar_tests.rs"]
mod tests;
