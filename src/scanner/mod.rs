use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{DrsGuardError, Result};

/// A dataset rooted at one directory: the canonical root plus every data
/// file below it with the recognized extension, in a stable depth-first,
/// lexically sorted order.
#[derive(Debug, Clone)]
pub struct StructuredDataset {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl StructuredDataset {
    /// Recursively discover the data files under `root`.
    ///
    /// # Errors
    /// Fails if `root` is not a directory, cannot be canonicalized, or an
    /// exclude pattern is not a valid glob.
    pub fn discover(root: &Path, extension: &str, exclude: &[String]) -> Result<Self> {
        if !root.is_dir() {
            return Err(DrsGuardError::NotADirectory(root.to_path_buf()));
        }
        let root = root.canonicalize()?;
        let excludes = build_globset(exclude)?;

        let files = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .filter(|p| !excludes.is_match(p))
            .collect();

        Ok(Self { root, files })
    }

    /// Canonical root used for relative-path computation.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute file paths in enumeration order.
    #[must_use]
    pub fn file_paths(&self) -> &[PathBuf] {
        &self.files
    }

    /// The directory portion of `path` relative to the dataset root, with
    /// forward-slash separators. `None` when `path` is not under the root.
    #[must_use]
    pub fn relative_dir(&self, path: &Path) -> Option<String> {
        let parent = path.parent()?;
        let relative = parent.strip_prefix(&self.root).ok()?;
        let mut out = String::new();
        for component in relative.components() {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&component.as_os_str().to_string_lossy());
        }
        Some(out)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| DrsGuardError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| DrsGuardError::InvalidGlob {
            pattern: patterns.join(", "),
            source: e,
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
