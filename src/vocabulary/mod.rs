mod store;

pub use store::JsonVocabularyStore;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;

use crate::error::{DrsGuardError, Result};

/// A named validation unit bound to one template placeholder.
///
/// Either an enumerated set of allowed term labels, or a term class defined
/// by a regular expression (any string fully matching it is a valid term).
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    kind: CollectionKind,
}

#[derive(Debug, Clone)]
pub enum CollectionKind {
    /// Unique term labels, insertion order preserved.
    Enumerated(IndexSet<String>),
    /// Anchored regular expression plus its original source text.
    Pattern { regex: Regex, source: String },
}

impl Collection {
    /// Build an enumerated collection. Duplicate term labels are rejected.
    ///
    /// # Errors
    /// Returns `DuplicateTerm` if the same label appears twice.
    pub fn enumerated<I, S>(name: &str, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for term in terms {
            let term = term.into();
            if !set.insert(term.clone()) {
                return Err(DrsGuardError::DuplicateTerm {
                    collection: name.to_string(),
                    term,
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            kind: CollectionKind::Enumerated(set),
        })
    }

    /// Build a pattern collection. The expression is anchored so that terms
    /// must match it in full.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the expression does not compile.
    pub fn pattern(name: &str, pattern: &str) -> Result<Self> {
        let trimmed = pattern.strip_prefix('^').unwrap_or(pattern);
        let trimmed = trimmed.strip_suffix('$').unwrap_or(trimmed);
        let anchored = format!("^(?:{trimmed})$");
        let regex = Regex::new(&anchored).map_err(|e| DrsGuardError::InvalidPattern {
            collection: name.to_string(),
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self {
            name: name.to_string(),
            kind: CollectionKind::Pattern {
                regex,
                source: trimmed.to_string(),
            },
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &CollectionKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self.kind, CollectionKind::Pattern { .. })
    }

    /// The raw pattern source for `Pattern` collections, `None` otherwise.
    #[must_use]
    pub fn pattern_source(&self) -> Option<&str> {
        match &self.kind {
            CollectionKind::Pattern { source, .. } => Some(source),
            CollectionKind::Enumerated(_) => None,
        }
    }

    /// Whether `value` is a valid term of this collection.
    ///
    /// Enumerated collections require exact, case-sensitive membership;
    /// pattern collections require a full match.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match &self.kind {
            CollectionKind::Enumerated(terms) => terms.contains(value),
            CollectionKind::Pattern { regex, .. } => regex.is_match(value),
        }
    }
}

/// Read-only controlled-vocabulary service keyed by collection name.
///
/// Lookup failure is fatal to the whole run: checkers must not start with a
/// partial vocabulary.
pub trait VocabularyLookup {
    /// Fetch one collection from the authority's vocabulary.
    ///
    /// # Errors
    /// Returns `VocabularyUnavailable` if the collection cannot be loaded.
    fn lookup(&self, authority: &str, collection: &str) -> Result<Collection>;
}

/// Immutable set of collections, constructed once during setup and passed by
/// reference into every checker.
#[derive(Debug, Clone, Default)]
pub struct VocabularySet {
    collections: IndexMap<String, Collection>,
}

impl VocabularySet {
    /// Build a set from already-constructed collections.
    ///
    /// # Errors
    /// Returns a `Config` error if two collections share a name.
    pub fn from_collections<I>(collections: I) -> Result<Self>
    where
        I: IntoIterator<Item = Collection>,
    {
        let mut set = Self::default();
        for collection in collections {
            set.insert(collection)?;
        }
        Ok(set)
    }

    /// Fetch the named collections from `lookup` and build a set.
    ///
    /// # Errors
    /// Propagates the first lookup failure; no partial set is returned.
    pub fn load(lookup: &dyn VocabularyLookup, authority: &str, names: &[&str]) -> Result<Self> {
        let mut set = Self::default();
        for name in names {
            set.insert(lookup.lookup(authority, name)?)?;
        }
        Ok(set)
    }

    /// # Errors
    /// Returns a `Config` error if a collection with the same name exists.
    pub fn insert(&mut self, collection: Collection) -> Result<()> {
        let name = collection.name().to_string();
        if self.collections.contains_key(&name) {
            return Err(DrsGuardError::Config(format!(
                "duplicate collection in vocabulary set: {name}"
            )));
        }
        self.collections.insert(name, collection);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Fetch a collection, failing fast when it is absent.
    ///
    /// # Errors
    /// Returns `VocabularyUnavailable` naming the missing collection.
    pub fn require(&self, name: &str) -> Result<&Collection> {
        self.collections
            .get(name)
            .ok_or_else(|| DrsGuardError::VocabularyUnavailable {
                authority: String::new(),
                collection: name.to_string(),
                source: None,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
