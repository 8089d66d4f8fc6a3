use indexmap::IndexMap;
use thiserror::Error;

use crate::vocabulary::Collection;

/// Ordered mapping from collection name to the matched segment value.
pub type ParsedValues = IndexMap<String, String>;

/// Setup-time template errors. Always fatal: a checker must not start with a
/// malformed template/collection binding.
#[derive(Error, Debug)]
pub enum TemplateDefinitionError {
    #[error("template binds {placeholders} placeholder(s) to {collections} collection(s)")]
    PlaceholderCountMismatch {
        placeholders: usize,
        collections: usize,
    },

    #[error("duplicate collection bound to template: {0}")]
    DuplicateCollection(String),

    #[error("template contains no placeholders")]
    NoPlaceholders,

    #[error("placeholders must be joined by a single shared separator, found {found:?} after {separator:?}")]
    MixedSeparators { separator: char, found: String },

    #[error("optional group must use the template separator and trail all other placeholders")]
    MalformedOptionalGroup,

    #[error("pattern of collection {collection} may match the separator {separator:?}")]
    AmbiguousSeparator {
        collection: String,
        separator: char,
    },

    #[error("malformed template: {0}")]
    Malformed(String),
}

/// Per-candidate parse failures. Recoverable: callers fold these into
/// diagnostic messages and continue with the next candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} segment(s) (trailing segment optional: {optional}), found {found}")]
    SegmentCount {
        expected: usize,
        optional: bool,
        found: usize,
    },

    #[error("expected literal {literal:?} is missing")]
    LiteralMismatch { literal: String },

    #[error("{value:?} is not a term of collection {collection}")]
    TermNotFound { collection: String, value: String },

    #[error("{value:?} does not match pattern {pattern:?} of collection {collection}")]
    PatternMismatch {
        collection: String,
        value: String,
        pattern: String,
    },
}

/// A compiled path/filename template: an optional literal prefix, `{}`
/// placeholders joined by one separator character, an optional trailing
/// placeholder written `[<sep>{}]`, and an optional literal suffix.
///
/// Compiled once per checker run and reused for every candidate; `parse` is a
/// pure function of the compiled state, so a `Template` can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Template {
    prefix: String,
    separator: char,
    suffix: String,
    has_optional: bool,
    collections: Vec<Collection>,
}

impl Template {
    /// Compile `template` and bind its placeholders, in order, to
    /// `collections`.
    ///
    /// # Errors
    /// Fails when the placeholder count and collection count differ, when two
    /// collections share a name, when the inter-placeholder separators are
    /// not all the same single character, or when a pattern collection could
    /// itself match the separator (an ambiguous split).
    pub fn compile(
        template: &str,
        collections: Vec<Collection>,
    ) -> Result<Self, TemplateDefinitionError> {
        let shape = TemplateShape::scan(template)?;

        if shape.placeholders != collections.len() {
            return Err(TemplateDefinitionError::PlaceholderCountMismatch {
                placeholders: shape.placeholders,
                collections: collections.len(),
            });
        }

        let mut seen = indexmap::IndexSet::new();
        for collection in &collections {
            if !seen.insert(collection.name().to_string()) {
                return Err(TemplateDefinitionError::DuplicateCollection(
                    collection.name().to_string(),
                ));
            }
        }

        for collection in &collections {
            if let Some(source) = collection.pattern_source()
                && pattern_can_match_char(source, shape.separator)
            {
                return Err(TemplateDefinitionError::AmbiguousSeparator {
                    collection: collection.name().to_string(),
                    separator: shape.separator,
                });
            }
        }

        Ok(Self {
            prefix: shape.prefix,
            separator: shape.separator,
            suffix: shape.suffix,
            has_optional: shape.has_optional,
            collections,
        })
    }

    /// Split `candidate` along the template's literals and validate every
    /// segment against its bound collection.
    ///
    /// # Errors
    /// `SegmentCount`/`LiteralMismatch` when the candidate does not fit the
    /// template shape, `TermNotFound`/`PatternMismatch` for the first invalid
    /// segment in template order.
    pub fn parse(&self, candidate: &str) -> Result<ParsedValues, ParseError> {
        let expected = self.collections.len();

        if candidate.is_empty() {
            return Err(ParseError::SegmentCount {
                expected,
                optional: self.has_optional,
                found: 0,
            });
        }

        let rest = candidate
            .strip_prefix(&self.prefix)
            .ok_or_else(|| ParseError::LiteralMismatch {
                literal: self.prefix.clone(),
            })?;
        let rest = rest
            .strip_suffix(&self.suffix)
            .ok_or_else(|| ParseError::LiteralMismatch {
                literal: self.suffix.clone(),
            })?;

        let segments: Vec<&str> = rest.split(self.separator).collect();
        let found = segments.len();
        let acceptable =
            found == expected || (self.has_optional && found + 1 == expected);
        if !acceptable {
            return Err(ParseError::SegmentCount {
                expected,
                optional: self.has_optional,
                found,
            });
        }

        let mut values = ParsedValues::with_capacity(found);
        for (segment, collection) in segments.iter().zip(&self.collections) {
            if !collection.matches(segment) {
                return Err(match collection.pattern_source() {
                    Some(pattern) => ParseError::PatternMismatch {
                        collection: collection.name().to_string(),
                        value: (*segment).to_string(),
                        pattern: pattern.to_string(),
                    },
                    None => ParseError::TermNotFound {
                        collection: collection.name().to_string(),
                        value: (*segment).to_string(),
                    },
                });
            }
            values.insert(collection.name().to_string(), (*segment).to_string());
        }

        Ok(values)
    }

    #[must_use]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub const fn has_optional_trailing(&self) -> bool {
        self.has_optional
    }
}

/// Raw structure of a template string before collections are bound.
struct TemplateShape {
    prefix: String,
    separator: char,
    suffix: String,
    has_optional: bool,
    placeholders: usize,
}

enum Token {
    Literal(String),
    Placeholder,
    OptionalGroup(char),
}

impl TemplateShape {
    fn scan(template: &str) -> Result<Self, TemplateDefinitionError> {
        let tokens = tokenize(template)?;
        Self::from_tokens(&tokens)
    }

    fn from_tokens(tokens: &[Token]) -> Result<Self, TemplateDefinitionError> {
        let mut prefix = String::new();
        let mut separator: Option<char> = None;
        let mut suffix = String::new();
        let mut has_optional = false;
        let mut placeholders = 0usize;
        let mut pending_literal: Option<&str> = None;

        for token in tokens {
            match token {
                Token::Literal(lit) => {
                    if pending_literal.is_some() {
                        return Err(TemplateDefinitionError::Malformed(
                            "adjacent literals".to_string(),
                        ));
                    }
                    pending_literal = Some(lit.as_str());
                }
                Token::Placeholder => {
                    if has_optional {
                        return Err(TemplateDefinitionError::MalformedOptionalGroup);
                    }
                    if placeholders == 0 {
                        prefix = pending_literal.take().unwrap_or_default().to_string();
                    } else {
                        let lit = pending_literal.take().ok_or_else(|| {
                            TemplateDefinitionError::Malformed(
                                "adjacent placeholders".to_string(),
                            )
                        })?;
                        let mut chars = lit.chars();
                        let first = chars.next();
                        match (first, chars.next(), separator) {
                            (Some(c), None, None) => separator = Some(c),
                            (Some(c), None, Some(sep)) if c == sep => {}
                            (_, _, Some(sep)) => {
                                return Err(TemplateDefinitionError::MixedSeparators {
                                    separator: sep,
                                    found: lit.to_string(),
                                });
                            }
                            _ => {
                                return Err(TemplateDefinitionError::Malformed(format!(
                                    "separator must be a single character, found {lit:?}"
                                )));
                            }
                        }
                    }
                    placeholders += 1;
                }
                Token::OptionalGroup(sep) => {
                    if has_optional || placeholders == 0 || pending_literal.is_some() {
                        return Err(TemplateDefinitionError::MalformedOptionalGroup);
                    }
                    match separator {
                        Some(main) if main != *sep => {
                            return Err(TemplateDefinitionError::MalformedOptionalGroup);
                        }
                        Some(_) => {}
                        None => separator = Some(*sep),
                    }
                    has_optional = true;
                    placeholders += 1;
                }
            }
        }

        if let Some(lit) = pending_literal {
            suffix = lit.to_string();
        }

        if placeholders == 0 {
            return Err(TemplateDefinitionError::NoPlaceholders);
        }
        let separator = separator.ok_or_else(|| {
            TemplateDefinitionError::Malformed(
                "single-placeholder templates must declare a separator via an optional group"
                    .to_string(),
            )
        })?;

        Ok(Self {
            prefix,
            separator,
            suffix,
            has_optional,
            placeholders,
        })
    }
}

fn tokenize(template: &str) -> Result<Vec<Token>, TemplateDefinitionError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("{}") {
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Placeholder);
            rest = after;
        } else if rest.starts_with('[') {
            let end = rest
                .find(']')
                .ok_or_else(|| TemplateDefinitionError::Malformed("unclosed group".to_string()))?;
            let body = &rest[1..end];
            let sep = body.strip_suffix("{}").and_then(|s| {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            });
            let Some(sep) = sep else {
                return Err(TemplateDefinitionError::Malformed(format!(
                    "optional group must be `[<sep>{{}}]`, found {:?}",
                    &rest[..=end]
                )));
            };
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::OptionalGroup(sep));
            rest = &rest[end + 1..];
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                literal.push(c);
            }
            rest = chars.as_str();
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    Ok(tokens)
}

/// Conservative check that a regular-expression source could match `sep`.
///
/// Scans the source for the separator as a literal, the `.` wildcard, a
/// negated character class, or a predefined class that includes the
/// separator. False positives are acceptable (the template is rejected at
/// compile time); false negatives are not.
fn pattern_can_match_char(source: &str, sep: char) -> bool {
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let Some(class) = chars.next() else {
                    return true;
                };
                let hit = match class {
                    'd' => sep.is_ascii_digit(),
                    'D' => !sep.is_ascii_digit(),
                    'w' => sep.is_alphanumeric() || sep == '_',
                    'W' => !(sep.is_alphanumeric() || sep == '_'),
                    's' => sep.is_whitespace(),
                    'S' => !sep.is_whitespace(),
                    other => other == sep,
                };
                if hit {
                    return true;
                }
            }
            '.' => return true,
            '[' => {
                // Negated classes are rejected outright; positive classes are
                // scanned for the separator itself.
                if chars.peek() == Some(&'^') {
                    return true;
                }
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    // A range may cover the separator; treat it as a hit.
                    if inner == sep || inner == '-' {
                        return true;
                    }
                }
            }
            _ if c == sep => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
