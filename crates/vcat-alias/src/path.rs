//! Alias paths and the parser that produces them
//!
//! Provides [`AliasPath`] for the segmented form of a catalog alias and
//! [`AliasParser`] for splitting flat alias strings into it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Default segment delimiter
pub const DEFAULT_DELIMITER: char = '.';

/// Parsed catalog alias
///
/// Always holds at least one segment. Segments are case-sensitive and never
/// empty; display joins them with `.` regardless of the delimiter the alias
/// was declared with, so `androidx-ui-test` and `androidx.ui.test` display
/// identically once normalized.
///
/// # Examples
/// - `"junit"` → `["junit"]`
/// - `"androidx.ui.test"` → `["androidx", "ui", "test"]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct AliasPath(Vec<String>);

impl AliasPath {
    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final segment
    #[inline]
    #[must_use]
    pub fn last(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    /// First segment
    #[inline]
    #[must_use]
    pub fn first(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// Parent path, `None` for single-segment aliases
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Check if this path is a prefix of another (or equal to it)
    #[inline]
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        self.0.len() <= other.0.len() && self.0 == other.0[..self.0.len()]
    }

    /// Check if this path is a strict prefix of another
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.is_prefix_of(other)
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for AliasPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<AliasPath> for String {
    fn from(path: AliasPath) -> Self {
        path.to_string()
    }
}

/// Splits flat alias strings into [`AliasPath`]s
///
/// The delimiter is fixed per parser. Extra separators are treated exactly
/// like the delimiter, which is how Gradle-style catalogs normalize
/// `androidx-ui-test` to `androidx.ui.test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasParser {
    delimiter: char,
    #[serde(default)]
    separators: Vec<char>,
}

impl AliasParser {
    /// Create a parser splitting on `delimiter` only
    #[inline]
    #[must_use]
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            separators: Vec::new(),
        }
    }

    /// Parser that also splits on `-` and `_`
    #[must_use]
    pub fn gradle() -> Self {
        Self::new(DEFAULT_DELIMITER).with_separators(['-', '_'])
    }

    /// Add extra separators that normalize to the delimiter
    #[must_use]
    pub fn with_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        for sep in separators {
            if sep != self.delimiter && !self.separators.contains(&sep) {
                self.separators.push(sep);
            }
        }
        self
    }

    /// The primary delimiter
    #[inline]
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Extra separators
    #[inline]
    #[must_use]
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    #[inline]
    fn is_delimiter(&self, ch: char) -> bool {
        ch == self.delimiter || self.separators.contains(&ch)
    }

    /// Parse one alias
    ///
    /// # Errors
    /// Returns [`AliasError::Invalid`] naming the alias when it is empty,
    /// starts or ends with a delimiter, contains consecutive delimiters,
    /// contains a character outside `[A-Za-z0-9_-]`, or has a segment with no
    /// alphanumeric character.
    pub fn parse(&self, alias: &str) -> Result<AliasPath, AliasError> {
        let (Some(first), Some(last)) = (alias.chars().next(), alias.chars().next_back()) else {
            return Err(AliasError::invalid(alias, AliasDefect::Empty));
        };
        if self.is_delimiter(first) {
            return Err(AliasError::invalid(alias, AliasDefect::LeadingDelimiter));
        }
        if self.is_delimiter(last) {
            return Err(AliasError::invalid(alias, AliasDefect::TrailingDelimiter));
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        for (position, ch) in alias.char_indices() {
            if self.is_delimiter(ch) {
                if current.is_empty() {
                    return Err(AliasError::invalid(
                        alias,
                        AliasDefect::EmptySegment { position },
                    ));
                }
                segments.push(std::mem::take(&mut current));
            } else if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                current.push(ch);
            } else {
                return Err(AliasError::invalid(
                    alias,
                    AliasDefect::InvalidCharacter { ch, position },
                ));
            }
        }
        segments.push(current);

        if let Some(segment) = segments
            .iter()
            .find(|s| !s.chars().any(|c| c.is_ascii_alphanumeric()))
        {
            return Err(AliasError::invalid(
                alias,
                AliasDefect::NoIdentifier {
                    segment: segment.clone(),
                },
            ));
        }

        Ok(AliasPath(segments))
    }
}

impl Default for AliasParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

/// What is wrong with a malformed alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasDefect {
    /// Alias is the empty string
    Empty,
    /// Alias starts with a delimiter
    LeadingDelimiter,
    /// Alias ends with a delimiter
    TrailingDelimiter,
    /// Two delimiters in a row; `position` is the byte offset of the second
    EmptySegment { position: usize },
    /// Character not allowed in an alias
    InvalidCharacter { ch: char, position: usize },
    /// Segment made only of `_`/`-`
    NoIdentifier { segment: String },
}

impl Display for AliasDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "alias is empty"),
            Self::LeadingDelimiter => write!(f, "alias starts with a delimiter"),
            Self::TrailingDelimiter => write!(f, "alias ends with a delimiter"),
            Self::EmptySegment { position } => {
                write!(f, "consecutive delimiters at offset {position}")
            }
            Self::InvalidCharacter { ch, position } => {
                write!(f, "invalid character {ch:?} at offset {position}")
            }
            Self::NoIdentifier { segment } => {
                write!(f, "segment '{segment}' has no alphanumeric character")
            }
        }
    }
}

/// Errors from alias parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// Malformed alias string
    #[error("invalid alias '{alias}': {defect}")]
    Invalid { alias: String, defect: AliasDefect },
}

impl AliasError {
    #[inline]
    fn invalid(alias: &str, defect: AliasDefect) -> Self {
        Self::Invalid {
            alias: alias.to_string(),
            defect,
        }
    }

    /// The offending alias as declared
    #[inline]
    #[must_use]
    pub fn alias(&self) -> &str {
        match self {
            Self::Invalid { alias, .. } => alias,
        }
    }

    /// The defect found
    #[inline]
    #[must_use]
    pub fn defect(&self) -> &AliasDefect {
        match self {
            Self::Invalid { defect, .. } => defect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(alias: &str) -> Result<AliasPath, AliasError> {
        AliasParser::default().parse(alias)
    }

    #[test]
    fn parse_single_segment() {
        let path = parse("junit").unwrap();
        assert_eq!(path.segments(), &["junit"]);
        assert_eq!(path.len(), 1);
        assert!(path.parent().is_none());
    }

    #[test]
    fn parse_nested_segments() {
        let path = parse("androidx.ui.test").unwrap();
        assert_eq!(path.segments(), &["androidx", "ui", "test"]);
        assert_eq!(path.first(), "androidx");
        assert_eq!(path.last(), "test");
        assert_eq!(path.to_string(), "androidx.ui.test");
    }

    #[test]
    fn segments_are_case_sensitive() {
        let lower = parse("ui.test").unwrap();
        let upper = parse("UI.test").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(upper.first(), "UI");
    }

    #[test]
    fn rejects_empty_alias() {
        let err = parse("").unwrap_err();
        assert_eq!(err.defect(), &AliasDefect::Empty);
    }

    #[test]
    fn rejects_consecutive_delimiters() {
        let err = parse("a..b").unwrap_err();
        assert_eq!(err.alias(), "a..b");
        assert_eq!(err.defect(), &AliasDefect::EmptySegment { position: 2 });
    }

    #[test]
    fn rejects_leading_delimiter() {
        let err = parse(".a").unwrap_err();
        assert_eq!(err.defect(), &AliasDefect::LeadingDelimiter);
    }

    #[test]
    fn rejects_trailing_delimiter() {
        let err = parse("a.").unwrap_err();
        assert_eq!(err.defect(), &AliasDefect::TrailingDelimiter);
    }

    #[test]
    fn rejects_lone_delimiter() {
        let err = parse(".").unwrap_err();
        assert_eq!(err.defect(), &AliasDefect::LeadingDelimiter);
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = parse("ui.te st").unwrap_err();
        assert!(matches!(
            err.defect(),
            AliasDefect::InvalidCharacter { ch: ' ', position: 5 }
        ));
    }

    #[test]
    fn rejects_segment_without_identifier() {
        let err = parse("ui.__").unwrap_err();
        assert!(matches!(err.defect(), AliasDefect::NoIdentifier { segment } if segment == "__"));
    }

    #[test]
    fn error_message_names_alias() {
        let err = parse("a..b").unwrap_err();
        assert!(err.to_string().contains("'a..b'"));
    }

    #[test]
    fn default_parser_keeps_dashes_in_segments() {
        let path = parse("core-ktx").unwrap();
        assert_eq!(path.segments(), &["core-ktx"]);
    }

    #[test]
    fn gradle_parser_normalizes_separators() {
        let parser = AliasParser::gradle();
        let dashed = parser.parse("androidx-ui-test").unwrap();
        let mixed = parser.parse("androidx_ui.test").unwrap();
        let dotted = parser.parse("androidx.ui.test").unwrap();

        assert_eq!(dashed, dotted);
        assert_eq!(mixed, dotted);
    }

    #[test]
    fn gradle_parser_rejects_mixed_consecutive_separators() {
        let err = AliasParser::gradle().parse("a-.b").unwrap_err();
        assert_eq!(err.defect(), &AliasDefect::EmptySegment { position: 2 });
    }

    #[test]
    fn custom_delimiter() {
        let parser = AliasParser::new(':');
        let path = parser.parse("a:b.c").unwrap_err();
        assert!(matches!(path.defect(), AliasDefect::InvalidCharacter { ch: '.', .. }));
        assert_eq!(parser.parse("a:b").unwrap().segments(), &["a", "b"]);
    }

    #[test]
    fn with_separators_ignores_delimiter_and_duplicates() {
        let parser = AliasParser::new('.').with_separators(['.', '-', '-']);
        assert_eq!(parser.separators(), &['-']);
    }

    #[test]
    fn prefix_relations() {
        let ui = parse("androidx.ui").unwrap();
        let test = parse("androidx.ui.test").unwrap();

        assert!(ui.is_prefix_of(&test));
        assert!(ui.is_ancestor_of(&test));
        assert!(ui.is_prefix_of(&ui));
        assert!(!ui.is_ancestor_of(&ui));
        assert_eq!(test.parent(), Some(ui));
    }
}
