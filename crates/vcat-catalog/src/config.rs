//! Catalog configuration

use serde::{Deserialize, Serialize};
use vcat_alias::{AliasParser, DEFAULT_DELIMITER};

/// Configuration for building a [`Catalog`](crate::Catalog)
///
/// Deserializable so the surrounding application can load it from whatever
/// format it already uses; missing fields fall back to [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog name, used as the listing prefix
    pub name: String,
    /// Alias segment delimiter
    pub delimiter: char,
    /// Extra separators normalized to the delimiter
    pub separators: Vec<char>,
    /// Reject bundles naming undeclared libraries
    pub validate_bundles: bool,
}

impl CatalogConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gradle-style configuration: `-` and `_` also separate segments
    #[must_use]
    pub fn gradle() -> Self {
        Self::default().with_separators(['-', '_'])
    }

    /// With catalog name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With segment delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// With extra separators
    #[inline]
    #[must_use]
    pub fn with_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.separators = separators.into_iter().collect();
        self
    }

    /// With or without bundle member validation
    #[inline]
    #[must_use]
    pub fn with_bundle_validation(mut self, validate: bool) -> Self {
        self.validate_bundles = validate;
        self
    }

    /// Alias parser for this configuration
    #[must_use]
    pub fn parser(&self) -> AliasParser {
        AliasParser::new(self.delimiter).with_separators(self.separators.iter().copied())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name: "libs".to_string(),
            delimiter: DEFAULT_DELIMITER,
            separators: Vec::new(),
            validate_bundles: true,
        }
    }
}
