//! Catalog input boundary
//!
//! [`CatalogSource`] is what the external loader hands over: ordered
//! `(alias, payload)` lists per kind. Parsing the catalog's persisted format
//! happens elsewhere.

use serde::{Deserialize, Serialize};
use vcat_tree::{EntryKind, Payload, VersionConstraint};

/// In-memory catalog, partitioned by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    /// `(alias, group:name coordinate)`
    pub libraries: Vec<(String, String)>,
    /// `(alias, constraint)`
    pub versions: Vec<(String, VersionConstraint)>,
    /// `(alias, plugin id)`
    pub plugins: Vec<(String, String)>,
    /// `(alias, member library aliases)`
    pub bundles: Vec<(String, Vec<String>)>,
}

impl CatalogSource {
    /// Create empty source
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a library
    #[must_use]
    pub fn library(mut self, alias: impl Into<String>, coordinate: impl Into<String>) -> Self {
        self.libraries.push((alias.into(), coordinate.into()));
        self
    }

    /// Add a version from a plain version string
    #[must_use]
    pub fn version(mut self, alias: impl Into<String>, version: &str) -> Self {
        self.versions
            .push((alias.into(), VersionConstraint::parse(version)));
        self
    }

    /// Add a version with a rich constraint
    #[must_use]
    pub fn rich_version(mut self, alias: impl Into<String>, constraint: VersionConstraint) -> Self {
        self.versions.push((alias.into(), constraint));
        self
    }

    /// Add a plugin
    #[must_use]
    pub fn plugin(mut self, alias: impl Into<String>, id: impl Into<String>) -> Self {
        self.plugins.push((alias.into(), id.into()));
        self
    }

    /// Add a bundle of library aliases
    #[must_use]
    pub fn bundle<I, S>(mut self, alias: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bundles
            .push((alias.into(), members.into_iter().map(Into::into).collect()));
        self
    }

    /// Number of entries of `kind`
    #[must_use]
    pub fn count(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Library => self.libraries.len(),
            EntryKind::Version => self.versions.len(),
            EntryKind::Plugin => self.plugins.len(),
            EntryKind::Bundle => self.bundles.len(),
        }
    }

    /// Total number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        EntryKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    /// Check if the source is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split into per-kind payload lists
    pub(crate) fn into_parts(self) -> SourceParts {
        SourceParts {
            libraries: self
                .libraries
                .into_iter()
                .map(|(alias, coord)| (alias, Payload::Coordinate(coord)))
                .collect(),
            versions: self
                .versions
                .into_iter()
                .map(|(alias, version)| (alias, Payload::Version(version)))
                .collect(),
            plugins: self
                .plugins
                .into_iter()
                .map(|(alias, id)| (alias, Payload::Coordinate(id)))
                .collect(),
            bundles: self
                .bundles
                .into_iter()
                .map(|(alias, members)| (alias, Payload::Members(members)))
                .collect(),
        }
    }
}

pub(crate) struct SourceParts {
    pub(crate) libraries: Vec<(String, Payload)>,
    pub(crate) versions: Vec<(String, Payload)>,
    pub(crate) plugins: Vec<(String, Payload)>,
    pub(crate) bundles: Vec<(String, Payload)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_entries_in_order() {
        let source = CatalogSource::new()
            .library("junit", "junit:junit")
            .library("okhttp", "com.squareup.okhttp3:okhttp")
            .version("okhttp", "4.12.0")
            .plugin("hilt", "com.google.dagger.hilt.android")
            .bundle("network", ["okhttp"]);

        assert_eq!(source.libraries[0].0, "junit");
        assert_eq!(source.libraries[1].0, "okhttp");
        assert_eq!(source.count(EntryKind::Library), 2);
        assert_eq!(source.len(), 5);
        assert!(!source.is_empty());
    }

    #[test]
    fn version_strings_are_parsed() {
        let source = CatalogSource::new()
            .version("kotlin", "1.9.22")
            .version("range", "[1.0,2.0)");

        assert_eq!(source.versions[0].1.single(), Some("1.9.22"));
        assert_eq!(source.versions[1].1.strictly.as_deref(), Some("[1.0,2.0)"));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "libraries": [["junit", "junit:junit"]],
            "versions": [["kotlin", { "require": "1.9.22" }]],
            "bundles": [["testing", ["junit"]]]
        }"#;
        let source: CatalogSource = serde_json::from_str(json).unwrap();

        assert_eq!(source.libraries, vec![("junit".to_string(), "junit:junit".to_string())]);
        assert_eq!(source.versions[0].1, VersionConstraint::require("1.9.22"));
        assert!(source.plugins.is_empty());
        assert_eq!(source.bundles[0].1, vec!["junit".to_string()]);
    }

    #[test]
    fn into_parts_wraps_payloads() {
        let parts = CatalogSource::new()
            .plugin("kotlin.android", "org.jetbrains.kotlin.android")
            .into_parts();
        assert_eq!(
            parts.plugins,
            vec![(
                "kotlin.android".to_string(),
                Payload::Coordinate("org.jetbrains.kotlin.android".into())
            )]
        );
        assert!(parts.libraries.is_empty());
    }
}
