//! Catalog entries
//!
//! An entry is one `(alias, payload)` pair of a given kind, as handed over by
//! the catalog loader. Entries are immutable once inserted into a tree.

use crate::version::VersionConstraint;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use vcat_alias::AliasPath;

/// The four independent trees of a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Library coordinates
    Library,
    /// Version strings or rich constraints
    Version,
    /// Plugin identifiers
    Plugin,
    /// Ordered groups of libraries
    Bundle,
}

impl EntryKind {
    /// All kinds, in facade order
    pub const ALL: [EntryKind; 4] = [Self::Library, Self::Version, Self::Plugin, Self::Bundle];

    /// Lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Version => "version",
            Self::Plugin => "plugin",
            Self::Bundle => "bundle",
        }
    }

    /// Accessor group under which this kind is exposed (`versions`, ...)
    #[inline]
    #[must_use]
    pub fn group_name(self) -> &'static str {
        match self {
            Self::Library => "libraries",
            Self::Version => "versions",
            Self::Plugin => "plugins",
            Self::Bundle => "bundles",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific entry value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Library coordinate (`group:name`) or plugin id
    Coordinate(String),
    /// Version constraint
    Version(VersionConstraint),
    /// Bundle members: library aliases in declared order
    Members(Vec<String>),
}

impl Payload {
    /// Check whether this payload is valid for `kind`
    #[inline]
    #[must_use]
    pub fn fits(&self, kind: EntryKind) -> bool {
        matches!(
            (self, kind),
            (Self::Coordinate(_), EntryKind::Library | EntryKind::Plugin)
                | (Self::Version(_), EntryKind::Version)
                | (Self::Members(_), EntryKind::Bundle)
        )
    }

    /// Variant name for diagnostics
    #[inline]
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Coordinate(_) => "coordinate",
            Self::Version(_) => "version",
            Self::Members(_) => "members",
        }
    }

    /// Coordinate or plugin id
    #[inline]
    #[must_use]
    pub fn as_coordinate(&self) -> Option<&str> {
        match self {
            Self::Coordinate(c) => Some(c),
            _ => None,
        }
    }

    /// Version constraint
    #[inline]
    #[must_use]
    pub fn as_version(&self) -> Option<&VersionConstraint> {
        match self {
            Self::Version(v) => Some(v),
            _ => None,
        }
    }

    /// Bundle members
    #[inline]
    #[must_use]
    pub fn as_members(&self) -> Option<&[String]> {
        match self {
            Self::Members(m) => Some(m),
            _ => None,
        }
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate(c) => write!(f, "{c}"),
            Self::Version(v) => write!(f, "{v}"),
            Self::Members(m) => write!(f, "[{}]", m.join(", ")),
        }
    }
}

/// One catalog entry attached to a tree leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    alias: AliasPath,
    declared: String,
    kind: EntryKind,
    payload: Payload,
}

impl CatalogEntry {
    /// Create new entry
    #[inline]
    #[must_use]
    pub fn new(
        alias: AliasPath,
        declared: impl Into<String>,
        kind: EntryKind,
        payload: Payload,
    ) -> Self {
        Self {
            alias,
            declared: declared.into(),
            kind,
            payload,
        }
    }

    /// Normalized alias path
    #[inline]
    #[must_use]
    pub fn alias(&self) -> &AliasPath {
        &self.alias
    }

    /// Alias exactly as declared in the catalog
    #[inline]
    #[must_use]
    pub fn declared(&self) -> &str {
        &self.declared
    }

    /// Entry kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Entry value
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}
