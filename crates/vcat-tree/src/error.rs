//! Tree construction errors

use vcat_alias::AliasError;

/// Errors raised while building a namespace tree
///
/// Every variant is a static property of the catalog: rebuilding from the
/// same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Malformed alias string
    #[error(transparent)]
    InvalidAlias(#[from] AliasError),

    /// Two entries share one full alias
    #[error("duplicate alias '{alias}': declared as '{first}' and again as '{second}'")]
    DuplicateAlias {
        /// Normalized alias
        alias: String,
        /// First declaration
        first: String,
        /// Rejected declaration
        second: String,
    },

    /// Two sibling segments derive the same accessor name
    #[error(
        "naming conflict under {parent}: segments '{existing}' and '{segment}' both derive accessor '{method}' (while inserting '{alias}')"
    )]
    NamingConflict {
        /// Dotted path of the shared parent
        parent: String,
        /// Derived accessor name
        method: String,
        /// Segment already present
        existing: String,
        /// Segment being inserted
        segment: String,
        /// Alias being inserted, as declared
        alias: String,
    },

    /// Payload variant does not belong in this tree
    #[error("alias '{alias}' carries a {found} payload, not valid for {expected} entries")]
    KindMismatch {
        /// Alias as declared
        alias: String,
        /// Tree kind
        expected: crate::EntryKind,
        /// Payload variant name
        found: &'static str,
    },
}

impl TreeError {
    /// Declared aliases involved in the failure
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        match self {
            Self::InvalidAlias(e) => vec![e.alias()],
            Self::DuplicateAlias { first, second, .. } => vec![first, second],
            Self::NamingConflict { alias, .. } | Self::KindMismatch { alias, .. } => vec![alias],
        }
    }

    /// Always false: catalog defects don't change on retry
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
