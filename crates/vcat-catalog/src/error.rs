//! Error types for catalog construction
//!
//! Every failure is raised while building; a built [`Catalog`](crate::Catalog)
//! never fails on navigation.

use vcat_tree::{EntryKind, TreeError};

/// Main catalog error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Building one kind's tree failed
    #[error("{kind} catalog: {source}")]
    Tree {
        /// Tree that failed
        kind: EntryKind,
        /// Underlying failure
        source: TreeError,
    },

    /// Bundle member is not a declared library
    #[error("bundle '{bundle}' references unknown library '{member}'")]
    UnknownBundleMember {
        /// Bundle alias as declared
        bundle: String,
        /// Member as declared
        member: String,
    },

    /// Version cannot be reduced to one version string
    #[error("version '{alias}' is not representable as a single version string: {constraint}")]
    UnrepresentableVersion {
        /// Version alias
        alias: String,
        /// Rendered constraint
        constraint: String,
    },
}

impl CatalogError {
    pub(crate) fn tree(kind: EntryKind) -> impl FnOnce(TreeError) -> Self {
        move |source| Self::Tree { kind, source }
    }

    /// Kind involved, when the error is tied to one tree
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Tree { kind, .. } => *kind,
            Self::UnknownBundleMember { .. } => EntryKind::Bundle,
            Self::UnrepresentableVersion { .. } => EntryKind::Version,
        }
    }

    /// Aliases the catalog author has to fix
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        match self {
            Self::Tree { source, .. } => source.aliases(),
            Self::UnknownBundleMember { bundle, .. } => vec![bundle],
            Self::UnrepresentableVersion { alias, .. } => vec![alias],
        }
    }

    /// Always false: the catalog must be fixed first
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
