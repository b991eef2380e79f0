//! Version values as seen by callers

use crate::error::CatalogError;
use std::fmt;
use vcat_alias::AliasPath;
use vcat_tree::VersionConstraint;

/// Value of a version accessor
///
/// Rich constraints with no single-string form are surfaced as
/// [`VersionValue::Unrepresentable`] instead of an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionValue<'c> {
    /// Exactly one version string
    Single(&'c str),
    /// Constraint with ranges, rejects or several clauses
    Unrepresentable {
        /// Version alias
        alias: &'c AliasPath,
        /// Full constraint
        constraint: &'c VersionConstraint,
    },
}

impl<'c> VersionValue<'c> {
    pub(crate) fn new(alias: &'c AliasPath, constraint: &'c VersionConstraint) -> Self {
        match constraint.single() {
            Some(version) => Self::Single(version),
            None => Self::Unrepresentable { alias, constraint },
        }
    }

    /// Single version string, if there is one
    #[inline]
    #[must_use]
    pub fn as_single(&self) -> Option<&'c str> {
        match self {
            Self::Single(version) => Some(version),
            Self::Unrepresentable { .. } => None,
        }
    }

    /// Check if the value is one version string
    #[inline]
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Single version string, or an error naming the alias
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnrepresentableVersion`] for rich constraints.
    pub fn require_single(self) -> Result<&'c str, CatalogError> {
        match self {
            Self::Single(version) => Ok(version),
            Self::Unrepresentable { alias, constraint } => {
                Err(CatalogError::UnrepresentableVersion {
                    alias: alias.to_string(),
                    constraint: constraint.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for VersionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(version) => f.write_str(version),
            Self::Unrepresentable { constraint, .. } => fmt::Display::fmt(constraint, f),
        }
    }
}
