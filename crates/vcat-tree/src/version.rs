//! Version constraints
//!
//! Provides [`VersionConstraint`], the rich version model carried by version
//! entries, and the rule deciding when it reduces to one version string.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Rich version constraint
///
/// Mirrors the four clauses a catalog version may declare. A constraint is
/// representable as a single string only when exactly one of `strictly`,
/// `require` or `prefer` is set, nothing is rejected, and that one value is
/// not itself a range (see [`is_range`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionConstraint {
    /// Strict version or range; nothing outside it is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictly: Option<String>,

    /// Required version (may be upgraded by conflict resolution)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,

    /// Preferred version inside a wider constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer: Option<String>,

    /// Rejected versions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reject: Vec<String>,
}

impl VersionConstraint {
    /// Parse a plain version string
    ///
    /// Ranges become `strictly`, anything else `require`. Surrounding
    /// whitespace is ignored; an empty string yields an empty constraint.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::default()
        } else if is_range(raw) {
            Self::strictly(raw)
        } else {
            Self::require(raw)
        }
    }

    /// Constraint requiring `version`
    #[inline]
    #[must_use]
    pub fn require(version: impl Into<String>) -> Self {
        Self {
            require: Some(version.into()),
            ..Self::default()
        }
    }

    /// Constraint strictly pinned to `version`
    #[inline]
    #[must_use]
    pub fn strictly(version: impl Into<String>) -> Self {
        Self {
            strictly: Some(version.into()),
            ..Self::default()
        }
    }

    /// With a preferred version
    #[inline]
    #[must_use]
    pub fn with_prefer(mut self, version: impl Into<String>) -> Self {
        self.prefer = Some(version.into());
        self
    }

    /// With a rejected version
    #[inline]
    #[must_use]
    pub fn with_reject(mut self, version: impl Into<String>) -> Self {
        self.reject.push(version.into());
        self
    }

    /// The single version string, if the constraint reduces to one
    #[must_use]
    pub fn single(&self) -> Option<&str> {
        if !self.reject.is_empty() {
            return None;
        }
        let mut clauses = [&self.strictly, &self.require, &self.prefer]
            .into_iter()
            .flatten();
        match (clauses.next(), clauses.next()) {
            (Some(version), None) if !is_range(version) => Some(version.as_str()),
            _ => None,
        }
    }

    /// Check if no clause is set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strictly.is_none()
            && self.require.is_none()
            && self.prefer.is_none()
            && self.reject.is_empty()
    }
}

impl Display for VersionConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(single) = self.single() {
            return write!(f, "{single}");
        }
        let mut clauses = Vec::new();
        if let Some(v) = &self.strictly {
            clauses.push(format!("strictly {v}"));
        }
        if let Some(v) = &self.require {
            clauses.push(format!("require {v}"));
        }
        if let Some(v) = &self.prefer {
            clauses.push(format!("prefer {v}"));
        }
        if !self.reject.is_empty() {
            clauses.push(format!("reject {}", self.reject.join(", ")));
        }
        write!(f, "{{{}}}", clauses.join("; "))
    }
}

/// Check whether a version string is a range or multi-clause expression
///
/// Covers Maven-style ranges (`[1.0,2.0)`, `(,1.5]`, unions of them),
/// `||` alternatives and whitespace-separated clauses such as
/// `>=1.0 <2.0`.
#[must_use]
pub fn is_range(version: &str) -> bool {
    let version = version.trim();
    let bracketed = version.starts_with(['[', ']', '(']) && version.contains(',');
    bracketed || version.contains("||") || version.contains(char::is_whitespace)
}
