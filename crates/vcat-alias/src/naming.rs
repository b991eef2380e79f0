//! Accessor method-name derivation
//!
//! Every accessor name in a catalog comes from [`method_name`]. The rule:
//!
//! 1. `snake_case` the segment (case boundaries split words, `-` and `_`
//!    are word boundaries and are dropped).
//! 2. Prefix `_` when the result starts with a digit.
//! 3. Append `_` when the result is a Rust keyword or [`DEFAULT_ACCESSOR`].
//!
//! Because step 1 never yields a trailing underscore, [`DEFAULT_ACCESSOR`]
//! can't be produced by any segment.

use heck::ToSnakeCase;

/// Reserved name of the default-value accessor on dual nodes
pub const DEFAULT_ACCESSOR: &str = "as_provider";

/// Strict and reserved Rust keywords (2021 edition)
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Derive the accessor method name for one alias segment
///
/// Pure: equal segments always produce equal names.
///
/// # Examples
/// - `activityCompose` → `activity_compose`
/// - `core-ktx` → `core_ktx`
/// - `3d` → `_3d`
/// - `type` → `type_`
#[must_use]
pub fn method_name(segment: &str) -> String {
    let mut name = segment.to_snake_case();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if is_reserved(&name) {
        name.push('_');
    }
    name
}

/// Check whether `name` is reserved (keyword or default accessor)
#[inline]
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    name == DEFAULT_ACCESSOR || KEYWORDS.contains(&name)
}
