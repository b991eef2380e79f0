//! VCAT Alias
//!
//! Turns flat catalog aliases such as `androidx.ui.test` into segment paths,
//! and derives the accessor method name for each segment.
//!
//! # Example
//!
//! ```rust
//! use vcat_alias::{method_name, AliasParser};
//!
//! let path = AliasParser::gradle().parse("androidx-activity-activityCompose").unwrap();
//! assert_eq!(path.to_string(), "androidx.activity.activityCompose");
//! assert_eq!(method_name(path.last()), "activity_compose");
//! ```

pub mod naming;
pub mod path;

// Re-exports
pub use naming::{is_reserved, method_name, DEFAULT_ACCESSOR};
pub use path::{AliasDefect, AliasError, AliasParser, AliasPath, DEFAULT_DELIMITER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
