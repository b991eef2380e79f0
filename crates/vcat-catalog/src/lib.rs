//! VCAT Catalog
//!
//! Typed facade over a flat dependency catalog. Each kind (libraries,
//! versions, plugins, bundles) becomes its own namespace tree; callers walk
//! it with accessor calls instead of string lookups.
//!
//! # Overview
//!
//! - **Catalog**: built once from a [`CatalogSource`], immutable afterwards
//! - **Namespace**: `Copy` handle on one node, typed by its [`Kind`]
//! - **VersionValue**: single version string or the full rich constraint
//!
//! # Example
//!
//! ```rust
//! use vcat_catalog::{Catalog, CatalogConfig, CatalogSource};
//!
//! let source = CatalogSource::new()
//!     .library("androidx-ui", "androidx.compose.ui:ui")
//!     .library("androidx-ui-tooling", "androidx.compose.ui:ui-tooling")
//!     .version("kotlin", "1.9.22")
//!     .plugin("kotlin-android", "org.jetbrains.kotlin.android");
//! let catalog = Catalog::build(source, &CatalogConfig::gradle()).unwrap();
//!
//! let tooling = catalog.libraries().resolve("androidx.ui.tooling").unwrap();
//! assert_eq!(tooling.value(), Some("androidx.compose.ui:ui-tooling"));
//!
//! let ui = catalog.libraries().get("androidx").and_then(|a| a.get("ui")).unwrap();
//! assert_eq!(ui.default_value(), Some("androidx.compose.ui:ui"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod kind;
pub mod namespace;
pub mod source;
pub mod value;

// Re-exports
pub use catalog::{Catalog, CatalogStats, KindStats, KindTree};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use kind::{Bundles, Kind, Libraries, Plugins, Versions};
pub use namespace::Namespace;
pub use source::CatalogSource;
pub use value::VersionValue;

pub use vcat_alias::{method_name, AliasParser, AliasPath, DEFAULT_ACCESSOR};
pub use vcat_tree::{CatalogEntry, EntryKind, NodeClass, VersionConstraint};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
