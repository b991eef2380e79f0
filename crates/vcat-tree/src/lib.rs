//! VCAT Tree
//!
//! Builds one namespace tree per catalog kind from flat `(alias, payload)`
//! pairs, then classifies every node.
//!
//! # Overview
//!
//! - **TreeBuilder**: inserts parsed aliases, creating intermediate nodes
//! - **NamespaceTree**: immutable arena of [`NamespaceNode`]s
//! - **classify**: tags nodes as leaf, namespace or dual
//!
//! # Example
//!
//! ```rust
//! use vcat_alias::AliasParser;
//! use vcat_tree::{build_tree, classify, EntryKind, NodeClass, Payload};
//!
//! let tree = build_tree(
//!     EntryKind::Library,
//!     AliasParser::default(),
//!     [
//!         ("ui", Payload::Coordinate("androidx.compose.ui:ui".into())),
//!         ("ui.test", Payload::Coordinate("androidx.compose.ui:ui-test".into())),
//!     ],
//! )
//! .unwrap();
//!
//! let ui = tree.child(tree.root(), "ui").unwrap();
//! assert_eq!(classify(&tree).class(ui), NodeClass::Dual);
//! ```

pub mod builder;
pub mod classify;
pub mod entry;
pub mod error;
pub mod tree;
pub mod version;

// Re-exports
pub use builder::{build_tree, TreeBuilder};
pub use classify::{classify, ClassCounts, Classification, NodeClass};
pub use entry::{CatalogEntry, EntryKind, Payload};
pub use error::TreeError;
pub use tree::{NamespaceNode, NamespaceTree, NodeId};
pub use version::{is_range, VersionConstraint};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
