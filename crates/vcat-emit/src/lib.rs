//! VCAT Emit
//!
//! Turns a classified namespace tree into method tables: for every node, one
//! accessor per child, plus the reserved default-value accessor on dual
//! nodes.
//!
//! # Example
//!
//! ```rust
//! use vcat_alias::{AliasParser, DEFAULT_ACCESSOR};
//! use vcat_emit::{AccessorEmitter, ReturnKind};
//! use vcat_tree::{build_tree, classify, EntryKind, Payload};
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
//! let table = AccessorEmitter::new().emit(&tree, &classify(&tree));
//!
//! let ui = table.lookup(tree.root(), "ui").unwrap();
//! assert_eq!(ui.return_kind, ReturnKind::DualEntry);
//! assert!(table.lookup(ui.target, DEFAULT_ACCESSOR).is_some());
//! ```

pub mod accessor;
pub mod table;

// Re-exports
pub use accessor::{AccessorSpec, ReturnKind};
pub use table::{AccessorEmitter, AccessorTable, NodeAccessors};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
