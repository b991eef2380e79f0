//! Accessor specifications
//!
//! The emitter's intermediate representation: one [`AccessorSpec`] per
//! method a node exposes.

use serde::Serialize;
use vcat_tree::{NodeClass, NodeId};

/// What calling an accessor yields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReturnKind {
    /// A leaf entry value
    SingleEntry,
    /// A namespace with child accessors only
    NamespaceGroup,
    /// A namespace that also has a default value
    DualEntry,
}

impl ReturnKind {
    /// Return kind of an accessor leading to a node of `class`
    #[inline]
    #[must_use]
    pub fn for_class(class: NodeClass) -> Self {
        match class {
            NodeClass::Leaf => Self::SingleEntry,
            NodeClass::Namespace => Self::NamespaceGroup,
            NodeClass::Dual => Self::DualEntry,
        }
    }
}

/// One accessor method on one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorSpec {
    /// Segment path of the node defining the method
    pub node_path: Vec<String>,

    /// Method name
    pub method_name: String,

    /// What the method yields
    pub return_kind: ReturnKind,

    /// Node reached by the call; equals the owner for default accessors
    pub target: NodeId,
}

impl AccessorSpec {
    /// Check if this is the reserved default-value accessor
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.method_name == vcat_alias::DEFAULT_ACCESSOR
    }
}
