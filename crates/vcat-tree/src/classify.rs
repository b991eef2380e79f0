//! Collision Resolver
//!
//! Tags every node of a finished tree as leaf-only, namespace-only or dual.
//! Pure classification; the tree is not touched.

use crate::tree::{NamespaceNode, NamespaceTree, NodeId};
use serde::Serialize;

/// Role of a node in the accessor surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeClass {
    /// Carries an entry and nothing else
    Leaf,
    /// Groups children only (the root is always a namespace)
    Namespace,
    /// Carries an entry and groups children
    Dual,
}

impl NodeClass {
    /// Classify a single node
    #[inline]
    #[must_use]
    pub fn of(node: &NamespaceNode) -> Self {
        match (node.leaf().is_some(), node.has_children()) {
            (true, true) => Self::Dual,
            (true, false) => Self::Leaf,
            (false, _) => Self::Namespace,
        }
    }

    /// Whether the node exposes a value
    #[inline]
    #[must_use]
    pub fn has_value(self) -> bool {
        matches!(self, Self::Leaf | Self::Dual)
    }

    /// Whether the node exposes child accessors
    #[inline]
    #[must_use]
    pub fn has_children(self) -> bool {
        matches!(self, Self::Namespace | Self::Dual)
    }
}

/// Per-node classes of one tree, indexed by [`NodeId`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    classes: Vec<NodeClass>,
}

/// Node totals per class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Leaf-only nodes
    pub leaves: usize,
    /// Namespace-only nodes, root included
    pub namespaces: usize,
    /// Dual nodes
    pub duals: usize,
}

impl Classification {
    /// Class of `id`
    ///
    /// # Panics
    /// Panics if `id` is not from the classified tree.
    #[inline]
    #[must_use]
    pub fn class(&self, id: NodeId) -> NodeClass {
        self.classes[id.index()]
    }

    /// Class of `id`, `None` for foreign ids
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeClass> {
        self.classes.get(id.index()).copied()
    }

    /// Ids of all dual nodes, in arena order
    pub fn dual_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, class)| **class == NodeClass::Dual)
            .map(|(index, _)| NodeId(index))
    }

    /// Totals per class
    #[must_use]
    pub fn counts(&self) -> ClassCounts {
        self.classes
            .iter()
            .fold(ClassCounts::default(), |mut counts, class| {
                match class {
                    NodeClass::Leaf => counts.leaves += 1,
                    NodeClass::Namespace => counts.namespaces += 1,
                    NodeClass::Dual => counts.duals += 1,
                }
                counts
            })
    }

    /// Number of classified nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if nothing was classified
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Classify every node of `tree`
#[must_use]
pub fn classify(tree: &NamespaceTree) -> Classification {
    let classes = (0..tree.len())
        .map(|index| NodeClass::of(tree.node(NodeId(index))))
        .collect();
    Classification { classes }
}
