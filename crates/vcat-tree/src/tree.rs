//! Namespace tree storage
//!
//! Nodes live in an arena owned by [`NamespaceTree`] and are addressed by
//! [`NodeId`]. Only [`TreeBuilder`](crate::TreeBuilder) creates nodes; once
//! built, a tree is never mutated.

use crate::entry::{CatalogEntry, EntryKind};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use vcat_alias::AliasPath;

/// Index of a node within its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every tree
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of a namespace tree
///
/// A node may group children, carry a leaf entry, or both (a dual node).
#[derive(Debug, Clone)]
pub struct NamespaceNode {
    /// Segment name (empty for the root)
    name: String,

    /// Derived accessor method name (empty for the root)
    method: String,

    parent: Option<NodeId>,

    /// Children by segment, in first-seen order
    children: IndexMap<String, NodeId>,

    leaf: Option<CatalogEntry>,
}

impl NamespaceNode {
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            method: String::new(),
            parent: None,
            children: IndexMap::new(),
            leaf: None,
        }
    }

    pub(crate) fn child_of(parent: NodeId, name: &str, method: String) -> Self {
        Self {
            name: name.to_string(),
            method,
            parent: Some(parent),
            children: IndexMap::new(),
            leaf: None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut IndexMap<String, NodeId> {
        &mut self.children
    }

    pub(crate) fn set_leaf(&mut self, entry: CatalogEntry) {
        self.leaf = Some(entry);
    }

    /// Segment name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessor method name derived from the segment
    #[inline]
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Parent node, `None` for the root
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child by segment name
    #[inline]
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<NodeId> {
        self.children.get(segment).copied()
    }

    /// Children in first-seen order
    #[inline]
    pub fn children(&self) -> impl ExactSizeIterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Check if the node groups other nodes
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaf entry, if an alias ends here
    #[inline]
    #[must_use]
    pub fn leaf(&self) -> Option<&CatalogEntry> {
        self.leaf.as_ref()
    }

    /// Both a leaf and a namespace parent
    #[inline]
    #[must_use]
    pub fn is_dual(&self) -> bool {
        self.leaf.is_some() && self.has_children()
    }
}

/// Immutable namespace tree for one entry kind
#[derive(Debug, Clone)]
pub struct NamespaceTree {
    kind: EntryKind,
    nodes: Vec<NamespaceNode>,
    entry_count: usize,
}

impl NamespaceTree {
    pub(crate) fn from_parts(
        kind: EntryKind,
        nodes: Vec<NamespaceNode>,
        entry_count: usize,
    ) -> Self {
        Self {
            kind,
            nodes,
            entry_count,
        }
    }

    /// Kind of every entry in this tree
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Root node id
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Node by id
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NamespaceNode {
        &self.nodes[id.0]
    }

    /// Node by id, `None` for ids outside this tree
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NamespaceNode> {
        self.nodes.get(id.0)
    }

    /// Child of `id` by segment name
    #[inline]
    #[must_use]
    pub fn child(&self, id: NodeId, segment: &str) -> Option<NodeId> {
        self.get(id)?.child(segment)
    }

    /// Descend from the root along `path`
    #[must_use]
    pub fn find(&self, path: &AliasPath) -> Option<NodeId> {
        path.iter()
            .try_fold(NodeId::ROOT, |current, segment| self.child(current, segment))
    }

    /// Segment path from the root to `id`
    #[must_use]
    pub fn path_of(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            let Some(parent) = node.parent else { break };
            path.push(node.name.clone());
            current = self.get(parent);
        }
        path.reverse();
        path
    }

    /// Dotted path of `id`, `<root>` for the root
    #[must_use]
    pub fn display_path(&self, id: NodeId) -> String {
        if id == NodeId::ROOT {
            "<root>".to_string()
        } else {
            self.path_of(id).join(".")
        }
    }

    /// All node ids, depth-first pre-order, children in first-seen order
    #[must_use]
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = self.node(id);
            stack.extend(node.children.values().rev().copied());
        }
        order
    }

    /// Leaf entries in walk order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.walk()
            .into_iter()
            .filter_map(move |id| self.node(id).leaf())
    }

    /// Number of nodes (including the root)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Number of leaf entries
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}
