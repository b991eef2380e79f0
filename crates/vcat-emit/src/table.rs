//! Accessor Emitter
//!
//! Walks a classified tree and emits the method table of every node. Tables
//! are built once, eagerly, so lookups after construction are plain reads.

use crate::accessor::{AccessorSpec, ReturnKind};
use indexmap::IndexMap;
use vcat_alias::DEFAULT_ACCESSOR;
use vcat_tree::{Classification, EntryKind, NamespaceTree, NodeClass, NodeId};

/// Method table of one node
#[derive(Debug, Clone, Default)]
pub struct NodeAccessors {
    /// Method names called from the root to reach this node
    chain: Vec<String>,

    /// Specs by method name; default accessor first, then children in
    /// first-seen order
    methods: IndexMap<String, AccessorSpec>,
}

impl NodeAccessors {
    /// Method chain from the root
    #[inline]
    #[must_use]
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// All specs in emission order
    #[inline]
    pub fn specs(&self) -> impl ExactSizeIterator<Item = &AccessorSpec> {
        self.methods.values()
    }

    /// Spec by method name
    #[inline]
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&AccessorSpec> {
        self.methods.get(method)
    }

    /// Number of methods
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if the node exposes no methods
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Method tables for every node of one tree, indexed by [`NodeId`]
#[derive(Debug, Clone)]
pub struct AccessorTable {
    kind: EntryKind,
    nodes: Vec<NodeAccessors>,
}

impl AccessorTable {
    /// Kind of the emitted tree
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Method table of `id`
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeAccessors> {
        self.nodes.get(id.index())
    }

    /// Specs of `id` in emission order (empty for foreign ids)
    pub fn specs(&self, id: NodeId) -> impl Iterator<Item = &AccessorSpec> + '_ {
        self.node(id).into_iter().flat_map(NodeAccessors::specs)
    }

    /// Spec for calling `method` on `id`
    #[inline]
    #[must_use]
    pub fn lookup(&self, id: NodeId, method: &str) -> Option<&AccessorSpec> {
        self.node(id)?.get(method)
    }

    /// Default-value accessor of `id`, present only on dual nodes
    #[inline]
    #[must_use]
    pub fn default_of(&self, id: NodeId) -> Option<&AccessorSpec> {
        self.lookup(id, DEFAULT_ACCESSOR)
    }

    /// Total number of accessor methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().map(NodeAccessors::len).sum()
    }

    /// Check if no methods were emitted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listing of every accessor chain, one per line, in tree walk order
    ///
    /// `prefix` names the root object (`libs.versions`, ...).
    #[must_use]
    pub fn render(&self, tree: &NamespaceTree, prefix: &str) -> String {
        let mut out = String::new();
        for id in tree.walk() {
            let Some(accessors) = self.node(id) else {
                continue;
            };
            for spec in accessors.specs() {
                let mut call = String::from(prefix);
                for method in accessors.chain().iter().chain([&spec.method_name]) {
                    if !call.is_empty() {
                        call.push('.');
                    }
                    call.push_str(method);
                }
                let target = tree.display_path(spec.target);
                let line = match spec.return_kind {
                    ReturnKind::SingleEntry => {
                        let payload = tree
                            .node(spec.target)
                            .leaf()
                            .map(|entry| entry.payload().to_string())
                            .unwrap_or_default();
                        format!("{call}() -> {} {target} = {payload}", self.kind)
                    }
                    ReturnKind::NamespaceGroup => format!("{call}() -> group {target}"),
                    ReturnKind::DualEntry => {
                        format!("{call}() -> group {target} (+{DEFAULT_ACCESSOR})")
                    }
                };
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

/// Emits [`AccessorTable`]s from classified trees
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessorEmitter;

impl AccessorEmitter {
    /// Create new emitter
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Emit method tables for every node of `tree`
    ///
    /// `classes` must come from [`vcat_tree::classify`] on the same tree.
    #[must_use]
    pub fn emit(&self, tree: &NamespaceTree, classes: &Classification) -> AccessorTable {
        let mut nodes = vec![NodeAccessors::default(); tree.len()];

        // Parents precede children in walk order, so chains extend forward
        for id in tree.walk() {
            let node = tree.node(id);
            let chain = match node.parent() {
                Some(parent) => {
                    let mut chain = nodes[parent.index()].chain.clone();
                    chain.push(node.method().to_string());
                    chain
                }
                None => Vec::new(),
            };
            let node_path = tree.path_of(id);
            let mut methods = IndexMap::with_capacity(node.children().len() + 1);

            if classes.class(id) == NodeClass::Dual {
                methods.insert(
                    DEFAULT_ACCESSOR.to_string(),
                    AccessorSpec {
                        node_path: node_path.clone(),
                        method_name: DEFAULT_ACCESSOR.to_string(),
                        return_kind: ReturnKind::SingleEntry,
                        target: id,
                    },
                );
            }

            for (_, child) in node.children() {
                let method = tree.node(child).method().to_string();
                let spec = AccessorSpec {
                    node_path: node_path.clone(),
                    method_name: method.clone(),
                    return_kind: ReturnKind::for_class(classes.class(child)),
                    target: child,
                };
                let previous = methods.insert(method, spec);
                debug_assert!(previous.is_none(), "builder admitted a sibling name clash");
            }

            nodes[id.index()] = NodeAccessors { chain, methods };
        }

        let table = AccessorTable {
            kind: tree.kind(),
            nodes,
        };
        tracing::debug!(
            kind = %table.kind,
            methods = table.len(),
            duals = classes.counts().duals,
            "emitted accessor table"
        );
        table
    }
}
