//! Namespace Tree Builder
//!
//! Folds catalog entries of one kind into a [`NamespaceTree`]. Intermediate
//! nodes are created on demand; an alias that is a strict prefix of another
//! yields a dual node rather than an error.

use crate::entry::{CatalogEntry, EntryKind, Payload};
use crate::error::TreeError;
use crate::tree::{NamespaceNode, NamespaceTree, NodeId};
use vcat_alias::{method_name, AliasParser};

/// Builder for one kind's namespace tree
///
/// Usage:
/// ```rust
/// use vcat_alias::AliasParser;
/// use vcat_tree::{EntryKind, Payload, TreeBuilder};
///
/// let mut builder = TreeBuilder::new(EntryKind::Library, AliasParser::default());
/// builder.insert("ui", Payload::Coordinate("androidx.compose.ui:ui".into())).unwrap();
/// builder.insert("ui.test", Payload::Coordinate("androidx.compose.ui:ui-test".into())).unwrap();
/// let tree = builder.build();
/// assert_eq!(tree.entry_count(), 2);
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    kind: EntryKind,
    parser: AliasParser,
    nodes: Vec<NamespaceNode>,
    entry_count: usize,
}

impl TreeBuilder {
    /// Create a builder holding only the root
    #[must_use]
    pub fn new(kind: EntryKind, parser: AliasParser) -> Self {
        Self {
            kind,
            parser,
            nodes: vec![NamespaceNode::root()],
            entry_count: 0,
        }
    }

    /// Kind of the tree being built
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Number of entries inserted so far
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Insert one entry
    ///
    /// A failed insert leaves the builder unchanged.
    ///
    /// # Errors
    /// - [`TreeError::KindMismatch`] if the payload doesn't fit this kind
    /// - [`TreeError::InvalidAlias`] if the alias is malformed
    /// - [`TreeError::DuplicateAlias`] if the full alias already has a leaf
    /// - [`TreeError::NamingConflict`] if a new segment derives the same
    ///   accessor name as an existing sibling
    pub fn insert(&mut self, declared: &str, payload: Payload) -> Result<NodeId, TreeError> {
        if !payload.fits(self.kind) {
            return Err(TreeError::KindMismatch {
                alias: declared.to_string(),
                expected: self.kind,
                found: payload.variant_name(),
            });
        }

        let alias = self.parser.parse(declared)?;
        let segments = alias.segments();

        // Longest existing prefix
        let mut current = NodeId::ROOT;
        let mut depth = 0;
        while let Some(segment) = segments.get(depth) {
            match self.nodes[current.0].child(segment) {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => break,
            }
        }

        if depth == segments.len() {
            if let Some(existing) = self.nodes[current.0].leaf() {
                return Err(TreeError::DuplicateAlias {
                    alias: alias.to_string(),
                    first: existing.declared().to_string(),
                    second: declared.to_string(),
                });
            }
        } else {
            // Only the first new segment has siblings
            self.check_sibling_names(current, &segments[depth], declared)?;
        }

        for segment in &segments[depth..] {
            let id = NodeId(self.nodes.len());
            self.nodes
                .push(NamespaceNode::child_of(current, segment, method_name(segment)));
            self.nodes[current.0]
                .children_mut()
                .insert(segment.clone(), id);
            current = id;
        }

        tracing::debug!(
            kind = %self.kind,
            alias = %alias,
            declared,
            node = %current,
            "inserted catalog entry"
        );

        let entry = CatalogEntry::new(alias, declared, self.kind, payload);
        self.nodes[current.0].set_leaf(entry);
        self.entry_count += 1;
        Ok(current)
    }

    fn check_sibling_names(
        &self,
        parent: NodeId,
        segment: &str,
        declared: &str,
    ) -> Result<(), TreeError> {
        let method = method_name(segment);
        let clash = self.nodes[parent.0]
            .children()
            .map(|(_, id)| &self.nodes[id.0])
            .find(|sibling| sibling.method() == method);

        match clash {
            Some(sibling) => Err(TreeError::NamingConflict {
                parent: self.display_path(parent),
                method,
                existing: sibling.name().to_string(),
                segment: segment.to_string(),
                alias: declared.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn display_path(&self, id: NodeId) -> String {
        if id == NodeId::ROOT {
            return "<root>".to_string();
        }
        let mut path = Vec::new();
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent() {
            path.push(self.nodes[current.0].name());
            current = parent;
        }
        path.reverse();
        path.join(".")
    }

    /// Finish the tree
    #[must_use]
    pub fn build(self) -> NamespaceTree {
        tracing::debug!(
            kind = %self.kind,
            entries = self.entry_count,
            nodes = self.nodes.len(),
            "built namespace tree"
        );
        NamespaceTree::from_parts(self.kind, self.nodes, self.entry_count)
    }
}

/// Build a tree from `(alias, payload)` pairs in one go
///
/// # Errors
/// Returns the first [`TreeError`] hit; no partial tree is returned.
pub fn build_tree<I, S>(
    kind: EntryKind,
    parser: AliasParser,
    entries: I,
) -> Result<NamespaceTree, TreeError>
where
    I: IntoIterator<Item = (S, Payload)>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new(kind, parser);
    for (alias, payload) in entries {
        builder.insert(alias.as_ref(), payload)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcat_alias::AliasDefect;

    fn coord(s: &str) -> Payload {
        Payload::Coordinate(s.to_string())
    }

    fn libraries(entries: &[(&str, &str)]) -> Result<NamespaceTree, TreeError> {
        build_tree(
            EntryKind::Library,
            AliasParser::default(),
            entries.iter().map(|(a, c)| (*a, coord(c))),
        )
    }

    #[test]
    fn single_entry_under_root() {
        let tree = libraries(&[("junit", "junit:junit")]).unwrap();
        let id = tree.child(tree.root(), "junit").unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.entry_count(), 1);
        assert_eq!(tree.node(id).leaf().unwrap().payload(), &coord("junit:junit"));
    }

    #[test]
    fn intermediate_nodes_are_created() {
        let tree = libraries(&[("androidx.core.ktx", "androidx.core:core-ktx")]).unwrap();
        let androidx = tree.child(tree.root(), "androidx").unwrap();
        let core = tree.child(androidx, "core").unwrap();
        let ktx = tree.child(core, "ktx").unwrap();

        assert!(tree.node(androidx).leaf().is_none());
        assert!(tree.node(core).leaf().is_none());
        assert!(tree.node(ktx).leaf().is_some());
        assert_eq!(tree.path_of(ktx), vec!["androidx", "core", "ktx"]);
    }

    #[test]
    fn prefix_alias_produces_dual_node() {
        let tree = libraries(&[("ui", "coord1"), ("ui.test", "coord2")]).unwrap();
        let ui = tree.child(tree.root(), "ui").unwrap();
        let test = tree.child(ui, "test").unwrap();

        assert!(tree.node(ui).is_dual());
        assert_eq!(tree.node(ui).leaf().unwrap().payload(), &coord("coord1"));
        assert_eq!(tree.node(test).leaf().unwrap().payload(), &coord("coord2"));
    }

    #[test]
    fn dual_node_regardless_of_order() {
        let tree = libraries(&[("ui.test", "coord2"), ("ui", "coord1")]).unwrap();
        let ui = tree.child(tree.root(), "ui").unwrap();
        assert!(tree.node(ui).is_dual());
    }

    #[test]
    fn children_keep_first_seen_order() {
        let tree = libraries(&[
            ("ui.tooling", "t"),
            ("ui.graphics", "g"),
            ("ui.test", "x"),
            ("ui.graphics.extra", "e"),
        ])
        .unwrap();
        let ui = tree.child(tree.root(), "ui").unwrap();
        let names: Vec<&str> = tree.node(ui).children().map(|(n, _)| n).collect();

        assert_eq!(names, vec!["tooling", "graphics", "test"]);
    }

    #[test]
    fn rejects_duplicate_alias() {
        let err = libraries(&[("a.b", "x"), ("a.b", "y")]).unwrap_err();
        assert_eq!(
            err,
            TreeError::DuplicateAlias {
                alias: "a.b".into(),
                first: "a.b".into(),
                second: "a.b".into(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_after_normalization() {
        let err = build_tree(
            EntryKind::Library,
            AliasParser::gradle(),
            [("okhttp-logging", coord("a")), ("okhttp.logging", coord("b"))],
        )
        .unwrap_err();

        assert!(
            matches!(&err, TreeError::DuplicateAlias { alias, .. } if alias == "okhttp.logging")
        );
        assert_eq!(err.aliases(), vec!["okhttp-logging", "okhttp.logging"]);
    }

    #[test]
    fn rejects_malformed_alias() {
        for alias in ["a..b", ".a", "a."] {
            let err = libraries(&[(alias, "x")]).unwrap_err();
            assert!(matches!(err, TreeError::InvalidAlias(_)), "{alias}");
            assert_eq!(err.aliases(), vec![alias]);
        }
    }

    #[test]
    fn rejects_naming_conflict() {
        let err = libraries(&[("compose.fooBar", "a"), ("compose.foo_bar", "b")]).unwrap_err();
        assert_eq!(
            err,
            TreeError::NamingConflict {
                parent: "compose".into(),
                method: "foo_bar".into(),
                existing: "fooBar".into(),
                segment: "foo_bar".into(),
                alias: "compose.foo_bar".into(),
            }
        );
    }

    #[test]
    fn naming_conflict_at_root() {
        let err = libraries(&[("Retrofit", "a"), ("retrofit", "b")]).unwrap_err();
        assert!(matches!(err, TreeError::NamingConflict { parent, .. } if parent == "<root>"));
    }

    #[test]
    fn same_name_in_different_parents_is_fine() {
        let tree = libraries(&[
            ("hilt.compose", "a"),
            ("coil.compose", "b"),
            ("navigation.compose", "c"),
        ])
        .unwrap();
        assert_eq!(tree.entry_count(), 3);
    }

    #[test]
    fn rejects_payload_of_wrong_kind() {
        let mut builder = TreeBuilder::new(EntryKind::Bundle, AliasParser::default());
        let err = builder.insert("network", coord("x")).unwrap_err();
        assert!(matches!(
            err,
            TreeError::KindMismatch { expected: EntryKind::Bundle, found: "coordinate", .. }
        ));
    }

    #[test]
    fn failed_insert_leaves_builder_unchanged() {
        let mut builder = TreeBuilder::new(EntryKind::Library, AliasParser::default());
        builder.insert("compose.fooBar", coord("a")).unwrap();
        let err = builder.insert("compose.foo_bar.extra", coord("b"));
        assert!(err.is_err());

        let tree = builder.build();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.entry_count(), 1);
    }

    #[test]
    fn invalid_alias_carries_defect() {
        let err = libraries(&[("a..b", "x")]).unwrap_err();
        let TreeError::InvalidAlias(inner) = err else {
            panic!("expected invalid alias");
        };
        assert_eq!(inner.defect(), &AliasDefect::EmptySegment { position: 2 });
    }

    #[test]
    fn find_descends_along_alias() {
        let tree = libraries(&[("androidx.ui.tooling.preview", "p")]).unwrap();
        let path = AliasParser::default().parse("androidx.ui.tooling").unwrap();
        let id = tree.find(&path).unwrap();
        assert_eq!(tree.display_path(id), "androidx.ui.tooling");
        assert!(tree.find(&AliasParser::default().parse("androidx.nope").unwrap()).is_none());
    }

    #[test]
    fn walk_is_preorder() {
        let tree = libraries(&[("a.b", "1"), ("c", "2"), ("a.d", "3")]).unwrap();
        let paths: Vec<String> = tree.walk().into_iter().map(|id| tree.display_path(id)).collect();
        assert_eq!(paths, vec!["<root>", "a", "a.b", "a.d", "c"]);

        let aliases: Vec<String> = tree.entries().map(|e| e.alias().to_string()).collect();
        assert_eq!(aliases, vec!["a.b", "a.d", "c"]);
    }
}
