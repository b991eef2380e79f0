//! Typed namespace handles
//!
//! A [`Namespace`] is a cheap `Copy` cursor into one of the catalog's trees.
//! Accessor calls are method-table lookups; the handle never allocates
//! unless asked for a path.

use crate::catalog::{Catalog, KindTree};
use crate::kind::{Bundles, Kind, Libraries, Versions};
use std::fmt;
use std::marker::PhantomData;
use vcat_emit::{AccessorSpec, NodeAccessors};
use vcat_tree::{CatalogEntry, NodeClass, NodeId};

/// Handle on one node of a kind's namespace tree
pub struct Namespace<'c, K: Kind> {
    catalog: &'c Catalog,
    node: NodeId,
    kind: PhantomData<K>,
}

impl<'c, K: Kind> Namespace<'c, K> {
    pub(crate) fn root(catalog: &'c Catalog) -> Self {
        Self::at(catalog, NodeId::ROOT)
    }

    fn at(catalog: &'c Catalog, node: NodeId) -> Self {
        Self {
            catalog,
            node,
            kind: PhantomData,
        }
    }

    fn view(&self) -> &'c KindTree {
        self.catalog.view(K::KIND)
    }

    /// Catalog this handle belongs to
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Underlying node id
    #[inline]
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Check if this is the root of the kind's tree
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node == NodeId::ROOT
    }

    /// Classification of this node
    #[must_use]
    pub fn class(&self) -> NodeClass {
        self.view().classes().class(self.node)
    }

    /// Normalized segment path from the root
    #[must_use]
    pub fn path(&self) -> Vec<String> {
        self.view().tree().path_of(self.node)
    }

    /// Method names called from the root to reach this node
    #[must_use]
    pub fn chain(&self) -> &'c [String] {
        self.view()
            .accessors()
            .node(self.node)
            .map_or(&[][..], NodeAccessors::chain)
    }

    /// Call the child accessor `method`
    ///
    /// Returns `None` for unknown methods and for the default-value accessor,
    /// which yields a value rather than a namespace (see
    /// [`default_value`](Self::default_value)).
    #[must_use]
    pub fn get(&self, method: &str) -> Option<Self> {
        let spec = self.view().accessors().lookup(self.node, method)?;
        if spec.is_default() {
            return None;
        }
        Some(Self::at(self.catalog, spec.target))
    }

    /// Descend along a declared alias, relative to this node
    ///
    /// The alias is split by the catalog's parser, so `ui-test` and
    /// `ui.test` reach the same node under a Gradle-style configuration.
    /// Segments match declared names exactly, case included.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<Self> {
        let path = self.catalog.parser().parse(alias).ok()?;
        let tree = self.view().tree();
        let node = path
            .iter()
            .try_fold(self.node, |current, segment| tree.child(current, segment));
        node.map(|node| Self::at(self.catalog, node))
    }

    /// Entry stored at this node, if any
    #[must_use]
    pub fn entry(&self) -> Option<&'c CatalogEntry> {
        self.view().tree().node(self.node).leaf()
    }

    /// Value of this node's entry
    ///
    /// Defined for leaves and dual nodes; `None` for pure namespaces.
    #[must_use]
    pub fn value(&self) -> Option<K::Value<'c>> {
        self.entry().and_then(K::value)
    }

    /// Value behind the default-value accessor
    ///
    /// `Some` only on dual nodes.
    #[must_use]
    pub fn default_value(&self) -> Option<K::Value<'c>> {
        let view = self.view();
        let spec = view.accessors().default_of(self.node)?;
        view.tree().node(spec.target).leaf().and_then(K::value)
    }

    /// Accessor specs of this node in emission order
    pub fn accessors(&self) -> impl Iterator<Item = &'c AccessorSpec> + 'c {
        self.view().accessors().specs(self.node)
    }

    /// Accessor method names of this node in emission order
    pub fn methods(&self) -> impl Iterator<Item = &'c str> + 'c {
        self.accessors().map(|spec| spec.method_name.as_str())
    }

    /// Child namespaces in first-seen order
    pub fn children(&self) -> impl Iterator<Item = Self> + 'c {
        let catalog = self.catalog;
        self.accessors()
            .filter(|spec| !spec.is_default())
            .map(move |spec| Self::at(catalog, spec.target))
    }
}

impl<'c> Namespace<'c, Versions> {
    /// Single version string of this node
    ///
    /// `None` for namespaces and for constraints without a single-string
    /// form.
    #[must_use]
    pub fn single(&self) -> Option<&'c str> {
        self.value()?.as_single()
    }
}

impl<'c> Namespace<'c, Bundles> {
    /// Member libraries of this bundle
    ///
    /// `None` if this node holds no bundle or a member cannot be resolved,
    /// which only happens when bundle validation was switched off.
    #[must_use]
    pub fn libraries(&self) -> Option<Vec<Namespace<'c, Libraries>>> {
        let libraries = self.catalog.libraries();
        self.value()?
            .iter()
            .map(|member| libraries.resolve(member))
            .collect()
    }

    /// Coordinates of the member libraries
    #[must_use]
    pub fn coordinates(&self) -> Option<Vec<&'c str>> {
        self.libraries()?.iter().map(Namespace::value).collect()
    }
}

impl<K: Kind> Clone for Namespace<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for Namespace<'_, K> {}

impl<K: Kind> PartialEq for Namespace<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog) && self.node == other.node
    }
}

impl<K: Kind> Eq for Namespace<'_, K> {}

impl<K: Kind> fmt::Debug for Namespace<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("kind", &K::KIND)
            .field("path", &self.view().tree().display_path(self.node))
            .field("class", &self.class())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, CatalogConfig, CatalogSource, VersionValue};
    use vcat_alias::DEFAULT_ACCESSOR;
    use vcat_tree::NodeClass;

    fn catalog() -> Catalog {
        let source = CatalogSource::new()
            .library("ui", "androidx.compose.ui:ui")
            .library("ui.test.junit4", "androidx.compose.ui:ui-test-junit4")
            .library("ui.tooling", "androidx.compose.ui:ui-tooling")
            .library("ui.tooling.preview", "androidx.compose.ui:ui-tooling-preview")
            .library("androidx.coreKtx", "androidx.core:core-ktx")
            .version("kotlin", "1.9.22")
            .version("okhttp", "[4.0,5.0)")
            .plugin("kotlin.android", "org.jetbrains.kotlin.android")
            .bundle("compose", ["ui", "ui.tooling"]);
        Catalog::build(source, &CatalogConfig::new()).unwrap()
    }

    #[test]
    fn chained_calls_reach_leaves() {
        let catalog = catalog();
        let junit4 = catalog
            .libraries()
            .get("ui")
            .and_then(|ui| ui.get("test"))
            .and_then(|test| test.get("junit4"))
            .unwrap();

        assert_eq!(junit4.class(), NodeClass::Leaf);
        assert_eq!(junit4.value(), Some("androidx.compose.ui:ui-test-junit4"));
        assert_eq!(junit4.path(), vec!["ui", "test", "junit4"]);
        assert_eq!(junit4.chain(), &["ui", "test", "junit4"]);
    }

    #[test]
    fn dual_node_exposes_default_and_children() {
        let catalog = catalog();
        let ui = catalog.libraries().get("ui").unwrap();

        assert_eq!(ui.class(), NodeClass::Dual);
        assert_eq!(ui.default_value(), Some("androidx.compose.ui:ui"));
        assert_eq!(ui.value(), ui.default_value());
        let methods: Vec<&str> = ui.methods().collect();
        assert_eq!(methods, vec![DEFAULT_ACCESSOR, "test", "tooling"]);
        assert_eq!(ui.children().count(), 2);
    }

    #[test]
    fn default_accessor_is_not_a_namespace() {
        let catalog = catalog();
        let ui = catalog.libraries().get("ui").unwrap();
        assert!(ui.get(DEFAULT_ACCESSOR).is_none());
    }

    #[test]
    fn namespaces_have_no_value() {
        let catalog = catalog();
        let test = catalog.libraries().resolve("ui.test").unwrap();

        assert_eq!(test.class(), NodeClass::Namespace);
        assert!(test.value().is_none());
        assert!(test.default_value().is_none());
        assert!(catalog.libraries().value().is_none());
    }

    #[test]
    fn leaves_have_no_default() {
        let catalog = catalog();
        let preview = catalog.libraries().resolve("ui.tooling.preview").unwrap();
        assert!(preview.default_value().is_none());
        assert_eq!(preview.methods().count(), 0);
    }

    #[test]
    fn resolve_uses_derived_names() {
        let catalog = catalog();
        let core = catalog.libraries().resolve("androidx.coreKtx").unwrap();
        assert_eq!(core.value(), Some("androidx.core:core-ktx"));
        assert_eq!(core.chain(), &["androidx", "core_ktx"]);
        assert_eq!(
            catalog.libraries().get("androidx").and_then(|a| a.get("core_ktx")),
            Some(core)
        );
    }

    #[test]
    fn resolve_matches_declared_segments_exactly() {
        let catalog = catalog();
        let libraries = catalog.libraries();

        assert!(libraries.resolve("ui").is_some());
        assert!(libraries.resolve("androidx.coreKtx").is_some());
        for alias in ["UI", "Ui", "androidx.CoreKtx", "androidx.core_ktx", "androidx.core-ktx"] {
            assert!(libraries.resolve(alias).is_none(), "{alias} resolved");
        }
    }

    #[test]
    fn resolve_is_relative() {
        let catalog = catalog();
        let ui = catalog.libraries().get("ui").unwrap();
        assert_eq!(
            ui.resolve("tooling.preview"),
            catalog.libraries().resolve("ui.tooling.preview")
        );
    }

    #[test]
    fn unknown_lookups_are_none() {
        let catalog = catalog();
        assert!(catalog.libraries().get("nope").is_none());
        assert!(catalog.libraries().resolve("ui.nope").is_none());
        assert!(catalog.libraries().resolve("..bad").is_none());
    }

    #[test]
    fn version_values() {
        let catalog = catalog();
        let kotlin = catalog.versions().get("kotlin").unwrap();
        let okhttp = catalog.versions().get("okhttp").unwrap();

        assert_eq!(kotlin.single(), Some("1.9.22"));
        assert!(okhttp.single().is_none());
        assert!(matches!(okhttp.value(), Some(VersionValue::Unrepresentable { .. })));
        assert!(okhttp.value().unwrap().require_single().is_err());
    }

    #[test]
    fn kinds_are_independent_trees() {
        let catalog = catalog();
        assert!(catalog.plugins().get("kotlin").is_some());
        assert!(catalog.versions().resolve("kotlin.android").is_none());
        assert_eq!(
            catalog.plugins().resolve("kotlin.android").and_then(|p| p.value()),
            Some("org.jetbrains.kotlin.android")
        );
    }

    #[test]
    fn bundle_members_resolve_to_libraries() {
        let catalog = catalog();
        let compose = catalog.bundles().get("compose").unwrap();

        assert_eq!(compose.value(), Some(&["ui".to_string(), "ui.tooling".to_string()][..]));
        assert_eq!(
            compose.coordinates(),
            Some(vec!["androidx.compose.ui:ui", "androidx.compose.ui:ui-tooling"])
        );
        let members = compose.libraries().unwrap();
        assert_eq!(members[0].class(), NodeClass::Dual);
    }

    #[test]
    fn handles_compare_by_node() {
        let catalog = catalog();
        let a = catalog.libraries().get("ui").unwrap();
        let b = catalog.libraries().resolve("ui").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, catalog.libraries());
        assert!(catalog.libraries().is_root());
    }
}
