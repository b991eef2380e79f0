//! Catalog
//!
//! Builds the four per-kind trees, classifies them and emits their method
//! tables in one pass. A built [`Catalog`] is immutable and `Send + Sync`;
//! share it by reference or behind an `Arc`.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::kind::{Bundles, Libraries, Plugins, Versions};
use crate::namespace::Namespace;
use crate::source::CatalogSource;
use serde::Serialize;
use vcat_alias::AliasParser;
use vcat_emit::{AccessorEmitter, AccessorTable};
use vcat_tree::{
    build_tree, classify, ClassCounts, Classification, EntryKind, NamespaceTree, Payload,
    TreeBuilder,
};

/// One kind's tree with its classification and method tables
#[derive(Debug, Clone)]
pub struct KindTree {
    tree: NamespaceTree,
    classes: Classification,
    accessors: AccessorTable,
}

impl KindTree {
    fn new(tree: NamespaceTree) -> Self {
        let classes = classify(&tree);
        let accessors = AccessorEmitter::new().emit(&tree, &classes);
        Self {
            tree,
            classes,
            accessors,
        }
    }

    fn build(
        kind: EntryKind,
        parser: &AliasParser,
        entries: Vec<(String, Payload)>,
    ) -> Result<Self, CatalogError> {
        build_tree(kind, parser.clone(), entries)
            .map(Self::new)
            .map_err(CatalogError::tree(kind))
    }

    /// Namespace tree
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    /// Node classification
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &Classification {
        &self.classes
    }

    /// Method tables
    #[inline]
    #[must_use]
    pub fn accessors(&self) -> &AccessorTable {
        &self.accessors
    }

    /// Size statistics
    #[must_use]
    pub fn stats(&self) -> KindStats {
        KindStats {
            entries: self.tree.entry_count(),
            nodes: self.tree.len(),
            accessors: self.accessors.len(),
            classes: self.classes.counts(),
        }
    }
}

/// Size statistics of one kind's tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindStats {
    /// Leaf entries
    pub entries: usize,
    /// Nodes including the root
    pub nodes: usize,
    /// Emitted accessor methods
    pub accessors: usize,
    /// Node counts per class
    pub classes: ClassCounts,
}

/// Size statistics of a whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Library tree
    pub libraries: KindStats,
    /// Version tree
    pub versions: KindStats,
    /// Plugin tree
    pub plugins: KindStats,
    /// Bundle tree
    pub bundles: KindStats,
}

impl CatalogStats {
    /// Entries across all kinds
    #[must_use]
    pub fn total_entries(&self) -> usize {
        [self.libraries, self.versions, self.plugins, self.bundles]
            .iter()
            .map(|stats| stats.entries)
            .sum()
    }

    /// Dual nodes across all kinds
    #[must_use]
    pub fn total_duals(&self) -> usize {
        [self.libraries, self.versions, self.plugins, self.bundles]
            .iter()
            .map(|stats| stats.classes.duals)
            .sum()
    }
}

/// Typed accessor catalog
///
/// Usage:
/// ```rust
/// use vcat_catalog::{Catalog, CatalogConfig, CatalogSource};
///
/// let source = CatalogSource::new()
///     .library("okhttp", "com.squareup.okhttp3:okhttp")
///     .library("okhttp.logging", "com.squareup.okhttp3:logging-interceptor")
///     .version("okhttp", "4.12.0");
/// let catalog = Catalog::build(source, &CatalogConfig::new()).unwrap();
///
/// let okhttp = catalog.libraries().get("okhttp").unwrap();
/// assert_eq!(okhttp.default_value(), Some("com.squareup.okhttp3:okhttp"));
/// assert_eq!(catalog.versions().get("okhttp").unwrap().single(), Some("4.12.0"));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    parser: AliasParser,
    libraries: KindTree,
    versions: KindTree,
    plugins: KindTree,
    bundles: KindTree,
}

impl Catalog {
    /// Build a catalog from its flat source
    ///
    /// # Errors
    /// - [`CatalogError::Tree`] for malformed, duplicate or conflicting
    ///   aliases in any kind
    /// - [`CatalogError::UnknownBundleMember`] if bundle validation is on
    ///   and a member names no library entry
    pub fn build(source: CatalogSource, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let parser = config.parser();
        let parts = source.into_parts();

        let libraries = KindTree::build(EntryKind::Library, &parser, parts.libraries)?;
        let versions = KindTree::build(EntryKind::Version, &parser, parts.versions)?;
        let plugins = KindTree::build(EntryKind::Plugin, &parser, parts.plugins)?;
        let bundles = build_bundles(
            &parser,
            parts.bundles,
            config.validate_bundles.then_some(&libraries),
        )?;

        for entry in versions.tree.entries() {
            if let Some(constraint) = entry.payload().as_version() {
                if constraint.single().is_none() {
                    tracing::warn!(
                        alias = %entry.alias(),
                        constraint = %constraint,
                        "version has no single-string form"
                    );
                }
            }
        }

        let catalog = Self {
            name: config.name.clone(),
            parser,
            libraries,
            versions,
            plugins,
            bundles,
        };
        let stats = catalog.stats();
        tracing::info!(
            name = %catalog.name,
            libraries = stats.libraries.entries,
            versions = stats.versions.entries,
            plugins = stats.plugins.entries,
            bundles = stats.bundles.entries,
            duals = stats.total_duals(),
            "built catalog"
        );
        Ok(catalog)
    }

    /// Catalog name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parser aliases were normalized with
    #[inline]
    #[must_use]
    pub fn parser(&self) -> &AliasParser {
        &self.parser
    }

    /// Root of the library accessors
    #[inline]
    #[must_use]
    pub fn libraries(&self) -> Namespace<'_, Libraries> {
        Namespace::root(self)
    }

    /// Root of the version accessors
    #[inline]
    #[must_use]
    pub fn versions(&self) -> Namespace<'_, Versions> {
        Namespace::root(self)
    }

    /// Root of the plugin accessors
    #[inline]
    #[must_use]
    pub fn plugins(&self) -> Namespace<'_, Plugins> {
        Namespace::root(self)
    }

    /// Root of the bundle accessors
    #[inline]
    #[must_use]
    pub fn bundles(&self) -> Namespace<'_, Bundles> {
        Namespace::root(self)
    }

    /// Tree, classification and method tables of `kind`
    #[must_use]
    pub fn view(&self, kind: EntryKind) -> &KindTree {
        match kind {
            EntryKind::Library => &self.libraries,
            EntryKind::Version => &self.versions,
            EntryKind::Plugin => &self.plugins,
            EntryKind::Bundle => &self.bundles,
        }
    }

    /// Size statistics per kind
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            libraries: self.libraries.stats(),
            versions: self.versions.stats(),
            plugins: self.plugins.stats(),
            bundles: self.bundles.stats(),
        }
    }

    /// Listing of every accessor chain, kind by kind
    #[must_use]
    pub fn render(&self) -> String {
        EntryKind::ALL
            .iter()
            .map(|kind| {
                let view = self.view(*kind);
                let prefix = format!("{}.{}", self.name, kind.group_name());
                view.accessors.render(&view.tree, &prefix)
            })
            .collect()
    }
}

fn build_bundles(
    parser: &AliasParser,
    entries: Vec<(String, Payload)>,
    libraries: Option<&KindTree>,
) -> Result<KindTree, CatalogError> {
    let mut builder = TreeBuilder::new(EntryKind::Bundle, parser.clone());
    for (alias, payload) in entries {
        if let (Some(libraries), Some(members)) = (libraries, payload.as_members()) {
            if let Some(member) = members
                .iter()
                .find(|member| !is_library(parser, libraries, member))
            {
                return Err(CatalogError::UnknownBundleMember {
                    bundle: alias,
                    member: member.clone(),
                });
            }
        }
        builder
            .insert(&alias, payload)
            .map_err(CatalogError::tree(EntryKind::Bundle))?;
    }
    Ok(KindTree::new(builder.build()))
}

fn is_library(parser: &AliasParser, libraries: &KindTree, member: &str) -> bool {
    parser
        .parse(member)
        .ok()
        .and_then(|path| libraries.tree.find(&path))
        .is_some_and(|id| libraries.tree.node(id).leaf().is_some())
}
