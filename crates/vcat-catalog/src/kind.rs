//! Kind markers
//!
//! Zero-sized types selecting which of the four catalog trees a
//! [`Namespace`](crate::Namespace) navigates, and what its leaves yield.

use crate::value::VersionValue;
use vcat_tree::{CatalogEntry, EntryKind};

mod private {
    pub trait Sealed {}
}

/// Catalog kind known at compile time
pub trait Kind: private::Sealed + Copy + Send + Sync + 'static {
    /// Runtime kind tag
    const KIND: EntryKind;

    /// What a leaf accessor of this kind yields
    type Value<'c>;

    /// Read the typed value out of an entry of this kind
    fn value(entry: &CatalogEntry) -> Option<Self::Value<'_>>;
}

/// Library accessors, yielding `group:name` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Libraries;

/// Version accessors, yielding [`VersionValue`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Versions;

/// Plugin accessors, yielding plugin ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plugins;

/// Bundle accessors, yielding member library aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bundles;

impl private::Sealed for Libraries {}
impl private::Sealed for Versions {}
impl private::Sealed for Plugins {}
impl private::Sealed for Bundles {}

impl Kind for Libraries {
    const KIND: EntryKind = EntryKind::Library;
    type Value<'c> = &'c str;

    fn value(entry: &CatalogEntry) -> Option<&str> {
        entry.payload().as_coordinate()
    }
}

impl Kind for Versions {
    const KIND: EntryKind = EntryKind::Version;
    type Value<'c> = VersionValue<'c>;

    fn value(entry: &CatalogEntry) -> Option<VersionValue<'_>> {
        entry
            .payload()
            .as_version()
            .map(|constraint| VersionValue::new(entry.alias(), constraint))
    }
}

impl Kind for Plugins {
    const KIND: EntryKind = EntryKind::Plugin;
    type Value<'c> = &'c str;

    fn value(entry: &CatalogEntry) -> Option<&str> {
        entry.payload().as_coordinate()
    }
}

impl Kind for Bundles {
    const KIND: EntryKind = EntryKind::Bundle;
    type Value<'c> = &'c [String];

    fn value(entry: &CatalogEntry) -> Option<&[String]> {
        entry.payload().as_members()
    }
}
