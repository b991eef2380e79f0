//! Testing utilities for VCAT workspace
//!
//! Shared fixtures and helpers. The Android fixture is a real-world
//! Compose app catalog written with Gradle-style dashed aliases.

#![allow(missing_docs)]

use vcat_alias::AliasParser;
use vcat_catalog::{Catalog, CatalogConfig, CatalogSource};
use vcat_tree::{build_tree, EntryKind, NamespaceTree, Payload, VersionConstraint};

pub const ANDROID_LIBRARIES: &[(&str, &str)] = &[
    ("androidx-activity-compose", "androidx.activity:activity-compose"),
    ("androidx-compose-bom", "androidx.compose:compose-bom"),
    ("androidx-core-ktx", "androidx.core:core-ktx"),
    ("androidx-espresso-core", "androidx.test.espresso:espresso-core"),
    ("androidx-hilt-navigation-compose", "androidx.hilt:hilt-navigation-compose"),
    ("androidx-junit", "androidx.test.ext:junit"),
    ("androidx-lifecycle-runtime-ktx", "androidx.lifecycle:lifecycle-runtime-ktx"),
    ("androidx-lifecycle-viewmodel-compose", "androidx.lifecycle:lifecycle-viewmodel-compose"),
    ("androidx-material-icons-extended", "androidx.compose.material:material-icons-extended"),
    ("androidx-material3", "androidx.compose.material3:material3"),
    ("androidx-navigation-compose", "androidx.navigation:navigation-compose"),
    ("androidx-ui", "androidx.compose.ui:ui"),
    ("androidx-ui-graphics", "androidx.compose.ui:ui-graphics"),
    ("androidx-ui-test-junit4", "androidx.compose.ui:ui-test-junit4"),
    ("androidx-ui-test-manifest", "androidx.compose.ui:ui-test-manifest"),
    ("androidx-ui-tooling", "androidx.compose.ui:ui-tooling"),
    ("androidx-ui-tooling-preview", "androidx.compose.ui:ui-tooling-preview"),
    ("coil-compose", "io.coil-kt:coil-compose"),
    ("datastore-preferences", "androidx.datastore:datastore-preferences"),
    ("hilt-android", "com.google.dagger:hilt-android"),
    ("hilt-compiler", "com.google.dagger:hilt-compiler"),
    ("junit", "junit:junit"),
    ("kotlinx-coroutines-android", "org.jetbrains.kotlinx:kotlinx-coroutines-android"),
    ("kotlinx-serialization-json", "org.jetbrains.kotlinx:kotlinx-serialization-json"),
    ("okhttp", "com.squareup.okhttp3:okhttp"),
    ("okhttp-logging", "com.squareup.okhttp3:logging-interceptor"),
    ("retrofit", "com.squareup.retrofit2:retrofit"),
    ("retrofit-kotlinx-serialization", "com.squareup.retrofit2:converter-kotlinx-serialization"),
    ("socketio", "io.socket:socket.io-client"),
];

pub const ANDROID_VERSIONS: &[(&str, &str)] = &[
    ("activityCompose", "1.8.2"),
    ("agp", "8.2.2"),
    ("coil", "2.5.0"),
    ("composeBom", "2024.02.00"),
    ("coreKtx", "1.12.0"),
    ("coroutines", "1.7.3"),
    ("datastore", "1.0.0"),
    ("hilt", "2.50"),
    ("hiltNavigationCompose", "1.1.0"),
    ("kotlin", "1.9.22"),
    ("kotlinxSerializationJson", "1.6.2"),
    ("lifecycleRuntimeKtx", "2.7.0"),
    ("navigationCompose", "2.7.7"),
    ("okhttp", "4.12.0"),
    ("retrofit", "2.9.0"),
    ("socketio", "2.1.0"),
];

pub const ANDROID_PLUGINS: &[(&str, &str)] = &[
    ("android-application", "com.android.application"),
    ("hilt", "com.google.dagger.hilt.android"),
    ("kotlin-android", "org.jetbrains.kotlin.android"),
    ("kotlin-kapt", "org.jetbrains.kotlin.kapt"),
    ("kotlin-serialization", "org.jetbrains.kotlin.plugin.serialization"),
];

/// Android fixture; declares no bundles
pub fn android_source() -> CatalogSource {
    let mut source = CatalogSource::new();
    for (alias, coordinate) in ANDROID_LIBRARIES {
        source = source.library(*alias, *coordinate);
    }
    for (alias, version) in ANDROID_VERSIONS {
        source = source.version(*alias, version);
    }
    for (alias, id) in ANDROID_PLUGINS {
        source = source.plugin(*alias, *id);
    }
    source
}

/// Android fixture built with the Gradle-style configuration
pub fn android_catalog() -> Catalog {
    Catalog::build(android_source(), &CatalogConfig::gradle()).unwrap()
}

/// Android fixture plus two bundles over its libraries
pub fn android_catalog_with_bundles() -> Catalog {
    let source = android_source()
        .bundle(
            "compose-ui",
            ["androidx-ui", "androidx-ui-graphics", "androidx-ui-tooling-preview"],
        )
        .bundle("network", ["okhttp", "okhttp-logging", "retrofit"]);
    Catalog::build(source, &CatalogConfig::gradle()).unwrap()
}

pub fn coordinates(pairs: &[(&str, &str)]) -> Vec<(String, Payload)> {
    pairs
        .iter()
        .map(|(alias, coordinate)| {
            ((*alias).to_string(), Payload::Coordinate((*coordinate).to_string()))
        })
        .collect()
}

pub fn versions(pairs: &[(&str, &str)]) -> Vec<(String, Payload)> {
    pairs
        .iter()
        .map(|(alias, version)| {
            ((*alias).to_string(), Payload::Version(VersionConstraint::parse(version)))
        })
        .collect()
}

pub fn library_tree(parser: AliasParser, entries: Vec<(String, Payload)>) -> NamespaceTree {
    build_tree(EntryKind::Library, parser, entries).unwrap()
}

pub fn android_library_tree() -> NamespaceTree {
    library_tree(AliasParser::gradle(), coordinates(ANDROID_LIBRARIES))
}
