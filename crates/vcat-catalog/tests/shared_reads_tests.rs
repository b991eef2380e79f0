//! A built catalog is read concurrently without synchronization.

use std::sync::Arc;
use std::thread;
use vcat_catalog::Catalog;
use vcat_test_utils::{android_catalog, ANDROID_LIBRARIES, ANDROID_VERSIONS};

#[test]
fn scoped_threads_share_one_catalog() {
    let catalog = android_catalog();
    let expected = catalog.render();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let catalog = &catalog;
                scope.spawn(move || {
                    for (alias, coordinate) in ANDROID_LIBRARIES {
                        let library = catalog.libraries().resolve(alias).unwrap();
                        assert_eq!(library.value(), Some(*coordinate));
                    }
                    catalog.render()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn arc_catalog_moves_across_threads() {
    let catalog: Arc<Catalog> = Arc::new(android_catalog());

    let workers: Vec<_> = ANDROID_VERSIONS
        .iter()
        .map(|(alias, version)| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let single = catalog.versions().resolve(alias).and_then(|v| v.single());
                assert_eq!(single, Some(*version));
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
}

#[test]
fn handles_cross_scoped_threads() {
    let catalog = android_catalog();
    let ui = catalog.libraries().resolve("androidx-ui").unwrap();

    let value = thread::scope(|scope| scope.spawn(move || ui.default_value()).join().unwrap());
    assert_eq!(value, Some("androidx.compose.ui:ui"));
}
