//! Startup and rebuild: pick the graph source and keep the snapshot current.

use std::path::Path;

use serde::Serialize;
use skillmap_core::{Result, SkillCatalog};
use skillmap_graph::SkillGraph;
use tracing::info;

use crate::catalog::load_catalog;
use crate::snapshot::SnapshotStore;

/// Where the active graph came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphSource {
    Snapshot,
    CatalogFile,
    BuiltIn,
}

/// Load the stored snapshot, or build from the catalog and persist it.
pub fn bootstrap(store: &SnapshotStore, catalog_file: &Path) -> Result<(SkillGraph, GraphSource)> {
    if let Some(graph) = store.load()? {
        info!("Using ontology snapshot {}", store.path().display());
        return Ok((graph, GraphSource::Snapshot));
    }
    rebuild(store, catalog_file)
}

/// Build from the catalog file (or the built-in catalog) and persist the snapshot.
pub fn rebuild(store: &SnapshotStore, catalog_file: &Path) -> Result<(SkillGraph, GraphSource)> {
    let (catalog, source) = if catalog_file.is_file() {
        (load_catalog(catalog_file)?, GraphSource::CatalogFile)
    } else {
        (SkillCatalog::default_catalog(), GraphSource::BuiltIn)
    };

    let graph = SkillGraph::build_default(&catalog)?;
    store.save(&graph)?;
    info!("Ontology rebuilt from {:?}", source);
    Ok((graph, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::save_catalog;
    use skillmap_core::SkillRelations;
    use tempfile::TempDir;

    #[test]
    fn test_bootstrap_builtin_then_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(dir.path().join("ontology.json")).unwrap();
        let catalog_file = dir.path().join("catalog.json");

        let (first, source) = bootstrap(&store, &catalog_file).unwrap();
        assert_eq!(source, GraphSource::BuiltIn);
        assert!(store.exists());

        let (second, source) = bootstrap(&store, &catalog_file).unwrap();
        assert_eq!(source, GraphSource::Snapshot);
        assert_eq!(first.relationships(), second.relationships());
    }

    #[test]
    fn test_rebuild_prefers_catalog_file() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(dir.path().join("ontology.json")).unwrap();
        let catalog_file = dir.path().join("catalog.json");

        let mut catalog = SkillCatalog::default();
        catalog.skill_relationships.insert(
            "rust".into(),
            SkillRelations {
                next_steps: vec!["tokio".into()],
                ..Default::default()
            },
        );
        save_catalog(&catalog_file, &catalog).unwrap();

        let (graph, source) = rebuild(&store, &catalog_file).unwrap();
        assert_eq!(source, GraphSource::CatalogFile);
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("tokio"));

        let reloaded = store.load().unwrap().unwrap();
        assert_eq!(reloaded.catalog(), &catalog);
    }
}
