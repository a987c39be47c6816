//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;
use skillmap_core::{Result, SkillmapConfig};
use skillmap_graph::{PlanOptions, SkillGraph, SkillMatcher};
use skillmap_store::{GraphSource, SnapshotStore};
use tracing::info;

/// A built graph plus everything derived from it. Never mutated after construction.
pub struct ActiveOntology {
    pub graph: SkillGraph,
    pub matcher: SkillMatcher,
    pub source: GraphSource,
}

impl ActiveOntology {
    pub fn new(graph: SkillGraph, source: GraphSource) -> Result<Self> {
        let matcher = SkillMatcher::new(&graph)?;
        Ok(Self {
            graph,
            matcher,
            source,
        })
    }
}

/// Shared application state accessible from all route handlers.
///
/// Handlers clone the active `Arc` and drop the lock before querying.
/// A rebuild prepares a complete [`ActiveOntology`] first and then swaps
/// the pointer, so in-flight queries keep the graph they started with.
pub struct AppState {
    pub config: SkillmapConfig,
    pub store: SnapshotStore,
    active: RwLock<Arc<ActiveOntology>>,
}

impl AppState {
    pub fn new(
        config: SkillmapConfig,
        store: SnapshotStore,
        graph: SkillGraph,
        source: GraphSource,
    ) -> Result<Self> {
        let active = ActiveOntology::new(graph, source)?;
        Ok(Self {
            config,
            store,
            active: RwLock::new(Arc::new(active)),
        })
    }

    /// Current ontology handle.
    pub fn ontology(&self) -> Arc<ActiveOntology> {
        self.active.read().clone()
    }

    /// Replace the active ontology with a freshly built one.
    pub fn swap(&self, graph: SkillGraph, source: GraphSource) -> Result<Arc<ActiveOntology>> {
        let next = Arc::new(ActiveOntology::new(graph, source)?);
        let stats = next.graph.stats();
        *self.active.write() = next.clone();
        info!(
            "Active ontology swapped ({:?}): {} skills, {} relationships",
            source, stats.node_count, stats.edge_count
        );
        Ok(next)
    }

    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            hours_per_week: self.config.hours_per_week,
            max_targets: self.config.max_plan_targets,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use skillmap_core::DataPaths;
    use tempfile::TempDir;

    /// State over the built-in catalog, rooted in a temp directory.
    pub fn test_state() -> (Arc<AppState>, TempDir) {
        let dir = TempDir::new().unwrap();
        let data_paths = DataPaths::new(dir.path()).unwrap();
        let store = SnapshotStore::open(&data_paths.snapshot_file).unwrap();
        let config = SkillmapConfig {
            port: 0,
            data_paths,
            hours_per_week: 10,
            max_plan_targets: 5,
        };
        let graph = SkillGraph::from_default_catalog().unwrap();
        let state = AppState::new(config, store, graph, GraphSource::BuiltIn).unwrap();
        (Arc::new(state), dir)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::test_state;
    use super::*;
    use skillmap_graph::RelationshipKind;

    #[test]
    fn test_swap_keeps_old_handles_valid() {
        let (state, _dir) = test_state();
        let before = state.ontology();

        let mut graph = SkillGraph::new();
        graph.add_relationship("html", "css", RelationshipKind::Progression);
        state.swap(graph, GraphSource::CatalogFile).unwrap();

        assert!(before.graph.contains("docker"));
        let after = state.ontology();
        assert!(!after.graph.contains("docker"));
        assert_eq!(after.source, GraphSource::CatalogFile);
        assert_eq!(after.matcher.find("HTML and CSS"), vec!["css", "html"]);
    }
}
