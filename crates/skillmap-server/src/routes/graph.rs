//! Graph lifecycle routes: stats, rebuild, snapshot.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use skillmap_store::rebuild;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/graph/stats", get(get_stats))
        .route("/graph/reload", post(reload_graph))
        .route("/graph/snapshot", post(save_snapshot))
}

/// GET /api/graph/stats — node and edge counts of the active graph.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let ontology = state.ontology();
    let stats = ontology.graph.stats();
    Json(serde_json::json!({
        "nodeCount": stats.node_count,
        "edgeCount": stats.edge_count,
        "edgesByKind": {
            "prerequisite": stats.prerequisite_edges,
            "co_requisite": stats.co_requisite_edges,
            "progression": stats.progression_edges,
        },
        "isolatedNodes": stats.isolated_nodes,
        "categories": stats.category_count,
        "source": ontology.source,
        "snapshotPath": state.store.path().display().to_string(),
    }))
}

/// POST /api/graph/reload — rebuild from the catalog, persist, swap.
async fn reload_graph(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (graph, source) = rebuild(&state.store, &state.config.data_paths.catalog_file)?;
    let active = state.swap(graph, source)?;
    let stats = active.graph.stats();
    Ok(Json(serde_json::json!({
        "reloaded": true,
        "source": source,
        "nodeCount": stats.node_count,
        "edgeCount": stats.edge_count,
    })))
}

/// POST /api/graph/snapshot — persist the active graph.
async fn save_snapshot(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ontology = state.ontology();
    state.store.save(&ontology.graph)?;
    Ok(Json(serde_json::json!({
        "saved": true,
        "path": state.store.path().display().to_string(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::test_state;
    use skillmap_core::SkillCatalog;
    use skillmap_store::{save_catalog, GraphSource};

    #[tokio::test]
    async fn test_stats_shape() {
        let (state, _dir) = test_state();
        let Json(body) = get_stats(State(state)).await;

        assert!(body["nodeCount"].as_u64().unwrap() > 0);
        assert!(body["edgeCount"].is_number());
        assert!(body["edgesByKind"]["co_requisite"].is_number());
        assert_eq!(body["source"], "built_in");
    }

    #[tokio::test]
    async fn test_snapshot_then_reload_from_catalog() {
        let (state, _dir) = test_state();

        let Json(body) = save_snapshot(State(state.clone())).await.unwrap();
        assert_eq!(body["saved"], true);
        assert!(state.store.exists());

        let mut catalog = SkillCatalog::default();
        catalog
            .skill_relationships
            .insert("rust".into(), Default::default());
        save_catalog(&state.config.data_paths.catalog_file, &catalog).unwrap();

        let Json(body) = reload_graph(State(state.clone())).await.unwrap();
        assert_eq!(body["source"], "catalog_file");
        assert_eq!(body["nodeCount"], 1);
        assert_eq!(state.ontology().source, GraphSource::CatalogFile);
    }
}
