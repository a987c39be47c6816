//! Skill listing, cluster and mention-extraction routes.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use skillmap_graph::cluster::DEFAULT_CLUSTER_DEPTH;
use skillmap_graph::ClusterResult;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on cluster depth accepted over HTTP.
const MAX_CLUSTER_DEPTH: usize = 6;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/skills", get(list_skills))
        .route("/skills/{skill}/cluster", get(get_cluster))
        .route("/skills/extract", post(extract_skills))
}

#[derive(Debug, Deserialize)]
pub struct ClusterParams {
    depth: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    text: String,
}

/// GET /api/skills — every skill with its metadata.
async fn list_skills(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let ontology = state.ontology();
    let skills = ontology.graph.skills();
    Json(serde_json::json!({
        "skills": skills,
        "total": skills.len(),
    }))
}

/// GET /api/skills/:skill/cluster?depth=N — neighborhood of a skill.
async fn get_cluster(
    State(state): State<Arc<AppState>>,
    Path(skill): Path<String>,
    Query(params): Query<ClusterParams>,
) -> Result<Json<ClusterResult>, ApiError> {
    let depth = params
        .depth
        .unwrap_or(DEFAULT_CLUSTER_DEPTH)
        .min(MAX_CLUSTER_DEPTH);
    let cluster = state.ontology().graph.get_skill_cluster(&skill, depth)?;
    Ok(Json(cluster))
}

/// POST /api/skills/extract — skills mentioned verbatim in free text.
async fn extract_skills(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Json<serde_json::Value> {
    let skills = state.ontology().matcher.find(&req.text);
    Json(serde_json::json!({
        "skills": skills,
        "total": skills.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::test_state;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_skills() {
        let (state, _dir) = test_state();
        let Json(body) = list_skills(State(state)).await;
        let skills = body["skills"].as_array().unwrap();
        assert_eq!(skills.len() as u64, body["total"].as_u64().unwrap());
        assert!(skills.iter().any(|s| s["name"] == "docker"));
    }

    #[tokio::test]
    async fn test_cluster_route() {
        let (state, _dir) = test_state();
        let Json(cluster) = get_cluster(
            State(state),
            Path("Docker".to_string()),
            Query(ClusterParams { depth: Some(1) }),
        )
        .await
        .unwrap();

        assert_eq!(cluster.central_skill, "docker");
        assert!(cluster.prerequisites.iter().any(|e| e.skill == "linux basics"));
        assert!(cluster.next_steps.iter().any(|e| e.skill == "kubernetes"));
    }

    #[tokio::test]
    async fn test_cluster_unknown_skill_is_404() {
        let (state, _dir) = test_state();
        let err = get_cluster(
            State(state),
            Path("basket weaving".to_string()),
            Query(ClusterParams { depth: None }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_extract_route() {
        let (state, _dir) = test_state();
        let Json(body) = extract_skills(
            State(state),
            Json(ExtractRequest {
                text: "AWS and Docker knowledge is a plus".into(),
            }),
        )
        .await;
        assert_eq!(body["skills"], serde_json::json!(["aws", "docker"]));
    }
}
