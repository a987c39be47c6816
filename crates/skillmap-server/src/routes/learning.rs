//! Learning path and learning plan routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use skillmap_graph::{LearningPlan, PathResult};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/learning-path", post(find_path))
        .route("/learning-plan", post(plan_learning))
}

#[derive(Debug, Deserialize)]
pub struct PathRequest {
    #[serde(default)]
    current_skills: Vec<String>,
    target_skill: String,
}

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    current_skills: Vec<String>,
    target_skills: Vec<String>,
}

/// POST /api/learning-path — shortest route from known skills to a target.
async fn find_path(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PathRequest>,
) -> Result<Json<PathResult>, ApiError> {
    let result = state
        .ontology()
        .graph
        .find_learning_path(req.current_skills.as_slice(), &req.target_skill)?;
    Ok(Json(result))
}

/// POST /api/learning-plan — paths and timeline for several targets.
async fn plan_learning(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<LearningPlan>, ApiError> {
    let options = state.plan_options();
    let plan = state
        .ontology()
        .graph
        .plan_learning(
            req.current_skills.as_slice(),
            req.target_skills.as_slice(),
            &options,
        )?;
    Ok(Json(plan))
}
