use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use critiq_db::ReviewRecord;

use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// Missing `code` is treated the same as empty and rejected downstream
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
    #[serde(rename = "optimizedCode", skip_serializing_if = "Option::is_none")]
    pub optimized_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Serve the embedded single-page UI
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Submit code for review
///
/// Runs the full workflow: validate, generate, parse, store. The response
/// carries only what the page needs to render; the stored record is
/// available through the history endpoints.
pub async fn submit_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let record = state.service.submit(&request.code).await?;

    Ok(Json(ReviewResponse {
        review: record.review,
        optimized_code: record.optimized_code,
    }))
}

/// List stored reviews, most recent first
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<ReviewRecord>>> {
    let records = state.service.list().await?;
    Ok(Json(records))
}

/// Delete a stored review
///
/// Succeeds whether or not the id exists; the body reports which case it
/// was.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.service.delete(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
