use crate::{handlers, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Embedded UI
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health))
        // Review workflow
        .route("/review", post(handlers::submit_review))
        .route("/review/{id}", delete(handlers::delete_review))
        .route("/reviews", get(handlers::list_reviews))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
