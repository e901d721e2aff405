use crate::{message, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(message::list_messages))
        .route("/submit", post(message::submit_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
