use axum::{routing::get, Router};

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/share/r/{reel_id}", get(handlers::share_reel))
        .route("/reel/{reel_id}", get(handlers::reel))
        .route("/share/v/{video_id}", get(handlers::share_video))
        .route("/watch", get(handlers::watch))
        .with_state(state)
}
