use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_url_handler, get_url_handler, health_handler, index_handler, redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/shorten", post(create_url_handler))
            .route("/{short_code}", get(redirect_handler))
            .route("/v1/urls", post(create_url_handler))
            .route("/v1/urls/{short_code}", get(get_url_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
