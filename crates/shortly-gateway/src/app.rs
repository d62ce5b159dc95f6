use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, method_not_allowed_handler, missing_id_handler, redirect_handler,
    shorten_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the router. Routes reject other methods with 405.
    ///
    /// axum answers HEAD from a GET route, so the redirect routes register
    /// an explicit HEAD handler to keep them GET-only. Shorten bodies are
    /// read in full, whatever their size.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(missing_id_handler).head(method_not_allowed_handler))
            .route("/{id}", get(redirect_handler).head(method_not_allowed_handler))
            .nest(
                "/api/v1",
                Router::new()
                    .route("/health", get(health_handler))
                    .route(
                        "/shorten",
                        post(shorten_handler).layer(DefaultBodyLimit::disable()),
                    ),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
