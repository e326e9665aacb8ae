use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

use super::app_state::AppState;
use super::controller;

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Pages, json api and request tracing.
///
/// - `/`, `/image`, `/video`: the form pages (GET renders, POST submits)
/// - `/api/v1/selections`, `/api/v1/prompts/{kind}`: json api
pub fn router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .route("/", get(controller::index))
        .route("/image", get(controller::image_page).post(controller::submit_image))
        .route("/video", get(controller::video_page).post(controller::submit_video));

    let api = Router::new()
        .route("/v1/selections", get(controller::list_selections))
        .route("/v1/prompts/{kind}", post(controller::generate_prompt));

    Router::new()
        .merge(pages)
        .nest("/api", api)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Binds `host:port` and serves until the process is stopped.
pub async fn serve(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!(target: "server", "Prompt Generation Guide listening on http://{host}:{port}");
            listener
        }
        Err(err) => {
            error!(target: "server", "Failed to bind to {host}:{port}. {}", err);
            return Err(err);
        }
    };

    axum::serve(listener, router(state).into_make_service()).await
}
