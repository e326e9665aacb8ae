use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use guide_core::GuideError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type ResultAPI<T> = std::result::Result<Json<T>, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Guide(#[from] GuideError),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Guide(GuideError::UnknownSelection { .. }) => StatusCode::BAD_REQUEST,
            WebError::Guide(GuideError::Llm(_)) => StatusCode::BAD_GATEWAY,
            WebError::Guide(GuideError::EmptyResponse) => StatusCode::BAD_GATEWAY,
            WebError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(target: "server", "request failed ({}): {}", status, self);

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
