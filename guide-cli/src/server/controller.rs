use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use guide_core::{Category, GeneratedPrompt, PromptKind, PromptRequest};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::app_state::AppState;
use super::page::{render, Outcome, PageState};
use crate::error::{ResultAPI, WebError};

/// Urlencoded body of the html form. The checkbox is absent when unchecked.
#[derive(Debug, Deserialize)]
pub struct PromptForm {
    #[serde(flatten)]
    pub request: PromptRequest,
    #[serde(default)]
    pub negative: Option<String>,
}

/// Json body of the api.
#[derive(Debug, Deserialize)]
pub struct ApiPromptRequest {
    #[serde(flatten)]
    pub request: PromptRequest,
    #[serde(default)]
    pub negative: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectionSet {
    pub field: &'static str,
    pub label: &'static str,
    pub values: &'static [&'static str],
}

pub async fn index() -> Redirect {
    Redirect::to(PromptKind::Image.path())
}

fn empty_page(state: &AppState, kind: PromptKind) -> Result<Html<String>, WebError> {
    let request = PromptRequest::default();
    let html = render(
        &state.templates,
        &PageState {
            kind,
            request: &request,
            negative: false,
            outcome: None,
        },
    )?;
    Ok(Html(html))
}

pub async fn image_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    empty_page(&state, PromptKind::Image)
}

pub async fn video_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    empty_page(&state, PromptKind::Video)
}

async fn submit(state: &AppState, kind: PromptKind, form: PromptForm) -> Result<(StatusCode, Html<String>), WebError> {
    let negative = form.negative.is_some();
    info!(target: "server", "{} submitted", kind.title());

    let (status, outcome) = match state.generator.generate(kind, &form.request, negative).await {
        Ok(generated) => (StatusCode::OK, Outcome::Generated(generated)),
        Err(e) => {
            let e = WebError::from(e);
            (e.status(), Outcome::Failed(e.to_string()))
        }
    };

    let html = render(
        &state.templates,
        &PageState {
            kind,
            request: &form.request,
            negative,
            outcome: Some(&outcome),
        },
    )?;
    Ok((status, Html(html)))
}

pub async fn submit_image(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PromptForm>,
) -> Result<(StatusCode, Html<String>), WebError> {
    submit(&state, PromptKind::Image, form).await
}

pub async fn submit_video(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PromptForm>,
) -> Result<(StatusCode, Html<String>), WebError> {
    submit(&state, PromptKind::Video, form).await
}

pub async fn list_selections() -> Json<Vec<SelectionSet>> {
    let sets = Category::ALL
        .iter()
        .map(|category| SelectionSet {
            field: category.field(),
            label: category.label(false),
            values: category.values(),
        })
        .collect();
    Json(sets)
}

pub async fn generate_prompt(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<PromptKind>,
    Json(payload): Json<ApiPromptRequest>,
) -> ResultAPI<GeneratedPrompt> {
    let generated = state
        .generator
        .generate(kind, &payload.request, payload.negative)
        .await?;
    Ok(Json(generated))
}
