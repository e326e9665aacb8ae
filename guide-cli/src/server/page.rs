//! Server side rendering of the two form pages.

use guide_core::{Category, GeneratedPrompt, PromptKind, PromptRequest};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

pub const PAGE_TITLE: &str = "Prompt Generation Guide";
pub const PAGE_TEMPLATE: &str = "page.html";

/// Result block shown under the form after a submission.
pub enum Outcome {
    Generated(GeneratedPrompt),
    Failed(String),
}

/// Form state to render: the submitted values, or the defaults on a plain GET.
pub struct PageState<'a> {
    pub kind: PromptKind,
    pub request: &'a PromptRequest,
    pub negative: bool,
    pub outcome: Option<&'a Outcome>,
}

#[derive(Serialize)]
struct NavLink {
    path: &'static str,
    title: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct SelectView<'a> {
    field: &'static str,
    label: &'static str,
    values: &'static [&'static str],
    selected: &'a str,
}

/// Template environment with the page compiled in. Every value is html escaped.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;
    Ok(env)
}

pub fn render(env: &Environment<'_>, state: &PageState<'_>) -> Result<String, minijinja::Error> {
    let video = state.kind == PromptKind::Video;

    let links: Vec<NavLink> = [PromptKind::Image, PromptKind::Video]
        .into_iter()
        .map(|kind| NavLink {
            path: kind.path(),
            title: kind.title(),
            active: kind == state.kind,
        })
        .collect();

    // five dropdowns per column
    let selects: Vec<SelectView<'_>> = Category::ALL
        .iter()
        .map(|category| SelectView {
            field: category.field(),
            label: category.label(video),
            values: category.values(),
            selected: state.request.selection(*category),
        })
        .collect();
    let columns: Vec<&[SelectView<'_>]> = selects.chunks(5).collect();

    let (prompt, negative_prompt, error) = match state.outcome {
        Some(Outcome::Generated(generated)) => (Some(generated.prompt.as_str()), generated.negative_prompt.as_deref(), None),
        Some(Outcome::Failed(message)) => (None, None, Some(message.as_str())),
        None => (None, None, None),
    };

    let prompt_heading = match state.kind {
        PromptKind::Image => "Image Generation Prompt",
        PromptKind::Video => "Generated Prompt",
    };
    let button = if video { "Generate Video Prompt" } else { "Generate Image Prompt" };

    env.get_template(PAGE_TEMPLATE)?.render(context! {
        page_title => PAGE_TITLE,
        title => state.kind.title(),
        path => state.kind.path(),
        links,
        subject => state.request.subject.as_str(),
        columns,
        supports_negative => state.kind.supports_negative(),
        negative => state.negative,
        button,
        prompt_heading,
        prompt,
        negative_prompt,
        error,
    })
}
