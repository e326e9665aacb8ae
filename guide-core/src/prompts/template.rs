use super::request::{PromptKind, PromptRequest};

static IMAGE_PROMPT: &str = "Create an image of {subject}, depicted as a {media_type} in {media_style} style, showcasing {attribute} attributes. Set the scene in a {environment} environment, influenced by {style_influence} and conveying a {mood} mood. Capture the scene from a {viewpoint} perspective using a {camera_type}, and render it with {rendering_detail}. Combine all and give me a single {prompt_type} prompt.";

static VIDEO_PROMPT: &str = "Create a captivating video featuring {subject}, presented as a {media_type} in the {media_style} style. Highlight the {attribute} aspects of the subject within a {environment} setting. Draw inspiration from {style_influence} and evoke a {mood} atmosphere. Frame the scene from a {viewpoint} perspective using a {camera_type}, and ensure the rendering detail is set to {rendering_detail}. Combine all and give me a single {prompt_type} prompt.";

static NEGATIVE_PROMPT: &str = "Generate a negative image generation prompt based on the following prompt: '{prompt}'";

/// Substitutes `{name}` placeholders in a single left to right pass.
///
/// Values are inserted verbatim and never rescanned, so a subject that itself
/// contains `{mood}` stays as typed. Unknown placeholders are kept as is.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + vars.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after
            .find('}')
            .and_then(|end| vars.iter().find(|(k, _)| *k == &after[..end]).map(|(_, v)| (end, *v)));
        match value {
            Some((end, v)) => {
                out.push_str(v);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn request_vars(request: &PromptRequest) -> [(&'static str, &str); 11] {
    [
        ("subject", request.subject.as_str()),
        ("media_type", request.media_type.as_str()),
        ("media_style", request.media_style.as_str()),
        ("attribute", request.attribute.as_str()),
        ("environment", request.environment.as_str()),
        ("style_influence", request.style_influence.as_str()),
        ("mood", request.mood.as_str()),
        ("viewpoint", request.viewpoint.as_str()),
        ("camera_type", request.camera_type.as_str()),
        ("rendering_detail", request.rendering_detail.as_str()),
        ("prompt_type", request.prompt_type.as_str()),
    ]
}

pub fn image_prompt(request: &PromptRequest) -> String {
    fill(IMAGE_PROMPT, &request_vars(request))
}

pub fn video_prompt(request: &PromptRequest) -> String {
    fill(VIDEO_PROMPT, &request_vars(request))
}

pub fn negative_prompt(prompt: &str) -> String {
    fill(NEGATIVE_PROMPT, &[("prompt", prompt)])
}

pub fn content_prompt(kind: PromptKind, request: &PromptRequest) -> String {
    match kind {
        PromptKind::Image => image_prompt(request),
        PromptKind::Video => video_prompt(request),
    }
}
