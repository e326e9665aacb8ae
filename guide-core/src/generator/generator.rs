use std::sync::Arc;

use guide_llm::{AssistantText, ChatCompletionParameters, ChatMessage, ChatMessageContent, LlmClient};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ModelSettings;
use crate::error::GuideError;
use crate::prompts::{content_prompt, negative_prompt, PromptKind, PromptRequest};

/// What a submission produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

/// Fills the templates and asks the configured model to turn them into prompts.
#[derive(Debug, Clone)]
pub struct PromptGenerator {
    llm: Arc<LlmClient>,
    settings: ModelSettings,
}

impl PromptGenerator {
    pub fn new(llm: Arc<LlmClient>, settings: ModelSettings) -> Self {
        Self { llm, settings }
    }

    pub fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    pub fn provider_name(&self) -> &'static str {
        self.llm.provider_name()
    }

    /// Single turn request: the filled template goes in as the system message.
    pub fn build_request(&self, system_prompt: String) -> ChatCompletionParameters {
        ChatCompletionParameters {
            model: self.settings.model_name.clone(),
            messages: vec![ChatMessage::System {
                content: ChatMessageContent::Text(system_prompt),
                name: None,
            }],
            temperature: Some(self.settings.temperature),
            ..Default::default()
        }
    }

    /// One round trip to the model. Errors are passed through untouched.
    pub async fn complete(&self, system_prompt: String) -> Result<String, GuideError> {
        debug!(target: "generator", model = %self.settings.model_name, "system prompt: {}", system_prompt);

        let request = self.build_request(system_prompt);
        let response = self.llm.chat(request).await?;

        response.assistant_text().ok_or(GuideError::EmptyResponse)
    }

    pub async fn image_prompt(&self, request: &PromptRequest) -> Result<String, GuideError> {
        self.complete(content_prompt(PromptKind::Image, request)).await
    }

    pub async fn video_prompt(&self, request: &PromptRequest) -> Result<String, GuideError> {
        self.complete(content_prompt(PromptKind::Video, request)).await
    }

    /// Asks for the negative counterpart of an already generated prompt.
    pub async fn negative_prompt(&self, prompt: &str) -> Result<String, GuideError> {
        self.complete(negative_prompt(prompt)).await
    }

    /// Validates the request, generates the prompt, then the negative prompt when asked for.
    ///
    /// `negative` is ignored for video prompts.
    pub async fn generate(&self, kind: PromptKind, request: &PromptRequest, negative: bool) -> Result<GeneratedPrompt, GuideError> {
        request.validate()?;
        if request.subject.trim().is_empty() {
            warn!(target: "generator", "empty subject, the {} template will read oddly", kind.title());
        }

        info!(target: "generator", kind = ?kind, negative, model = %self.settings.model_name, "generating prompt");
        let prompt = self.complete(content_prompt(kind, request)).await?;

        let negative_prompt = if negative && kind.supports_negative() {
            Some(self.negative_prompt(&prompt).await?)
        } else {
            None
        };

        Ok(GeneratedPrompt { prompt, negative_prompt })
    }
}
