// llm/client.rs
use super::provider::{LlmProvider, LlmError, ProviderInfo};
use super::providers::{
    groq::GroqProvider,
    openai::OpenAIProvider,
    openai_compatible::OpenAICompatibleProvider,
    ollama::OllamaProvider,
};
use openai_dive::v1::resources::chat::{
    ChatCompletionParameters, ChatCompletionResponse, ChatMessage, ChatMessageContent,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

/// Provider Factory related method
impl LlmClient {
    /// Wrap an already constructed provider
    pub fn from_provider(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Create a Groq provider from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env_groq() -> Option<Self> {
        GroqProvider::from_env().map(|provider| Self {
            provider: Box::new(provider),
        })
    }

    pub fn groq(api_key: String, base_url: Option<String>) -> Self {
        Self {
            provider: Box::new(GroqProvider::new(api_key, base_url)),
        }
    }

    pub fn openai(api_key: String) -> Self {
        Self {
            provider: Box::new(OpenAIProvider::new(api_key)),
        }
    }

    pub fn compatible(api_key: String, base_url: String) -> Self {
        Self {
            provider: Box::new(OpenAICompatibleProvider::new(api_key, base_url)),
        }
    }

    pub fn ollama(base_url: Option<String>) -> Self {
        Self {
            provider: Box::new(OllamaProvider::new(base_url)),
        }
    }

    /// Get information about all available providers
    pub fn list_providers() -> Vec<ProviderInfo> {
        vec![
            GroqProvider::info(),
            OpenAIProvider::info(),
            OpenAICompatibleProvider::info(),
            OllamaProvider::info(),
        ]
    }

    /// Look up the static information of a provider by name
    pub fn provider_info(provider_name: &str) -> Option<ProviderInfo> {
        Self::list_providers()
            .into_iter()
            .find(|info| info.name == provider_name)
    }

    /// Create a provider dynamically based on name and environment values
    pub fn create_provider(provider_name: &str, env_values: &HashMap<String, String>) -> Result<Self, LlmError> {
        match provider_name {
            "groq" => {
                let api_key = env_values.get("GROQ_API_KEY")
                    .ok_or("GROQ_API_KEY not found")?;
                let base_url = env_values.get("GROQ_BASE_URL").cloned();
                Ok(Self::groq(api_key.clone(), base_url))
            },
            "openai" => {
                let api_key = env_values.get("OPENAI_API_KEY")
                    .ok_or("OPENAI_API_KEY not found")?;
                Ok(Self::openai(api_key.clone()))
            },
            "openai_compatible" => {
                let api_key = env_values.get("OPENAI_COMPATIBLE_API_KEY")
                    .ok_or("OPENAI_COMPATIBLE_API_KEY not found")?;
                let base_url = env_values.get("OPENAI_COMPATIBLE_BASE_URL")
                    .ok_or("OPENAI_COMPATIBLE_BASE_URL not found")?;
                Ok(Self::compatible(api_key.clone(), base_url.clone()))
            },
            "ollama" => {
                let base_url = env_values.get("OLLAMA_BASE_URL").cloned();
                Ok(Self::ollama(base_url))
            },
            _ => Err(format!("Unknown provider: {}", provider_name).into())
        }
    }
}

/// Provider Delegate
impl LlmClient {
    pub async fn default_model(&self) -> Result<String, LlmError> {
        self.provider.default_model().await
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

/// Higher level chat client
impl LlmClient {
    pub async fn chat(&self, request: ChatCompletionParameters) -> Result<ChatCompletionResponse, LlmError> {
        let response = self.provider
            .chat(request)
            .await?
            .extract_think_content();

        Ok(response)
    }
}

fn think_regex() -> &'static Regex {
    static THINK: OnceLock<Regex> = OnceLock::new();
    THINK.get_or_init(|| Regex::new(r"(?s)<think>(.*?)</think>").expect("valid think regex"))
}

pub trait ExtractThinkContent {
    /// Extract <think> content from assistant messages and move it to reasoning_content
    fn extract_think_content(self) -> ChatCompletionResponse;
}

impl ExtractThinkContent for ChatCompletionResponse {
    fn extract_think_content(mut self) -> ChatCompletionResponse {
        let think_regex = think_regex();
        for choice in &mut self.choices {
            if let ChatMessage::Assistant { reasoning_content, content, .. } = &mut choice.message {
                if let Some(ChatMessageContent::Text(content_text)) = content {
                    let reasoning = think_regex
                        .captures(content_text)
                        .and_then(|c| c.get(1))
                        .map(|m| m.as_str().trim().to_string());
                    if let Some(reasoning) = reasoning {
                        *reasoning_content = Some(reasoning);
                        let cleaned = think_regex.replace_all(content_text, "").trim().to_string();
                        *content = if cleaned.is_empty() { None } else { Some(ChatMessageContent::Text(cleaned)) };
                    }
                }
            }
        }
        self
    }
}

pub trait AssistantText {
    /// Plain text of the first assistant choice, if any
    fn assistant_text(&self) -> Option<String>;
}

impl AssistantText for ChatCompletionResponse {
    fn assistant_text(&self) -> Option<String> {
        self.choices.first().and_then(|choice| match &choice.message {
            ChatMessage::Assistant { content: Some(ChatMessageContent::Text(text)), .. } => Some(text.clone()),
            _ => None,
        })
    }
}
