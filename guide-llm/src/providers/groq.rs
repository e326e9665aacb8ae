// llm/providers/groq.rs
use crate::provider::{LlmProvider, LlmError, ProviderInfo, EnvVar};
use async_trait::async_trait;
use openai_dive::v1::{
    api::Client,
    resources::{
        chat::{ChatCompletionParameters, ChatCompletionResponse},
        model::ListModelResponse,
    },
};

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

pub struct GroqProvider {
    client: Client,
}

impl GroqProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let mut client = Client::new(api_key);
        let url = base_url.unwrap_or_else(|| GROQ_API_BASE.to_string());
        client.set_base_url(&url);
        Self { client }
    }

    /// Create Groq provider from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env() -> Option<Self> {
        std::env::var("GROQ_API_KEY").ok().map(|api_key| {
            let base_url = std::env::var("GROQ_BASE_URL").ok();
            Self::new(api_key, base_url)
        })
    }

    fn sanitize_request(&self, mut request: ChatCompletionParameters) -> ChatCompletionParameters {
        // Groq only knows about max_tokens
        if request.max_completion_tokens.is_some() {
            request.max_tokens = request.max_completion_tokens;
            request.max_completion_tokens = None;
        }
        request
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn models(&self) -> Result<ListModelResponse, LlmError> {
        let response = self.client.models().list().await
            .map_err(|e| Box::new(e) as LlmError)?;
        Ok(response)
    }

    async fn default_model(&self) -> Result<String, LlmError> {
        let models = self.models().await?;

        models.data.iter()
            .find(|m| m.id.to_lowercase().contains("llama"))
            .or_else(|| models.data.first())
            .map(|m| m.id.clone())
            .ok_or_else(|| "no model available".into())
    }

    async fn chat(&self, request: ChatCompletionParameters) -> Result<ChatCompletionResponse, LlmError> {
        let request = self.sanitize_request(request);
        let response = self.client.chat().create(request).await
            .map_err(|e| Box::new(e) as LlmError)?;
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "groq"
    }

    fn info() -> ProviderInfo {
        ProviderInfo {
            name: "groq",
            display_name: "Groq",
            env_vars: vec![
                EnvVar::required("GROQ_API_KEY", "Groq API key"),
                EnvVar::optional("GROQ_BASE_URL", "Override the Groq API base URL"),
            ],
        }
    }
}
