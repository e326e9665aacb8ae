//! Offline provider shared by the handler and headless tests.

use async_trait::async_trait;
use guide_core::{ModelSettings, PromptGenerator};
use guide_llm::provider::{LlmError, LlmProvider, ProviderInfo};
use guide_llm::{ChatCompletionParameters, ChatCompletionResponse, ChatMessage, ChatMessageContent, ListModelResponse, LlmClient};
use std::sync::{Arc, Mutex};

/// Answers every request with a fixed text, or fails, and keeps the system prompts it saw
pub struct EchoProvider {
    reply: Result<String, String>,
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl LlmProvider for EchoProvider {
    async fn models(&self) -> Result<ListModelResponse, LlmError> {
        Err("not supported".into())
    }

    async fn chat(&self, request: ChatCompletionParameters) -> Result<ChatCompletionResponse, LlmError> {
        if let Some(ChatMessage::System { content: ChatMessageContent::Text(text), .. }) = request.messages.first() {
            self.seen.lock().unwrap().push(text.clone());
        }
        let text = self.reply.clone()?;
        let response = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "created": 0,
            "model": request.model,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": text }
            }]
        }))?;
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "echo"
    }

    fn info() -> ProviderInfo {
        ProviderInfo {
            name: "echo",
            display_name: "Echo test provider",
            env_vars: vec![],
        }
    }
}

/// Generator backed by an [`EchoProvider`], plus the system prompts it receives.
pub fn echo_generator(reply: Result<&str, &str>) -> (PromptGenerator, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let provider = EchoProvider {
        reply: reply.map(String::from).map_err(String::from),
        seen: seen.clone(),
    };
    let generator = PromptGenerator::new(
        Arc::new(LlmClient::from_provider(Box::new(provider))),
        ModelSettings {
            model_name: "llama-3.1-8b-instant".to_string(),
            temperature: 0.5,
        },
    );
    (generator, seen)
}
