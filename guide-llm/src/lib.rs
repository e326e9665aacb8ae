pub mod client;
pub mod providers;
pub mod provider;

// Re-export our client
pub use client::{LlmClient, AssistantText};
pub use provider::{LlmProvider, LlmError, ProviderInfo, EnvVar};

// Re-export commonly used openai_dive types for consumers
pub use openai_dive::v1::resources::chat::{
    ChatCompletionParameters,
    ChatCompletionResponse,
    ChatMessage,
    ChatMessageContent,
};
pub use openai_dive::v1::resources::model::ListModelResponse;
