use guide_llm::LlmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("The model returned no text")]
    EmptyResponse,
    #[error("Unknown {category} value: {value:?}")]
    UnknownSelection {
        category: &'static str,
        value: String,
    },
}
