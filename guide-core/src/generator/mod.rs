pub mod generator;

pub use generator::{GeneratedPrompt, PromptGenerator};
