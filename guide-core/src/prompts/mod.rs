pub mod request;
pub mod selections;
pub mod template;

pub use request::{PromptKind, PromptRequest};
pub use selections::{Category, NONE};
pub use template::{content_prompt, image_prompt, negative_prompt, video_prompt};

#[cfg(test)]
mod tests;
