pub mod groq;
pub mod openai;
pub mod openai_compatible;
pub mod ollama;
