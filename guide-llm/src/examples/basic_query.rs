// Basic query example: one system prompt, one completion, the same shape the prompt guide uses
use guide_llm::{client::LlmClient, provider::LlmError, AssistantText, ChatCompletionParameters, ChatMessage, ChatMessageContent};

#[tokio::main]
async fn main() -> Result<(), LlmError> {
    // Initialize Groq client from environment variable (GROQ_API_KEY)
    let client = LlmClient::from_env_groq()
        .ok_or("GROQ_API_KEY environment variable not set")?;

    let model = client.default_model().await?;
    println!("Using model: {}", model);

    let request = ChatCompletionParameters {
        model,
        messages: vec![
            ChatMessage::System {
                content: ChatMessageContent::Text("Create an image of a lighthouse in a storm. Give me a single prompt.".to_string()),
                name: None,
            }
        ],
        temperature: Some(0.7),
        ..Default::default()
    };

    let response = client.chat(request).await?;

    match response.assistant_text() {
        Some(text) => println!("Response: {}", text),
        None => println!("No text response received"),
    }

    Ok(())
}
