mod gemini_client;
mod groq_client;

pub use gemini_client::GeminiDocumentClient;
pub use groq_client::GroqCompletionClient;
