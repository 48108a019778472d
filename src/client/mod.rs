mod chat;
mod error;
pub mod types;


pub use chat::{ChatClient, DEFAULT_CHAT_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use error::ChatError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ModelTag};

/// Anything that can turn a prompt into a completion.
///
/// Calls are synchronous: the runner does not send the next prompt until
/// this returns.
pub trait Responder {
    fn respond(&self, prompt: &str) -> Result<String, ChatError>;
}

impl<R: Responder + ?Sized> Responder for &R {
    fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        (**self).respond(prompt)
    }
}
