use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Invalid inference endpoint {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Malformed response from inference server: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
