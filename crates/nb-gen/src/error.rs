use thiserror::Error;

/// Failure of one generation call. None of these are retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered but produced no image part.
    #[error("No image returned. Try a more specific prompt.")]
    NoImage,
}
