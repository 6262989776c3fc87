#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response has no `objects` array")]
    Shape,
}
