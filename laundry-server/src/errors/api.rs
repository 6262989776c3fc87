use super::BoardError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Board error: {0}")]
    BoardError(#[from] BoardError),
}
