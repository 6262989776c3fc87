use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("No laundry status has been fetched yet")]
    Pending,
}

impl BoardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardError::Pending => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
