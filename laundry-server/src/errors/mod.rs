pub mod api;
pub mod board;
pub mod fetch;
pub mod settings;

pub use api::ApiError;
pub use board::BoardError;
pub use fetch::FetchError;
pub use settings::SettingsError;

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde_json::json;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BoardError(e) => (e.status_code(), e.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": error_message
            }
        }));

        (status, body).into_response()
    }
}
