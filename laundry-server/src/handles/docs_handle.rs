use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::*;

#[derive(OpenApi)]
#[openapi(
    paths(get_board, get_board_html),
    tags((name = "board", description = "Laundry room machine status"))
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api/openapi.json", get(get_openapi))
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
