use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use laundry_api::models::Board;
use tokio::sync::watch;

use crate::errors::{ApiError, BoardError};
use crate::services::RenderService;

#[derive(Clone)]
pub struct BoardState {
    pub board: watch::Receiver<Board>,
    pub render_service: Arc<RenderService>,
}

pub fn board_router(board_state: BoardState) -> Router {
    Router::new()
        .route("/api/board", get(get_board))
        .route("/api/board/html", get(get_board_html))
        .with_state(board_state)
}

#[utoipa::path(
    get,
    path = "/api/board",
    tag = "board",
    responses(
        (status = 200, description = "Machines from the latest poll cycle", body = Board),
        (status = 503, description = "No poll cycle has completed yet")
    )
)]
pub async fn get_board(State(state): State<BoardState>) -> Result<Json<Board>, ApiError> {
    let board = state.board.borrow().clone();

    if board.is_pending() {
        return Err(BoardError::Pending.into());
    }

    Ok(Json(board))
}

#[utoipa::path(
    get,
    path = "/api/board/html",
    tag = "board",
    responses(
        (status = 200, description = "Rendered board fragment", content_type = "text/html", body = String)
    )
)]
pub async fn get_board_html(State(state): State<BoardState>) -> Html<String> {
    let board = state.board.borrow().clone();

    Html(state.render_service.board(&board))
}
