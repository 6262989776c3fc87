use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use super::BoardState;

pub fn dashboard_router(board_state: BoardState) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .with_state(board_state)
}

pub async fn get_dashboard(State(state): State<BoardState>) -> Html<String> {
    let board = state.board.borrow().clone();

    Html(state.render_service.page(&board))
}
