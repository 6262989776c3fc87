use std::convert::Infallible;

use axum::extract::State;
use axum::response::Sse;
use axum::response::sse::{Event, KeepAlive};
use axum::routing::get;
use axum::Router;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

use super::BoardState;

pub fn sse_router(board_state: BoardState) -> Router {
    Router::new()
        .route("/api/event", get(sse_handler))
        .with_state(board_state)
}

/// Sends the current board on connect, then one event per poll cycle.
/// The stream ends once the poll loop is stopped.
pub async fn sse_handler(
    State(state): State<BoardState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let render_service = state.render_service.clone();

    let stream = WatchStream::new(state.board.clone()).map(move |board| {
        Ok(Event::default()
            .event("board")
            .data(render_service.board(&board)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
