use std::sync::Arc;

use axum::Router;
use laundry_api::models::Board;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::RenderService;

pub fn create_app(settings: &Arc<Settings>, board: watch::Receiver<Board>) -> Router {
    let render_service = Arc::new(RenderService::new(settings.dashboard.clone()));

    let board_state = BoardState {
        board,
        render_service,
    };

    Router::new()
        .merge(dashboard_router(board_state.clone()))
        .merge(board_router(board_state.clone()))
        .merge(sse_router(board_state))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
}
