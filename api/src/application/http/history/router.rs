use super::handlers::{
    add_history::{__path_add_history, add_history},
    get_history::{__path_get_history, get_history},
    get_latest_history::{__path_get_latest_history, get_latest_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(add_history, get_latest_history, get_history))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history/add", state.args.server.root_path),
            post(add_history),
        )
        .route(
            &format!("{}/history/latest", state.args.server.root_path),
            get(get_latest_history),
        )
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history),
        )
}
