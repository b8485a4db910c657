use axum::extract::State;
use larder_core::domain::history::{entities::HistoryEntry, ports::HistoryService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "All interactions",
    description = "Returns the whole history, newest first.",
    responses(
        (status = 200, body = Vec<HistoryEntry>)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<Vec<HistoryEntry>>, ApiError> {
    Ok(Response::OK(state.service.all_history().await))
}
