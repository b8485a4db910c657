use axum::extract::State;
use larder_core::domain::history::{
    entities::HistoryEntry, ports::HistoryService, value_objects::DEFAULT_LATEST_COUNT,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/latest",
    tag = "history",
    summary = "Latest interactions",
    description = "Returns the five most recent history entries, newest first.",
    responses(
        (status = 200, body = Vec<HistoryEntry>)
    ),
)]
pub async fn get_latest_history(
    State(state): State<AppState>,
) -> Result<Response<Vec<HistoryEntry>>, ApiError> {
    let entries = state.service.latest_history(DEFAULT_LATEST_COUNT).await;

    Ok(Response::OK(entries))
}
