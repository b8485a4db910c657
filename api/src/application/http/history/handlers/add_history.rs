use axum::extract::State;
use larder_core::domain::history::{
    entities::HistoryEntry,
    ports::HistoryService,
    value_objects::{AppendHistoryInput, AppendOutcome, HistoryStatus},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    history::validators::AddHistoryForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct AddHistoryResponse {
    pub message: HistoryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<AppendOutcome> for AddHistoryResponse {
    fn from(outcome: AppendOutcome) -> Self {
        let reason = match outcome.status {
            HistoryStatus::Ignored => Some("empty recipe_name".to_string()),
            _ => None,
        };

        Self {
            message: outcome.status,
            item: outcome.entry,
            reason,
        }
    }
}

#[utoipa::path(
    post,
    path = "/add",
    tag = "history",
    summary = "Record an interaction",
    description = "Adds a searched or detected recipe to the history. An entry identical to the most recent one is skipped.",
    request_body(content = AddHistoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = AddHistoryResponse),
        (status = 422, description = "Missing recipe_name", body = ApiErrorResponse)
    ),
)]
pub async fn add_history(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<AddHistoryForm>,
) -> Result<Response<AddHistoryResponse>, ApiError> {
    let outcome = state
        .service
        .append_history(AppendHistoryInput {
            recipe_name: payload.recipe_name,
            hist_type: payload.hist_type,
        })
        .await;

    Ok(Response::OK(AddHistoryResponse::from(outcome)))
}
