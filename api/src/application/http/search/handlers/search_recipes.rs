use axum::extract::State;
use larder_core::domain::generation::{
    entities::{GeneratedRecipe, GenerationOutcome},
    ports::RecipeGenerationService,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    search::validators::SearchRecipesForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub success: bool,
    pub query: String,
    /// Found recipes, or `[{"raw_output": ...}]` / `[{"error": ...}]`
    #[schema(value_type = Vec<GeneratedRecipe>)]
    pub recipes: GenerationOutcome,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "search",
    summary = "Search recipes",
    description = "Asks the language model for recipes matching a free-text query.",
    request_body(content = SearchRecipesForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = SearchRecipesResponse),
        (status = 422, description = "Missing or invalid query", body = ApiErrorResponse)
    ),
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<SearchRecipesForm>,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state.service.search_recipes(payload.query.clone()).await;

    Ok(Response::OK(SearchRecipesResponse {
        success: true,
        query: payload.query,
        recipes,
    }))
}
