use axum::extract::{Multipart, State};
use larder_core::domain::{
    detection::{entities::ImageDetection, ports::DetectionService},
    generation::{
        entities::{GeneratedRecipe, GenerationOutcome},
        ports::RecipeGenerationService,
    },
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    detection::uploads::{UploadImagesForm, read_image_uploads},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendLlmResponse {
    pub detected_details: Vec<ImageDetection>,
    pub detected_ingredients: Vec<String>,
    /// Generated recipes, or `[{"raw_output": ...}]` / `[{"error": ...}]`
    #[schema(value_type = Vec<GeneratedRecipe>)]
    pub recommended_recipes: GenerationOutcome,
}

#[utoipa::path(
    post,
    path = "/recommend_llm",
    tag = "detection",
    summary = "Generate recipes from images",
    description = "Detects ingredients in the uploaded images and asks the language model for recipes using them.",
    request_body(content = UploadImagesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecommendLlmResponse),
        (status = 400, description = "An image could not be decoded", body = ApiErrorResponse),
        (status = 502, description = "The detector failed", body = ApiErrorResponse)
    ),
)]
pub async fn recommend_llm(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<RecommendLlmResponse>, ApiError> {
    let images = read_image_uploads(multipart).await?;

    let result = state
        .service
        .aggregate(images)
        .await
        .map_err(ApiError::from)?;

    let recommended_recipes = state
        .service
        .generate_recipes(result.unique_ingredients.clone())
        .await;

    Ok(Response::OK(RecommendLlmResponse {
        detected_details: result.details,
        detected_ingredients: result.unique_ingredients,
        recommended_recipes,
    }))
}
