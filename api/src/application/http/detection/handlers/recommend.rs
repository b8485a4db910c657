use axum::extract::{Multipart, State};
use larder_core::domain::{
    detection::{entities::ImageDetection, ports::DetectionService},
    recipe::{
        entities::{MatchResult, RecipeRecommendation},
        ports::RecipeService,
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
pub struct RecommendResponse {
    pub detected_details: Vec<ImageDetection>,
    pub detected_ingredients: Vec<String>,
    /// Up to three matches, or a single `{"message": ...}` notice
    #[schema(value_type = Vec<MatchResult>)]
    pub recommended_recipes: RecipeRecommendation,
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "detection",
    summary = "Recommend recipes from images",
    description = "Detects ingredients in the uploaded images and ranks the recipe corpus against them.",
    request_body(content = UploadImagesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, description = "An image could not be decoded", body = ApiErrorResponse),
        (status = 502, description = "The detector failed", body = ApiErrorResponse)
    ),
)]
pub async fn recommend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<RecommendResponse>, ApiError> {
    let images = read_image_uploads(multipart).await?;

    let result = state
        .service
        .aggregate(images)
        .await
        .map_err(ApiError::from)?;

    let recommended_recipes = state.service.recommend(&result.unique_ingredients);

    Ok(Response::OK(RecommendResponse {
        detected_details: result.details,
        detected_ingredients: result.unique_ingredients,
        recommended_recipes,
    }))
}
