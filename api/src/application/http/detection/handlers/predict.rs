use axum::extract::{Multipart, State};
use larder_core::domain::detection::{
    entities::{AggregationResult, ImageDetection},
    ports::DetectionService,
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

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct PredictResponse {
    pub detected_details: Vec<ImageDetection>,
    pub detected_ingredients: Vec<String>,
}

impl From<AggregationResult> for PredictResponse {
    fn from(result: AggregationResult) -> Self {
        Self {
            detected_details: result.details,
            detected_ingredients: result.unique_ingredients,
        }
    }
}

#[utoipa::path(
    post,
    path = "/predict",
    tag = "detection",
    summary = "Detect ingredients",
    description = "Runs the ingredient detector on every uploaded image and returns the per-image detections plus the deduplicated ingredient list.",
    request_body(content = UploadImagesForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = PredictResponse),
        (status = 400, description = "An image could not be decoded", body = ApiErrorResponse),
        (status = 502, description = "The detector failed", body = ApiErrorResponse)
    ),
)]
pub async fn predict(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<PredictResponse>, ApiError> {
    let images = read_image_uploads(multipart).await?;

    let result = state
        .service
        .aggregate(images)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PredictResponse::from(result)))
}
