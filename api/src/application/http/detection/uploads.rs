use axum::extract::Multipart;
use larder_core::domain::detection::entities::ImageInput;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const UPLOAD_FIELD: &str = "files";
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const MAX_IMAGES: usize = 10;
pub const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE * MAX_IMAGES + 1024 * 1024;

/// Multipart body accepted by the detection endpoints
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadImagesForm {
    #[schema(value_type = Vec<String>, format = Binary)]
    files: Vec<Vec<u8>>,
}

/// Collects every `files` part, in upload order.
pub async fn read_image_uploads(mut multipart: Multipart) -> Result<Vec<ImageInput>, ApiError> {
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        if images.len() == MAX_IMAGES {
            return Err(ApiError::BadRequest(format!(
                "Too many images. At most {} per request",
                MAX_IMAGES
            )));
        }

        images.push(ImageInput::Bytes(data));
    }

    if images.is_empty() {
        warn!("Detection request without images");
        return Err(ApiError::UnprocessableEntity(format!(
            "Missing {} field",
            UPLOAD_FIELD
        )));
    }

    Ok(images)
}
