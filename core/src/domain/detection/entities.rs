use std::path::PathBuf;

use bytes::Bytes;
use image::{ImageReader, RgbImage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// One labeled guess returned by the detector for a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedItem {
    pub name: String,
    pub confidence: f64, // 0.0-1.0, 3 decimals
}

impl DetectedItem {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };

        Self {
            name: name.into(),
            confidence: (confidence * 1000.0).round() / 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageDetection {
    #[serde(rename = "image")]
    pub image_key: String,
    #[serde(rename = "ingredients")]
    pub items: Vec<DetectedItem>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationResult {
    pub details: Vec<ImageDetection>,
    pub unique_ingredients: Vec<String>,
}

/// An image handed to the aggregator, either uploaded bytes or a file on disk.
#[derive(Debug, Clone)]
pub enum ImageInput {
    Bytes(Bytes),
    Path(PathBuf),
}

impl ImageInput {
    /// Key reported in the detection details. Uploads get a synthetic,
    /// 1-indexed file name; paths are reported as given.
    pub fn image_key(&self, index: usize) -> String {
        match self {
            ImageInput::Bytes(_) => format!("upload_{}.jpg", index + 1),
            ImageInput::Path(path) => path.display().to_string(),
        }
    }

    /// Decodes the image into its canonical RGB8 representation.
    pub fn decode(&self) -> Result<RgbImage, CoreError> {
        let image = match self {
            ImageInput::Bytes(data) => image::load_from_memory(data)
                .map_err(|e| CoreError::DecodeError(e.to_string()))?,
            ImageInput::Path(path) => ImageReader::open(path)
                .map_err(|e| CoreError::DecodeError(format!("{}: {}", path.display(), e)))?
                .with_guessed_format()
                .map_err(|e| CoreError::DecodeError(format!("{}: {}", path.display(), e)))?
                .decode()
                .map_err(|e| CoreError::DecodeError(format!("{}: {}", path.display(), e)))?,
        };

        Ok(image.to_rgb8())
    }
}
