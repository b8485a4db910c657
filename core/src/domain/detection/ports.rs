use std::future::Future;

use image::RgbImage;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::entities::{AggregationResult, DetectedItem, ImageInput},
};

/// Client for the external object-detection model
pub trait ObjectDetector: Send + Sync {
    fn detect(
        &self,
        image: RgbImage,
        inference_size: u32,
    ) -> impl Future<Output = Result<Vec<DetectedItem>, CoreError>> + Send;
}

/// Service trait for turning uploaded images into an ingredient list
pub trait DetectionService: Send + Sync {
    fn aggregate(
        &self,
        images: Vec<ImageInput>,
    ) -> impl Future<Output = Result<AggregationResult, CoreError>> + Send;
}
