use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use image::{ImageFormat, RgbImage};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{entities::DetectedItem, ports::ObjectDetector},
};

/// Client for an object-detection model served over HTTP.
///
/// Sends `{"image": <base64 JPEG>, "size": <inference size>}` and expects
/// `{"predictions": [{"name": .., "confidence": ..}]}` back.
#[derive(Debug, Clone)]
pub struct HttpObjectDetector {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    image: String,
    size: u32,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    name: String,
    confidence: f64,
}

impl HttpObjectDetector {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    fn encode_jpeg(image: &RgbImage) -> Result<String, CoreError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| CoreError::DetectorFailure(format!("Failed to encode image: {}", e)))?;

        Ok(general_purpose::STANDARD.encode(buffer.into_inner()))
    }
}

impl ObjectDetector for HttpObjectDetector {
    async fn detect(
        &self,
        image: RgbImage,
        inference_size: u32,
    ) -> Result<Vec<DetectedItem>, CoreError> {
        let request = InferenceRequest {
            image: Self::encode_jpeg(&image)?,
            size: inference_size,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Detector request failed: {}", e);
                CoreError::DetectorFailure(format!("Detector request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Detector error: {} - {}", status, error_text);
            return Err(CoreError::DetectorFailure(format!(
                "Detector returned error: {} - {}",
                status, error_text
            )));
        }

        let inference: InferenceResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse detector response: {}", e);
            CoreError::DetectorFailure(format!("Failed to parse detector response: {}", e))
        })?;

        Ok(inference
            .predictions
            .into_iter()
            .map(|prediction| DetectedItem::new(prediction.name, prediction.confidence))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_image_is_jpeg() {
        let encoded = HttpObjectDetector::encode_jpeg(&RgbImage::new(8, 8)).unwrap();
        let bytes = general_purpose::STANDARD.decode(encoded).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_detector_failure() {
        let detector = HttpObjectDetector::new("http://127.0.0.1:9/predict".to_string());

        let result = detector.detect(RgbImage::new(8, 8), 640).await;

        assert!(matches!(result, Err(CoreError::DetectorFailure(_))));
    }
}
