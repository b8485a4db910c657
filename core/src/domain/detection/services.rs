use tracing::{error, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::{
        entities::{AggregationResult, ImageDetection, ImageInput},
        helpers::unique_preserving_order,
        ports::{DetectionService, ObjectDetector},
    },
    generation::ports::LLMClient,
    history::ports::HistoryStore,
};

/// Runs the detector over every image in input order and merges the labels.
///
/// A failure on any image aborts the whole batch; detections already gathered
/// for earlier images are dropped.
pub async fn aggregate_detections<D: ObjectDetector>(
    detector: &D,
    images: Vec<ImageInput>,
    inference_size: u32,
) -> Result<AggregationResult, CoreError> {
    let mut details = Vec::with_capacity(images.len());
    let mut all_names = Vec::new();

    for (index, input) in images.into_iter().enumerate() {
        let image_key = input.image_key(index);

        let image = tokio::task::spawn_blocking(move || input.decode())
            .await
            .map_err(|e| {
                error!(image = %image_key, "Decode task failed: {}", e);
                CoreError::InternalServerError
            })?
            .inspect_err(|e| {
                warn!(image = %image_key, "Failed to decode image: {}", e);
            })?;

        let items = detector
            .detect(image, inference_size)
            .await
            .map_err(|e| {
                error!(image = %image_key, "Detector failed: {}", e);
                match e {
                    CoreError::DetectorFailure(_) => e,
                    other => CoreError::DetectorFailure(other.to_string()),
                }
            })?;

        all_names.extend(items.iter().map(|item| item.name.clone()));
        details.push(ImageDetection { image_key, items });
    }

    Ok(AggregationResult {
        details,
        unique_ingredients: unique_preserving_order(&all_names),
    })
}

impl<D, LLM, H> DetectionService for Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    #[instrument(skip(self, images), fields(image_count = images.len()))]
    async fn aggregate(&self, images: Vec<ImageInput>) -> Result<AggregationResult, CoreError> {
        aggregate_detections(self.detector.as_ref(), images, self.inference_size).await
    }
}
