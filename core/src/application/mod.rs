use tracing::info;

use crate::{
    domain::{
        common::{LarderConfig, entities::app_errors::CoreError, services::Service},
        history::services::HistoryLog,
        recipe::ports::RecipeCorpusSource,
    },
    infrastructure::{
        detection::HttpObjectDetector, history::JsonFileHistoryStore, llm::GroqLLMClient,
        recipe::JsonRecipeCorpusSource,
    },
};

pub type LarderService = Service<HttpObjectDetector, GroqLLMClient, JsonFileHistoryStore>;

/// Wires the production adapters. Fails when the recipe corpus cannot be
/// loaded; the history file is allowed to be missing or unreadable.
pub fn create_service(config: LarderConfig) -> Result<LarderService, CoreError> {
    let corpus = JsonRecipeCorpusSource::new(config.storage.recipes_path.clone()).load_corpus()?;
    info!(
        recipes = corpus.len(),
        path = %config.storage.recipes_path.display(),
        "Recipe corpus loaded"
    );

    let history = HistoryLog::new(
        JsonFileHistoryStore::new(config.storage.history_path.clone()),
        config.storage.history_capacity,
    );

    let detector = HttpObjectDetector::new(config.detector.endpoint.clone());
    let llm_client = GroqLLMClient::new(
        config.llm.api_key.clone(),
        config.llm.model.clone(),
        config.llm.base_url.clone(),
    );

    Ok(Service::new(
        detector,
        llm_client,
        corpus,
        history,
        config.detector.inference_size,
        config.llm.response_language,
    ))
}
