use std::sync::Arc;

use crate::domain::{
    detection::ports::ObjectDetector, generation::ports::LLMClient, history::ports::HistoryStore,
    history::services::HistoryLog, recipe::entities::RecipeCorpus,
};

/// Application service. Every domain service trait is implemented on it; the
/// collaborators are injected so tests can swap any of them.
pub struct Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    pub(crate) detector: Arc<D>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) corpus: Arc<RecipeCorpus>,
    pub(crate) history: HistoryLog<H>,
    pub(crate) inference_size: u32,
    pub(crate) response_language: String,
}

impl<D, LLM, H> Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    pub fn new(
        detector: D,
        llm_client: LLM,
        corpus: RecipeCorpus,
        history: HistoryLog<H>,
        inference_size: u32,
        response_language: String,
    ) -> Self {
        Self {
            detector: Arc::new(detector),
            llm_client: Arc::new(llm_client),
            corpus: Arc::new(corpus),
            history,
            inference_size,
            response_language,
        }
    }
}

impl<D, LLM, H> Clone for Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    fn clone(&self) -> Self {
        Self {
            detector: Arc::clone(&self.detector),
            llm_client: Arc::clone(&self.llm_client),
            corpus: Arc::clone(&self.corpus),
            history: self.history.clone(),
            inference_size: self.inference_size,
            response_language: self.response_language.clone(),
        }
    }
}
