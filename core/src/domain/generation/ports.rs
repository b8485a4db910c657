use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, generation::entities::GenerationOutcome,
};

/// LLM Client trait for calling AI models
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for LLM-backed recipe suggestions
pub trait RecipeGenerationService: Send + Sync {
    fn generate_recipes(
        &self,
        ingredients: Vec<String>,
    ) -> impl Future<Output = GenerationOutcome> + Send;

    fn search_recipes(&self, query: String) -> impl Future<Output = GenerationOutcome> + Send;
}
