use tracing::{error, instrument};

use crate::domain::{
    common::services::Service,
    detection::ports::ObjectDetector,
    generation::{
        entities::GenerationOutcome,
        ports::{LLMClient, RecipeGenerationService},
        prompt::{build_generation_prompt, build_search_prompt, parse_generated_recipes},
    },
    history::ports::HistoryStore,
};

async fn complete<LLM: LLMClient>(llm_client: &LLM, prompt: String) -> GenerationOutcome {
    match llm_client.generate_with_text(prompt).await {
        Ok(answer) => parse_generated_recipes(&answer),
        Err(e) => {
            error!("Recipe generation failed: {}", e);
            GenerationOutcome::Failed(e.to_string())
        }
    }
}

pub async fn generate_recipes_with<LLM: LLMClient>(
    llm_client: &LLM,
    ingredients: &[String],
    language: &str,
) -> GenerationOutcome {
    complete(llm_client, build_generation_prompt(ingredients, language)).await
}

pub async fn search_recipes_with<LLM: LLMClient>(
    llm_client: &LLM,
    query: &str,
    language: &str,
) -> GenerationOutcome {
    complete(llm_client, build_search_prompt(query, language)).await
}

impl<D, LLM, H> RecipeGenerationService for Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    #[instrument(skip(self))]
    async fn generate_recipes(&self, ingredients: Vec<String>) -> GenerationOutcome {
        generate_recipes_with(
            self.llm_client.as_ref(),
            &ingredients,
            &self.response_language,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn search_recipes(&self, query: String) -> GenerationOutcome {
        search_recipes_with(self.llm_client.as_ref(), &query, &self.response_language).await
    }
}
