use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{RecipeCorpus, RecipeRecommendation},
};

/// Source of the fixed recipe corpus, read once at startup
pub trait RecipeCorpusSource: Send + Sync {
    fn load_corpus(&self) -> Result<RecipeCorpus, CoreError>;
}

/// Service trait for ranking the corpus against detected ingredients
pub trait RecipeService: Send + Sync {
    fn recommend(&self, ingredients: &[String]) -> RecipeRecommendation;

    fn corpus_size(&self) -> usize;
}
