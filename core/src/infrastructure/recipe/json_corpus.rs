use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeCorpus},
        ports::RecipeCorpusSource,
    },
};

/// Reads the recipe corpus from a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonRecipeCorpusSource {
    path: PathBuf,
}

impl JsonRecipeCorpusSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecipeCorpusSource for JsonRecipeCorpusSource {
    fn load_corpus(&self) -> Result<RecipeCorpus, CoreError> {
        let file = File::open(&self.path).map_err(|e| {
            CoreError::CorpusUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let recipes: Vec<Recipe> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            CoreError::CorpusUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(RecipeCorpus::new(recipes))
    }
}
