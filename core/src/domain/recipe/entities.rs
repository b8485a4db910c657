use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::recipe::value_objects::{NO_INGREDIENTS_MESSAGE, NO_MATCH_MESSAGE};

/// Cooking steps as found in the corpus: either one block of text or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RecipeSteps {
    Text(String),
    List(Vec<String>),
}

impl Default for RecipeSteps {
    fn default() -> Self {
        RecipeSteps::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: RecipeSteps,
}

/// The fixed set of candidate recipes, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCorpus {
    recipes: Vec<Recipe>,
}

impl RecipeCorpus {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MatchResult {
    pub name: String,
    pub match_score: f64,
    pub ingredients: Vec<String>,
    pub steps: RecipeSteps,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecommendationNotice {
    pub message: String,
}

/// Outcome of matching detected ingredients against the corpus.
///
/// On the wire the notices are rendered as a one-element list holding a
/// `message`, so clients always receive an array.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeRecommendation {
    Matches(Vec<MatchResult>),
    NoIngredients,
    NoSuitableMatch,
}

impl RecipeRecommendation {
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            RecipeRecommendation::Matches(matches) => matches,
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<RecommendationNotice> {
        let message = match self {
            RecipeRecommendation::Matches(_) => return None,
            RecipeRecommendation::NoIngredients => NO_INGREDIENTS_MESSAGE,
            RecipeRecommendation::NoSuitableMatch => NO_MATCH_MESSAGE,
        };

        Some(RecommendationNotice {
            message: message.to_string(),
        })
    }
}

impl Serialize for RecipeRecommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.notice() {
            Some(notice) => [notice].serialize(serializer),
            None => self.matches().serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_accept_text_or_list() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"name": "Pho", "ingredients": ["beef"], "steps": ["boil", "serve"]}"#,
        )
        .unwrap();
        assert_eq!(
            recipe.steps,
            RecipeSteps::List(vec!["boil".to_string(), "serve".to_string()])
        );

        let recipe: Recipe =
            serde_json::from_str(r#"{"name": "Pho", "ingredients": [], "steps": "boil"}"#).unwrap();
        assert_eq!(recipe.steps, RecipeSteps::Text("boil".to_string()));
    }

    #[test]
    fn test_missing_steps_default_to_empty_text() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"name": "Pho", "ingredients": ["beef"]}"#).unwrap();
        assert_eq!(recipe.steps, RecipeSteps::Text(String::new()));
    }

    #[test]
    fn test_notice_serializes_as_single_element_list() {
        let value = serde_json::to_value(RecipeRecommendation::NoIngredients).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "message": NO_INGREDIENTS_MESSAGE }])
        );

        let value = serde_json::to_value(RecipeRecommendation::Matches(Vec::new())).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
