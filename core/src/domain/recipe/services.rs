use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::domain::{
    common::services::Service,
    detection::ports::ObjectDetector,
    generation::ports::LLMClient,
    history::ports::HistoryStore,
    recipe::{
        entities::{MatchResult, Recipe, RecipeRecommendation},
        ports::RecipeService,
        value_objects::MAX_RECOMMENDATIONS,
    },
};

/// Share of the recipe's distinct ingredients present in `detected`.
/// `detected` is expected lower-cased. A recipe without ingredients scores 0.
fn score_recipe(recipe: &Recipe, detected: &HashSet<String>) -> f64 {
    let recipe_ingredients: HashSet<String> = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.to_lowercase())
        .collect();

    if recipe_ingredients.is_empty() {
        return 0.0;
    }

    let matched = recipe_ingredients.intersection(detected).count();
    matched as f64 / recipe_ingredients.len() as f64
}

/// Two decimals, halves to even: 1/8 scores 0.12, 5/8 scores 0.62.
fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}

/// Ranks `corpus` against the detected ingredient names.
///
/// Matching is case-insensitive. Scores are rounded to two decimals before
/// ranking; equal scores keep corpus order. At most [`MAX_RECOMMENDATIONS`]
/// recipes are returned.
pub fn match_recipes(ingredients: &[String], corpus: &[Recipe]) -> RecipeRecommendation {
    if ingredients.is_empty() {
        return RecipeRecommendation::NoIngredients;
    }

    let detected: HashSet<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.to_lowercase())
        .collect();

    let mut matches: Vec<MatchResult> = corpus
        .iter()
        .filter_map(|recipe| {
            // Scores that round to 0.00 count as no match.
            let score = round_score(score_recipe(recipe, &detected));
            (score > 0.0).then(|| MatchResult {
                name: recipe.name.clone(),
                match_score: score,
                ingredients: recipe.ingredients.clone(),
                steps: recipe.steps.clone(),
            })
        })
        .collect();

    if matches.is_empty() {
        return RecipeRecommendation::NoSuitableMatch;
    }

    // sort_by is stable
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(MAX_RECOMMENDATIONS);

    RecipeRecommendation::Matches(matches)
}

impl<D, LLM, H> RecipeService for Service<D, LLM, H>
where
    D: ObjectDetector,
    LLM: LLMClient,
    H: HistoryStore,
{
    fn recommend(&self, ingredients: &[String]) -> RecipeRecommendation {
        let recommendation = match_recipes(ingredients, self.corpus.recipes());
        debug!(
            ingredient_count = ingredients.len(),
            match_count = recommendation.matches().len(),
            "Ranked recipe corpus"
        );
        recommendation
    }

    fn corpus_size(&self) -> usize {
        self.corpus.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::entities::RecipeSteps;

    fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            steps: RecipeSteps::Text(format!("cook {}", name)),
        }
    }

    fn detected(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_score_is_case_insensitive_and_rounded() {
        let corpus = vec![recipe("Salsa", &["tomato", "onion", "garlic"])];

        let result = match_recipes(&detected(&["Tomato", "Garlic"]), &corpus);

        let matches = result.matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_score, 0.67);
        assert_eq!(matches[0].name, "Salsa");
    }

    #[test]
    fn test_original_ingredients_and_steps_are_returned() {
        let corpus = vec![recipe("Omelette", &["Egg", "Butter"])];

        let result = match_recipes(&detected(&["egg"]), &corpus);

        let matches = result.matches();
        assert_eq!(matches[0].ingredients, vec!["Egg", "Butter"]);
        assert_eq!(matches[0].steps, RecipeSteps::Text("cook Omelette".to_string()));
        assert_eq!(matches[0].match_score, 0.5);
    }

    #[test]
    fn test_recipe_without_ingredients_is_excluded() {
        let corpus = vec![recipe("Air", &[]), recipe("Toast", &["bread"])];

        let result = match_recipes(&detected(&["bread"]), &corpus);

        let matches = result.matches();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Toast");
    }

    #[test]
    fn test_top_three_with_stable_ties() {
        // scores in corpus order: 0.5, 0.8, 0.8, 0.33, 0.9
        let corpus = vec![
            recipe("r0", &["a", "x"]),
            recipe("r1", &["a", "b", "c", "d", "x"]),
            recipe("r2", &["a", "b", "c", "d", "y"]),
            recipe("r3", &["a", "x", "y"]),
            recipe("r4", &["a", "b", "c", "d", "e", "f", "g", "h", "i", "x"]),
        ];

        let result = match_recipes(
            &detected(&["a", "b", "c", "d", "e", "f", "g", "h", "i"]),
            &corpus,
        );

        let ranked: Vec<(&str, f64)> = result
            .matches()
            .iter()
            .map(|m| (m.name.as_str(), m.match_score))
            .collect();
        assert_eq!(ranked, vec![("r4", 0.9), ("r1", 0.8), ("r2", 0.8)]);
    }

    #[test]
    fn test_duplicates_on_either_side_are_ignored() {
        let corpus = vec![
            recipe("Soup", &["water", "salt"]),
            recipe("Brine", &["Salt", "salt", "water"]),
        ];

        let result = match_recipes(&detected(&["salt", "Salt", "SALT"]), &corpus);

        let scores: Vec<f64> = result.matches().iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![0.5, 0.5]);
    }

    #[test]
    fn test_empty_ingredients_return_notice() {
        let corpus = vec![recipe("Salsa", &["tomato"])];

        let result = match_recipes(&[], &corpus);

        assert_eq!(result, RecipeRecommendation::NoIngredients);
        assert!(result.notice().is_some());
    }

    #[test]
    fn test_no_overlap_returns_notice() {
        let corpus = vec![recipe("Salsa", &["tomato"])];

        let result = match_recipes(&detected(&["chocolate"]), &corpus);

        assert_eq!(result, RecipeRecommendation::NoSuitableMatch);
    }

    #[test]
    fn test_scores_stay_within_unit_interval() {
        let corpus = vec![recipe("Salad", &["lettuce", "tomato"])];

        let result = match_recipes(&detected(&["lettuce", "tomato", "onion"]), &corpus);

        assert_eq!(result.matches()[0].match_score, 1.0);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        let eighths = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let corpus = vec![recipe("One of eight", &eighths), recipe("Five of eight", &eighths)];

        assert_eq!(round_score(1.0 / 8.0), 0.12);
        assert_eq!(round_score(5.0 / 8.0), 0.62);
        assert_eq!(round_score(3.0 / 8.0), 0.38);

        let result = match_recipes(&detected(&["a", "b", "c", "d", "e"]), &corpus);
        assert_eq!(result.matches()[0].match_score, 0.62);
    }

    #[test]
    fn test_score_rounding_to_zero_is_no_match() {
        let mut ingredients: Vec<String> = (0..201).map(|i| format!("item-{}", i)).collect();
        ingredients[0] = "salt".to_string();
        let huge = Recipe {
            name: "Banquet".to_string(),
            ingredients,
            steps: RecipeSteps::default(),
        };

        let result = match_recipes(&detected(&["salt"]), &[huge.clone()]);
        assert_eq!(result, RecipeRecommendation::NoSuitableMatch);

        let corpus = vec![huge, recipe("Brine", &["salt", "water"])];
        let result = match_recipes(&detected(&["salt"]), &corpus);
        let names: Vec<&str> = result.matches().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Brine"]);
    }
}
