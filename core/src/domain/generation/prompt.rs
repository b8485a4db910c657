use crate::domain::generation::entities::{GeneratedRecipe, GenerationOutcome};

pub const GENERATED_RECIPE_COUNT: usize = 7;
pub const SEARCHED_RECIPE_COUNT: usize = 5;

const RESPONSE_FORMAT: &str = r#"[
  {
    "title": "Dish name",
    "ingredients": ["Ingredient"],
    "steps": ["Step 1", "Step 2"],
    "time": "30 minutes"
  }
]"#;

fn format_rules(language: &str) -> String {
    format!(
        "Answer with this JSON structure only:\n\n{}\n\n\
         Write every value in {}.\n\
         Do not explain anything.\n\
         Do not wrap the JSON in ``` fences.",
        RESPONSE_FORMAT, language
    )
}

pub fn build_generation_prompt(ingredients: &[String], language: &str) -> String {
    format!(
        "With these ingredients: {}\n\nSuggest {} suitable dishes.\n\n{}",
        ingredients.join(", "),
        GENERATED_RECIPE_COUNT,
        format_rules(language)
    )
}

pub fn build_search_prompt(query: &str, language: &str) -> String {
    format!(
        "Find {} dishes matching the keyword: \"{}\"\n\n{}\n\
         Return 100% valid JSON.",
        SEARCHED_RECIPE_COUNT,
        query,
        format_rules(language)
    )
}

/// Removes a surrounding Markdown code fence (```json ... ```), if any.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Interprets a model answer. Anything that is not a JSON list of recipes is
/// handed back verbatim as raw output.
pub fn parse_generated_recipes(answer: &str) -> GenerationOutcome {
    let text = answer.trim();

    match serde_json::from_str::<Vec<GeneratedRecipe>>(strip_code_fence(text)) {
        Ok(recipes) => GenerationOutcome::Recipes(recipes),
        Err(e) => {
            tracing::warn!("LLM answer is not a recipe list: {}", e);
            GenerationOutcome::RawOutput(text.to_string())
        }
    }
}
