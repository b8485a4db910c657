use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};
use utoipa::ToSchema;

use crate::domain::recipe::entities::RecipeSteps;

/// A recipe suggested by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: RecipeSteps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Result of a generation or search call. Never an error for the caller:
/// the failure modes are carried as data and rendered the way clients expect
/// (`[{"raw_output": ...}]` or `[{"error": ...}]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Recipes(Vec<GeneratedRecipe>),
    RawOutput(String),
    Failed(String),
}

impl GenerationOutcome {
    pub fn recipes(&self) -> &[GeneratedRecipe] {
        match self {
            GenerationOutcome::Recipes(recipes) => recipes,
            _ => &[],
        }
    }
}

fn single_field<S: Serializer>(serializer: S, key: &str, value: &str) -> Result<S::Ok, S::Error> {
    struct Field<'a>(&'a str, &'a str);

    impl Serialize for Field<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry(self.0, self.1)?;
            map.end()
        }
    }

    let mut seq = serializer.serialize_seq(Some(1))?;
    seq.serialize_element(&Field(key, value))?;
    seq.end()
}

impl Serialize for GenerationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GenerationOutcome::Recipes(recipes) => recipes.serialize(serializer),
            GenerationOutcome::RawOutput(text) => single_field(serializer, "raw_output", text),
            GenerationOutcome::Failed(message) => single_field(serializer, "error", message),
        }
    }
}
