use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoryType {
    Search,
    Image,
}

impl HistoryType {
    /// Unrecognized values fall back to `Search`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "image" => HistoryType::Image,
            _ => HistoryType::Search,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub recipe_name: String,
    #[serde(rename = "type")]
    pub kind: HistoryType,
    #[schema(value_type = String, example = "2025-01-31T08:15:02")]
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn new(recipe_name: String, kind: HistoryType) -> Self {
        Self {
            recipe_name,
            kind,
            timestamp: generate_timestamp(),
        }
    }

    pub fn same_interaction(&self, recipe_name: &str, kind: HistoryType) -> bool {
        self.recipe_name == recipe_name && self.kind == kind
    }
}
