use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddHistoryForm {
    /// Trimmed before storing; blank names are ignored
    pub recipe_name: String,
    /// "search" or "image"; anything else is stored as "search"
    #[serde(default)]
    #[schema(example = "search")]
    pub hist_type: String,
}
