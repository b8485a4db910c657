use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchRecipesForm {
    #[validate(length(
        min = 1,
        max = 500,
        message = "query must be between 1 and 500 characters"
    ))]
    pub query: String,
}
