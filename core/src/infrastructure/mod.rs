pub mod detection;
pub mod history;
pub mod llm;
pub mod recipe;
