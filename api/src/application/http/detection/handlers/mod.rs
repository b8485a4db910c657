pub mod predict;
pub mod recommend;
pub mod recommend_llm;
