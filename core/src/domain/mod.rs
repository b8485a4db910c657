pub mod common;
pub mod detection;
pub mod generation;
pub mod history;
pub mod recipe;
