pub mod json_corpus;

pub use json_corpus::JsonRecipeCorpusSource;
