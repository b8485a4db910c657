use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, SubsecRound};

pub mod entities;
pub mod services;

pub const DEFAULT_INFERENCE_SIZE: u32 = 640;
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub detector: DetectorConfig,
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct DetectorConfig {
    pub endpoint: String,
    pub inference_size: u32,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub response_language: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub recipes_path: PathBuf,
    pub history_path: PathBuf,
    pub history_capacity: usize,
}

/// Local wall-clock time truncated to whole seconds.
pub fn generate_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
