use std::path::PathBuf;

use clap::{ArgAction, Parser};
use larder_core::{
    domain::common::{
        DEFAULT_HISTORY_CAPACITY, DEFAULT_INFERENCE_SIZE, DetectorConfig, LLMConfig, LarderConfig,
        StorageConfig,
    },
    infrastructure::llm::groq_client::DEFAULT_GROQ_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "larder-api", version, about = "Ingredient detection and recipe suggestions")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub detector: DetectorArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins, "*" mirrors any origin
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DetectorArgs {
    /// Inference endpoint of the object-detection model
    #[arg(
        long = "detector-url",
        env = "DETECTOR_URL",
        default_value = "http://127.0.0.1:5000/predict"
    )]
    pub url: String,

    #[arg(
        long = "detector-inference-size",
        env = "DETECTOR_INFERENCE_SIZE",
        default_value_t = DEFAULT_INFERENCE_SIZE
    )]
    pub inference_size: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "groq-api-key", env = "GROQ_API_KEY", default_value = "")]
    pub api_key: String,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = "openai/gpt-oss-20b")]
    pub model: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_GROQ_BASE_URL)]
    pub base_url: String,

    #[arg(
        long = "llm-response-language",
        env = "LLM_RESPONSE_LANGUAGE",
        default_value = "Vietnamese"
    )]
    pub response_language: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "recipes-path", env = "RECIPES_PATH", default_value = "data/recipes.json")]
    pub recipes_path: PathBuf,

    #[arg(long = "history-path", env = "HISTORY_PATH", default_value = "data/history.json")]
    pub history_path: PathBuf,

    #[arg(
        long = "history-capacity",
        env = "HISTORY_CAPACITY",
        default_value_t = DEFAULT_HISTORY_CAPACITY
    )]
    pub history_capacity: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        LarderConfig {
            detector: DetectorConfig {
                endpoint: args.detector.url,
                inference_size: args.detector.inference_size,
            },
            llm: LLMConfig {
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                response_language: args.llm.response_language,
            },
            storage: StorageConfig {
                recipes_path: args.storage.recipes_path,
                history_path: args.storage.history_path,
                history_capacity: args.storage.history_capacity,
            },
        }
    }
}
