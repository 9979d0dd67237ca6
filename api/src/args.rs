use std::time::Duration;

use botanica_core::domain::common::{
    BotanicaConfig, DEFAULT_BILLING_PHRASES, DEFAULT_CANDIDATE_MODELS, DEFAULT_GEMINI_BASE_URL,
    LLMConfig,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "botanica", version, about = "Botanica recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `{root_path}/metrics`
    #[arg(
        long = "metrics",
        env = "SERVER_METRICS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GOOGLE_GENERATIVE_AI_API_KEY",
        hide_env_values = true
    )]
    pub gemini_api_key: Option<String>,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    /// Candidate models, tried in order
    #[arg(
        long = "gemini-models",
        env = "GEMINI_MODELS",
        value_delimiter = ',',
        default_values_t = DEFAULT_CANDIDATE_MODELS
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<String>>()
    )]
    pub gemini_models: Vec<String>,

    #[arg(
        long = "gemini-request-timeout-secs",
        env = "GEMINI_REQUEST_TIMEOUT_SECS",
        default_value_t = 60
    )]
    pub request_timeout_secs: u64,

    #[arg(
        long = "gemini-probe-timeout-secs",
        env = "GEMINI_PROBE_TIMEOUT_SECS",
        default_value_t = 10
    )]
    pub probe_timeout_secs: u64,

    #[arg(
        long = "billing-phrases",
        env = "BILLING_PHRASES",
        value_delimiter = ',',
        default_values_t = DEFAULT_BILLING_PHRASES
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
    )]
    pub billing_phrases: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for BotanicaConfig {
    fn from(args: Args) -> Self {
        let llm = args.llm;

        BotanicaConfig {
            llm: LLMConfig {
                gemini_api_key: llm.gemini_api_key,
                gemini_base_url: llm.gemini_base_url,
                candidate_models: llm
                    .gemini_models
                    .into_iter()
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .collect(),
                request_timeout: Duration::from_secs(llm.request_timeout_secs),
                probe_timeout: Duration::from_secs(llm.probe_timeout_secs),
                billing_phrases: llm.billing_phrases,
            },
        }
    }
}
