use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_CANDIDATE_MODELS: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-2.0",
    "gemini-1.5-flash",
    "gemini-1.5",
    "models/text-bison-001",
    "text-bison-001",
];

/// Phrases the provider uses when an account needs billing or verification.
pub const DEFAULT_BILLING_PHRASES: &[&str] = &["credit card", "AI Gateway", "quota", "billing"];

#[derive(Clone, Debug)]
pub struct BotanicaConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub candidate_models: Vec<String>,
    pub request_timeout: Duration,
    pub probe_timeout: Duration,
    pub billing_phrases: Vec<String>,
}

impl LLMConfig {
    /// The configured credential, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            candidate_models: DEFAULT_CANDIDATE_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            request_timeout: Duration::from_secs(60),
            probe_timeout: Duration::from_secs(10),
            billing_phrases: DEFAULT_BILLING_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}
