use crate::{
    domain::common::{BotanicaConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type BotanicaService = Service<GeminiLLMClient>;

pub fn create_service(config: BotanicaConfig) -> BotanicaService {
    let llm = config.llm;
    let client = GeminiLLMClient::new(
        llm.api_key().unwrap_or_default().to_string(),
        llm.gemini_base_url.clone(),
    );

    Service::new(client, llm)
}
