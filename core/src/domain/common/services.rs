use std::sync::Arc;

use crate::domain::{
    common::LLMConfig,
    recipe::{
        invoker::{CandidateModels, ModelInvoker},
        ports::LLMClient,
    },
};

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) recipe_invoker: ModelInvoker<LLM>,
    pub(crate) config: Arc<LLMConfig>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, config: LLMConfig) -> Self {
        let llm_client = Arc::new(llm_client);
        let recipe_invoker = ModelInvoker::new(
            llm_client.clone(),
            CandidateModels::new(config.candidate_models.clone()),
        )
        .with_timeout(config.request_timeout);

        Self {
            llm_client,
            recipe_invoker,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &LLMConfig {
        &self.config
    }
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            recipe_invoker: self.recipe_invoker.clone(),
            config: self.config.clone(),
        }
    }
}
