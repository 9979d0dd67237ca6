use std::{sync::Arc, time::Duration};

use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::ModelFailure, ports::LLMClient, value_objects::GenerationRequest},
};

pub const NO_CANDIDATES_MESSAGE: &str = "no candidate models configured";

/// Ordered, immutable list of provider model identifiers. Position is priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateModels(Arc<[String]>);

impl CandidateModels {
    pub fn new(models: Vec<String>) -> Self {
        Self(models.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tries candidate models in order and returns the first output that
/// deserializes into the requested type.
pub struct ModelInvoker<LLM> {
    llm_client: Arc<LLM>,
    candidates: CandidateModels,
    timeout: Option<Duration>,
}

impl<LLM> Clone for ModelInvoker<LLM> {
    fn clone(&self) -> Self {
        Self {
            llm_client: self.llm_client.clone(),
            candidates: self.candidates.clone(),
            timeout: self.timeout,
        }
    }
}

impl<LLM> ModelInvoker<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: Arc<LLM>, candidates: CandidateModels) -> Self {
        Self {
            llm_client,
            candidates,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn candidates(&self) -> &CandidateModels {
        &self.candidates
    }

    pub async fn invoke<T>(&self, prompt: &str, schema: &serde_json::Value) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Send,
    {
        if self.candidates.is_empty() {
            warn!("No candidate models configured");
        }

        let mut failures: Vec<ModelFailure> = Vec::with_capacity(self.candidates.len());

        for model in self.candidates.iter() {
            info!(model = %model, attempt = failures.len() + 1, "Attempting generation");

            let request = GenerationRequest {
                model: model.clone(),
                prompt: prompt.to_string(),
                response_schema: Some(schema.clone()),
                timeout: self.timeout,
            };

            let outcome = match self.llm_client.generate(request).await {
                Ok(raw) => serde_json::from_str::<T>(&raw).map_err(|e| {
                    CoreError::InvalidResponse(format!("Model output does not match schema: {e}"))
                }),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(value) => {
                    info!(model = %model, attempts = failures.len() + 1, "Generation succeeded");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(model = %model, error = %e, "Generation failed, trying next candidate");
                    failures.push(ModelFailure {
                        model: model.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let last_error = failures
            .last()
            .map(|f| f.message.clone())
            .unwrap_or_else(|| NO_CANDIDATES_MESSAGE.to_string());

        error!(attempts = failures.len(), last_error = %last_error, "All candidate models failed");

        Err(CoreError::NoModelAvailable {
            failures,
            last_error,
        })
    }
}
