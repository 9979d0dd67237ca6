use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    model_probe::{
        entities::{ModelProbe, ModelProbeReport},
        ports::ModelProbeService,
    },
    recipe::{ports::LLMClient, value_objects::GenerationRequest},
};

pub const PROBE_PROMPT: &str = "Say hi";

impl<LLM> ModelProbeService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn check_models(&self) -> Result<ModelProbeReport, CoreError> {
        if self.config.api_key().is_none() {
            warn!("Refusing model check: provider credential is not configured");
            return Err(CoreError::MissingCredential);
        }

        let candidates = self.recipe_invoker.candidates();
        let mut probes = Vec::with_capacity(candidates.len());

        // Every candidate is probed; a failure never stops the loop
        for model in candidates.iter() {
            let request = GenerationRequest {
                model: model.clone(),
                prompt: PROBE_PROMPT.to_string(),
                response_schema: None,
                timeout: Some(self.config.probe_timeout),
            };

            let probe = match self.llm_client.generate(request).await {
                Ok(reply) => ModelProbe {
                    model: model.clone(),
                    ok: true,
                    message: reply,
                },
                Err(e) => ModelProbe {
                    model: model.clone(),
                    ok: false,
                    message: e.to_string(),
                },
            };

            info!(model = %probe.model, ok = probe.ok, "Probed model");
            probes.push(probe);
        }

        Ok(ModelProbeReport::new(probes))
    }
}
