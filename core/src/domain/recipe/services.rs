use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::Recipe,
        policies::classify_generation_error,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        schema::get_recipe_schema,
        value_objects::GenerateRecipeInput,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(
        skip_all,
        fields(hair_type = %input.profile.hair_type, skin_type = %input.profile.skin_type)
    )]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        info!("Received recipe request");

        // 1. Credential must be configured before anything leaves the process
        let key_present = self.config.api_key().is_some();
        info!(api_key_present = key_present, "Checked provider credential");
        if !key_present {
            warn!("Refusing recipe request: provider credential is not configured");
            return Err(CoreError::MissingCredential);
        }

        // 2. Build prompt and schema
        let prompt = build_recipe_prompt(&input.profile);
        let response_schema = get_recipe_schema();

        // 3. Try candidate models in order
        self.recipe_invoker
            .invoke::<Recipe>(&prompt, &response_schema)
            .await
            .map_err(|e| classify_generation_error(e, &self.config.billing_phrases))
    }
}
