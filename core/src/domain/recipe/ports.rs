use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{GenerateRecipeInput, GenerationRequest},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync + 'static {
    /// Runs one generation call against `request.model` and returns the raw text output.
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;
}
