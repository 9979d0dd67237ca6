use axum::extract::State;
use botanica_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate a beauty recipe",
    description = "Builds a prompt from the submitted profile and asks the configured models, \
in order, for a structured recipe.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ErrorBody, description = "Malformed request body"),
        (status = 403, body = ErrorBody, description = "Provider account needs verification"),
        (status = 500, body = ErrorBody, description = "Missing credential or every model failed")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            profile: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { recipe }))
}
