use std::time::Duration;

use crate::domain::recipe::entities::Profile;

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub profile: Profile,
}

/// A single provider call. `response_schema` is `None` for plain text output.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub response_schema: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}
