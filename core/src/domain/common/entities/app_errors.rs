use thiserror::Error;

use crate::domain::recipe::entities::ModelFailure;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing GOOGLE_GENERATIVE_AI_API_KEY")]
    MissingCredential,

    #[error("Provider requires account verification: {0}")]
    ProviderVerificationRequired(String),

    #[error("No model available after {} attempt(s): {last_error}", .failures.len())]
    NoModelAvailable {
        failures: Vec<ModelFailure>,
        last_error: String,
    },

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
