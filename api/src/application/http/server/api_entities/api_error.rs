use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use botanica_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Missing GOOGLE_GENERATIVE_AI_API_KEY";

pub const VERIFICATION_REQUIRED_MESSAGE: &str = "The AI provider requires account verification. \
Please add a payment method to the provider account to unlock AI credits.";

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while crafting your recipe. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every failed response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MissingCredential => {
                ApiError::InternalServerError(MISSING_CREDENTIAL_MESSAGE.to_string())
            }
            CoreError::ProviderVerificationRequired(detail) => {
                tracing::warn!("Provider requires verification: {}", detail);
                ApiError::Forbidden(VERIFICATION_REQUIRED_MESSAGE.to_string())
            }
            CoreError::NoModelAvailable { last_error, .. } => ApiError::InternalServerError(
                format!("{GENERIC_FAILURE_MESSAGE} (last error: {last_error})"),
            ),
            CoreError::ExternalServiceError(message) | CoreError::InvalidResponse(message) => {
                ApiError::InternalServerError(format!(
                    "{GENERIC_FAILURE_MESSAGE} (last error: {message})"
                ))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules after deserializing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
