use axum::extract::State;
use botanica_core::domain::model_probe::{entities::ModelProbeReport, ports::ModelProbeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ErrorBody},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckModelsResponse {
    pub data: ModelProbeReport,
}

#[utoipa::path(
    get,
    path = "/check",
    tag = "models",
    summary = "Check candidate models",
    description = "Sends a short prompt to every configured candidate model and reports \
which ones answered.",
    responses(
        (status = 200, body = CheckModelsResponse),
        (status = 500, body = ErrorBody, description = "Missing credential")
    )
)]
pub async fn check_models(
    State(state): State<AppState>,
) -> Result<Response<CheckModelsResponse>, ApiError> {
    let report = state.service.check_models().await.map_err(ApiError::from)?;

    Ok(Response::OK(CheckModelsResponse { data: report }))
}
