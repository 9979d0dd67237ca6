use super::handlers::check_models::{__path_check_models, check_models};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(check_models))]
pub struct ModelApiDoc;

pub fn model_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/models/check", state.args.server.root_path),
        get(check_models),
    )
}
