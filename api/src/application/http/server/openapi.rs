use crate::application::http::{
    health::HealthApiDoc, models::router::ModelApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Botanica API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/models", api = ModelApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
