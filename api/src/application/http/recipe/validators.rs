use botanica_core::domain::recipe::entities::Profile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Questionnaire answers. Missing fields are read as empty strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[schema(example = "Curly")]
    pub hair_type: String,

    #[schema(example = "Oily")]
    pub skin_type: String,

    #[schema(example = "Frizz")]
    pub condition: String,

    #[schema(example = "Shine & glow")]
    pub goal: String,

    #[validate(length(
        max = 5000,
        message = "detailedCondition must be at most 5000 characters"
    ))]
    pub detailed_condition: String,

    #[validate(length(max = 5000, message = "personalGoals must be at most 5000 characters"))]
    pub personal_goals: String,
}

impl From<GenerateRecipeValidator> for Profile {
    fn from(payload: GenerateRecipeValidator) -> Self {
        Profile {
            hair_type: payload.hair_type,
            skin_type: payload.skin_type,
            condition: payload.condition,
            goal: payload.goal,
            detailed_condition: payload.detailed_condition,
            personal_goals: payload.personal_goals,
        }
    }
}
