use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The questionnaire answers submitted by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub hair_type: String,
    pub skin_type: String,
    pub condition: String,
    pub goal: String,
    pub detailed_condition: String,
    pub personal_goals: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub product_name: String,
    pub ingredients: Vec<Ingredient>,
    pub preparation: Vec<String>,
    pub application: String,
    pub frequency: String,
    pub warnings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub benefit: String,
}

/// One failed generation attempt against a candidate model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelFailure {
    pub model: String,
    pub message: String,
}
