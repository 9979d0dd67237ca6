use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModelProbe {
    pub model: String,
    pub ok: bool,
    pub message: String,
}

/// Availability of every configured candidate model, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelProbeReport {
    pub models: Vec<ModelProbe>,
    pub checked_at: DateTime<Utc>,
}

impl ModelProbeReport {
    pub fn new(models: Vec<ModelProbe>) -> Self {
        Self {
            models,
            checked_at: Utc::now(),
        }
    }

    pub fn available(&self) -> impl Iterator<Item = &ModelProbe> {
        self.models.iter().filter(|m| m.ok)
    }
}
