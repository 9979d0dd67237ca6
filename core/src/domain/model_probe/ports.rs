use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, model_probe::entities::ModelProbeReport,
};

/// Service trait for checking which candidate models the provider accepts
pub trait ModelProbeService: Send + Sync {
    fn check_models(&self) -> impl Future<Output = Result<ModelProbeReport, CoreError>> + Send;
}
