use std::sync::Arc;

use botanica_core::application::BotanicaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BotanicaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BotanicaService) -> Self {
        Self { args, service }
    }
}
