use std::sync::Arc;

use crate::models::error::Result;
use crate::openf1::OpenF1;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub openf1: Arc<OpenF1>,
}

impl AppState {
    pub fn init(config: Config) -> Result<Self> {
        let openf1 = Arc::new(OpenF1::new(config.clone())?);
        Ok(AppState { config, openf1 })
    }
}
