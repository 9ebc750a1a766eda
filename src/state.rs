use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, services::baike::BaikeService};

/// Shared handle to whichever `BaikeService` the app was built with.
pub type DynBaikeService = Arc<dyn BaikeService>;

#[derive(Clone)]
pub struct AppState {
    pub service: DynBaikeService,
    pub config: Config,
}

impl FromRef<AppState> for DynBaikeService {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
