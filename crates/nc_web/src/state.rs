use std::sync::Arc;
use nc_core::{ClientConfig, NewsApi};

pub struct AppState {
    pub api: Arc<dyn NewsApi>,
    pub config: ClientConfig,
}
