use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/fragment/news", get(handlers::news_fragment))
        .route("/healthz", get(handlers::healthz))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use nc_core::{ClientConfig, NewsApi, Result, Error};
    pub use crate::AppState;
}
