use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use nc_client::{NewsClient, PageView, UiEvent};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// One page session: a fresh view and client, as a browser tab would have.
fn session(state: &AppState) -> (Arc<PageView>, NewsClient) {
    let view = Arc::new(PageView::from_config(&state.config));
    let client = NewsClient::new(state.api.clone(), view.clone(), &state.config);
    (view, client)
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let (view, client) = session(&state);
    client.handle_event(UiEvent::Ready).await;
    if let Some(category) = query.category {
        debug!("Rendering page for category {:?}", category);
        client.handle_event(UiEvent::CategoryChanged(category)).await;
    }
    Html(view.snapshot().to_html().into_string())
}

pub async fn news_fragment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let (view, client) = session(&state);
    let category = query.category.unwrap_or_default();
    if category.is_empty() {
        client.on_category_change().await;
    } else {
        client.load_news(&category).await;
    }

    let page = view.snapshot();
    let status = if page.error.is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (status, Html(page.news_list.into_string()))
}

pub async fn healthz() -> &'static str {
    "ok"
}
