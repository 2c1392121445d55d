use async_trait::async_trait;
use crate::types::{Category, NewsItem};
use crate::Result;

#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch the ordered category list
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Fetch the news items filed under `category`
    async fn news(&self, category: &str) -> Result<Vec<NewsItem>>;
}
