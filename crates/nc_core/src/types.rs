use serde::{Deserialize, Deserializer, Serialize};

/// A text label used to filter news server-side.
pub type Category = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: link.into(),
            tags: Vec::new(),
            published: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        let published = published.into();
        self.published = (!published.is_empty()).then_some(published);
        self
    }
}

// The backend sends "" for feeds without a date.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
