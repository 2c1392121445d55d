use std::time::Duration;
use chrono::{FixedOffset, Local};
use crate::locale::Locale;
use crate::render::RenderOptions;

/// Backend the client talks to. Fixed at compile time.
pub const API_BASE_URL: &str = "http://localhost:5000/api";

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub locale: Locale,
    /// Viewer's offset used when formatting publish dates.
    pub utc_offset: FixedOffset,
    pub toast_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            locale: Locale::default(),
            utc_offset: *Local::now().offset(),
            toast_duration: TOAST_DURATION,
        }
    }
}

impl ClientConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            locale: self.locale,
            utc_offset: self.utc_offset,
        }
    }
}
