pub mod api;
pub mod config;
pub mod date;
pub mod error;
pub mod html;
pub mod locale;
pub mod render;
pub mod types;

pub use api::NewsApi;
pub use config::{ClientConfig, API_BASE_URL, TOAST_DURATION};
pub use error::{Error, Result};
pub use html::{escape_html, Element, Markup};
pub use locale::Locale;
pub use render::RenderOptions;
pub use types::{Category, NewsItem};

pub mod prelude {
    pub use crate::{Category, ClientConfig, Error, Locale, Markup, NewsApi, NewsItem, Result};
}
