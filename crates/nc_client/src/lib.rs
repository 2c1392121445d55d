pub mod client;
pub mod http;
pub mod page;
pub mod view;

pub use client::{NewsClient, UiEvent};
pub use http::HttpNewsApi;
pub use page::{Page, PageView, SelectOption, Toast};
pub use view::{NewsView, ToastKind};

pub mod prelude {
    pub use super::{HttpNewsApi, NewsClient, NewsView, PageView, UiEvent};
    pub use nc_core::{ClientConfig, Locale, NewsApi, NewsItem, Result, Error};
}
