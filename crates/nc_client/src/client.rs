use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use nc_core::render::{render_empty_state, render_news_list};
use nc_core::{Category, ClientConfig, Locale, NewsApi, NewsItem, RenderOptions, Result};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};
use crate::view::{NewsView, ToastKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The page finished loading.
    Ready,
    /// The category selector now holds `value`; empty means the sentinel.
    CategoryChanged(String),
}

/// Fetches categories and news through a `NewsApi` and keeps a `NewsView`
/// in sync with the most recent result.
pub struct NewsClient {
    api: Arc<dyn NewsApi>,
    view: Arc<dyn NewsView>,
    options: RenderOptions,
    current_news: Mutex<Vec<NewsItem>>,
    listening: AtomicBool,
}

/// Hides the loading indicator when dropped, whatever the outcome of the
/// load it guards.
struct LoadingGuard<'a> {
    view: &'a dyn NewsView,
}

impl<'a> LoadingGuard<'a> {
    fn show(view: &'a dyn NewsView) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

impl NewsClient {
    pub fn new(api: Arc<dyn NewsApi>, view: Arc<dyn NewsView>, config: &ClientConfig) -> Self {
        Self {
            api,
            view,
            options: config.render_options(),
            current_news: Mutex::new(Vec::new()),
            listening: AtomicBool::new(false),
        }
    }

    fn locale(&self) -> Locale {
        self.options.locale
    }

    /// Snapshot of the most recently fetched news.
    pub fn current_news(&self) -> Vec<NewsItem> {
        self.current_news.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether selection changes are being handled yet.
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Loads categories, then starts handling selection changes. A failed
    /// category load leaves the banner up and the selector with only its
    /// sentinel option.
    pub async fn initialize(&self) {
        if self.load_categories().await.is_err() {
            debug!("Continuing with an empty category selector");
        }
        self.listening.store(true, Ordering::SeqCst);
    }

    pub async fn load_categories(&self) -> Result<Vec<Category>> {
        match self.api.categories().await {
            Ok(categories) => {
                info!("📚 Loaded {} categories", categories.len());
                self.view.set_category_options(&categories);
                Ok(categories)
            }
            Err(e) => {
                error!("Failed to load categories: {}", e);
                self.view.show_error(self.locale().categories_failed());
                Err(e)
            }
        }
    }

    pub async fn on_category_change(&self) {
        let category = self.view.selected_category();
        self.show_category(&category).await;
    }

    // Empty is the sentinel: reset the list without a request.
    async fn show_category(&self, category: &str) {
        if category.is_empty() {
            self.view.set_news_list(render_empty_state(self.locale()));
            self.view.set_news_count(0, &self.locale().news_count(0));
            return;
        }
        self.load_news(category).await;
    }

    pub async fn load_news(&self, category: &str) {
        let _loading = LoadingGuard::show(self.view.as_ref());
        self.view.hide_error();

        debug!("📰 Loading news for {}", category);
        match self.api.news(category).await {
            Ok(news) => {
                let count = news.len();
                self.replace_news(news);
                info!("✨ Loaded {} news items for {}", count, category);
                self.view.show_toast(&self.locale().news_loaded(category, count), ToastKind::Success);
            }
            Err(e) => {
                error!("Failed to load news for {}: {}", category, e);
                self.view.show_error(self.locale().news_failed());
                self.replace_news(Vec::new());
            }
        }
    }

    /// Renders `news` into the list without touching `current_news`.
    pub fn render(&self, news: &[NewsItem]) {
        self.view.set_news_list(render_news_list(news, &self.options));
    }

    // State, list and count change under one lock so concurrent loads never
    // leave a mix of two responses on the page.
    fn replace_news(&self, news: Vec<NewsItem>) {
        let mut current = self.current_news.lock().unwrap_or_else(PoisonError::into_inner);
        *current = news;
        self.render(&current);
        self.view.set_news_count(current.len(), &self.locale().news_count(current.len()));
    }

    pub async fn handle_event(&self, event: UiEvent) {
        match event {
            UiEvent::Ready => self.initialize().await,
            UiEvent::CategoryChanged(value) => {
                if !self.is_listening() {
                    debug!("Ignoring selection before initialization: {:?}", value);
                    return;
                }
                let category = self.view.select_category(&value);
                self.show_category(&category).await;
            }
        }
    }

    /// Applies events until the channel closes. Selection changes run as
    /// separate tasks so a slow fetch never blocks the next selection; the
    /// response that resolves last wins.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<UiEvent>) {
        let mut handlers = JoinSet::new();
        while let Some(event) = events.recv().await {
            match event {
                UiEvent::Ready => self.initialize().await,
                event => {
                    let client = self.clone();
                    handlers.spawn(async move { client.handle_event(event).await });
                }
            }
        }
        while let Some(result) = handlers.join_next().await {
            if let Err(e) = result {
                error!("Selection handler failed: {}", e);
            }
        }
    }
}
