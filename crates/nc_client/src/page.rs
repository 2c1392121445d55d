//! In-memory page model and the `NewsView` that drives it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use nc_core::render::render_empty_state;
use nc_core::{Category, ClientConfig, Element, Locale, Markup};
use tracing::warn;
use crate::view::{NewsView, ToastKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub locale: Locale,
    /// Selector options; the first is always the empty sentinel.
    pub options: Vec<SelectOption>,
    pub selected: String,
    pub news_list: Markup,
    pub news_count: usize,
    pub news_count_label: String,
    pub loading: bool,
    pub error: Option<String>,
    pub toast: Option<Toast>,
}

impl Page {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            options: vec![Self::sentinel(locale)],
            selected: String::new(),
            news_list: render_empty_state(locale),
            news_count: 0,
            news_count_label: locale.news_count(0),
            loading: false,
            error: None,
            toast: None,
        }
    }

    fn sentinel(locale: Locale) -> SelectOption {
        SelectOption {
            value: String::new(),
            label: locale.select_prompt().to_string(),
        }
    }

    /// Category values offered by the selector, without the sentinel.
    pub fn categories(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| !option.value.is_empty())
            .map(|option| option.value.as_str())
            .collect()
    }

    pub fn visible_toast(&self) -> Option<&Toast> {
        self.toast.as_ref().filter(|toast| toast.visible)
    }

    /// Full HTML document for the page, in the locale it was created with.
    pub fn to_html(&self) -> Markup {
        let locale = self.locale;

        let options = self.options.iter().map(|option| {
            Element::new("option")
                .attr("value", option.value.as_str())
                .attr_if(option.value == self.selected, "selected", "")
                .text(&option.label)
        });

        let controls = Element::new("form")
            .class("controls")
            .attr("method", "get")
            .attr("action", "/")
            .child(
                Element::new("select")
                    .id("categoryFilter")
                    .attr("name", "category")
                    .attr("onchange", "this.form.submit()")
                    .children(options),
            )
            .child(
                Element::new("noscript").child(
                    Element::new("button")
                        .attr("type", "submit")
                        .text(locale.show_button()),
                ),
            )
            .child(
                Element::new("span")
                    .id("newsCount")
                    .class("news-count")
                    .text(&self.news_count_label),
            );

        let loading = Element::new("div")
            .id("loading")
            .class(with_hidden("loading", !self.loading))
            .text(locale.loading());

        let error = Element::new("div")
            .id("error")
            .class(with_hidden("error-message", self.error.is_none()))
            .text(self.error.as_deref().unwrap_or_default());

        let news_list = Element::new("div")
            .id("newsList")
            .class("news-list")
            .attr("style", if self.loading { "opacity: 0.3" } else { "opacity: 1" })
            .child(self.news_list.clone());

        let toast = match &self.toast {
            Some(toast) => Element::new("div")
                .id("toast")
                .class(with_hidden(&format!("toast {}", toast.kind.as_str()), !toast.visible))
                .text(&toast.message),
            None => Element::new("div").id("toast").class("toast hidden"),
        };

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(locale.page_title()));

        let body = Element::new("body").child(
            Element::new("div")
                .class("container")
                .child(Element::new("header").child(Element::new("h1").text(locale.page_title())))
                .child(controls)
                .child(loading)
                .child(error)
                .child(news_list)
                .child(toast),
        );

        let mut document = Markup::from_static("<!DOCTYPE html>\n");
        document.push(Element::new("html").attr("lang", locale.lang()).child(head).child(body));
        document
    }
}

fn with_hidden(class: &str, hidden: bool) -> String {
    if hidden {
        format!("{} hidden", class)
    } else {
        class.to_string()
    }
}

/// `NewsView` over a shared [`Page`].
///
/// Clones share the same page. Toasts are hidden by a tokio timer; a newer
/// toast restarts the countdown.
#[derive(Clone)]
pub struct PageView {
    page: Arc<Mutex<Page>>,
    toast_duration: Duration,
    toast_generation: Arc<AtomicU64>,
}

impl PageView {
    pub fn new(locale: Locale, toast_duration: Duration) -> Self {
        Self {
            page: Arc::new(Mutex::new(Page::new(locale))),
            toast_duration,
            toast_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.locale, config.toast_duration)
    }

    pub fn snapshot(&self) -> Page {
        self.with_page(|page| page.clone())
    }

    fn with_page<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.page.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }
}

impl NewsView for PageView {
    fn set_category_options(&self, categories: &[Category]) {
        self.with_page(|page| {
            let sentinel = Page::sentinel(page.locale);
            page.options = std::iter::once(sentinel)
                .chain(categories.iter().map(|category| SelectOption {
                    value: category.clone(),
                    label: category.clone(),
                }))
                .collect();
            if !page.options.iter().any(|option| option.value == page.selected) {
                page.selected.clear();
            }
        });
    }

    fn selected_category(&self) -> String {
        self.with_page(|page| page.selected.clone())
    }

    fn select_category(&self, value: &str) -> String {
        self.with_page(|page| {
            // Like a <select>, an unknown value leaves nothing selected
            page.selected = if page.options.iter().any(|option| option.value == value) {
                value.to_string()
            } else {
                String::new()
            };
            page.selected.clone()
        })
    }

    fn set_news_list(&self, list: Markup) {
        self.with_page(|page| page.news_list = list);
    }

    fn set_news_count(&self, count: usize, label: &str) {
        self.with_page(|page| {
            page.news_count = count;
            page.news_count_label = label.to_string();
        });
    }

    fn set_loading(&self, visible: bool) {
        self.with_page(|page| page.loading = visible);
    }

    fn show_error(&self, message: &str) {
        self.with_page(|page| page.error = Some(message.to_string()));
    }

    fn hide_error(&self) {
        self.with_page(|page| page.error = None);
    }

    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.with_page(|page| {
            page.toast = Some(Toast {
                message: message.to_string(),
                kind,
                visible: true,
            });
        });
        let generation = self.toast_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No tokio runtime, toast will stay visible: {}", message);
            return;
        };
        let page = self.page.clone();
        let current = self.toast_generation.clone();
        let duration = self.toast_duration;
        handle.spawn(async move {
            tokio::time::sleep(duration).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }
            let mut page = page.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(toast) = page.toast.as_mut() {
                toast.visible = false;
            }
        });
    }
}
