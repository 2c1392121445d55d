use nc_core::{Category, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// The page elements a `NewsClient` reads and writes.
///
/// Implementations only hold presentation state; every method must be
/// cheap and must not call back into the client.
pub trait NewsView: Send + Sync {
    /// Replace every selector option except the empty sentinel.
    fn set_category_options(&self, categories: &[Category]);

    /// Current selector value; empty means nothing is selected.
    fn selected_category(&self) -> String;

    /// Selects `value` and returns what the selector now holds, read in the
    /// same step as the write.
    fn select_category(&self, value: &str) -> String;

    /// Replace the list contents wholesale.
    fn set_news_list(&self, list: Markup);

    fn set_news_count(&self, count: usize, label: &str);

    /// Loading indicator; while visible the list is dimmed.
    fn set_loading(&self, visible: bool);

    fn show_error(&self, message: &str);

    fn hide_error(&self);

    fn show_toast(&self, message: &str, kind: ToastKind);
}
