//! Card markup for the news list.

use std::time::Duration;
use chrono::{FixedOffset, Offset, Utc};
use url::Url;
use crate::date::format_published_date;
use crate::html::{Element, Markup};
use crate::locale::Locale;
use crate::types::NewsItem;

/// Entrance animation offset between consecutive cards.
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    pub utc_offset: FixedOffset,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            utc_offset: Utc.fix(),
        }
    }
}

/// Renders the whole list: the empty-state placeholder, or one card per
/// item in input order.
pub fn render_news_list(news: &[NewsItem], options: &RenderOptions) -> Markup {
    if news.is_empty() {
        return render_empty_state(options.locale);
    }
    news.iter()
        .enumerate()
        .map(|(index, item)| render_news_card(item, index, options))
        .collect()
}

pub fn render_empty_state(locale: Locale) -> Markup {
    Element::new("div")
        .class("empty-state")
        .child(Element::new("span").class("empty-icon").child(Markup::from_static("📰")))
        .child(Element::new("p").text(locale.empty_state()))
        .render()
}

pub fn render_news_card(item: &NewsItem, index: usize, options: &RenderOptions) -> Markup {
    let tags = item
        .tags
        .iter()
        .map(|tag| Element::new("span").class("tag-badge").text(tag).render());

    let header = Element::new("div")
        .class("news-card-header")
        .child(Element::new("div").class("tags-container").children(tags))
        .child(Element::new("span").class("external-link-icon").child(Markup::from_static("🔗")));

    let mut footer = Element::new("div").class("news-footer");
    if let Some(published) = item.published.as_deref() {
        let date = format_published_date(published, options.locale, &options.utc_offset);
        footer = footer.child(
            Element::new("div")
                .class("published-time")
                .child(Markup::from_static("📅 "))
                .text(date),
        );
    }

    Element::new("a")
        .class("news-card")
        .attr("href", safe_href(&item.link))
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("style", animation_delay(index))
        .child(header)
        .child(Element::new("h3").class("news-title").text(&item.title))
        .child(Element::new("p").class("news-summary").text(&item.summary))
        .child(footer)
        .render()
}

/// Only absolute http(s) links are navigable; anything else becomes `#`.
/// Accepted links are emitted as given, not re-serialized.
pub fn safe_href(link: &str) -> String {
    let link = link.trim();
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => link.to_string(),
        _ => "#".to_string(),
    }
}

fn animation_delay(index: usize) -> String {
    format!("animation-delay: {}ms", CARD_STAGGER.as_millis() * index as u128)
}
