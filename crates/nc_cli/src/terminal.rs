use std::io::{self, Write};
use crossterm::style::Stylize;
use nc_client::{Page, ToastKind};
use nc_core::date::format_published_date;
use nc_core::{NewsItem, RenderOptions};

/// Prints the page the way the browser would lay it out, top to bottom.
pub fn print_page(
    out: &mut impl Write,
    page: &Page,
    news: &[NewsItem],
    options: &RenderOptions,
) -> io::Result<()> {
    let locale = options.locale;
    let selected = if page.selected.is_empty() {
        locale.select_prompt()
    } else {
        page.selected.as_str()
    };

    writeln!(out, "{}", format!("== {} ==", locale.page_title()).bold())?;
    writeln!(out, "[{}]  {}", selected.cyan(), page.news_count_label.as_str().dim())?;

    if let Some(error) = page.error.as_deref() {
        writeln!(out, "{}", format!("⚠ {}", error).red().bold())?;
    }
    if let Some(toast) = page.visible_toast() {
        let line = match toast.kind {
            ToastKind::Success => toast.message.as_str().green(),
            ToastKind::Error => toast.message.as_str().red(),
        };
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;

    if news.is_empty() {
        writeln!(out, "📰 {}", locale.empty_state())?;
        return Ok(());
    }

    for (index, item) in news.iter().enumerate() {
        writeln!(out, "{:>2}. {}", index + 1, item.title.as_str().bold())?;
        writeln!(out, "    {}", item.summary)?;

        let mut meta = item
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(published) = item.published.as_deref() {
            if !meta.is_empty() {
                meta.push_str("  ");
            }
            meta.push_str("📅 ");
            meta.push_str(&format_published_date(published, locale, &options.utc_offset));
        }
        if !meta.is_empty() {
            writeln!(out, "    {}", meta.yellow())?;
        }
        writeln!(out, "    🔗 {}", item.link.as_str().dim())?;
    }
    Ok(())
}

/// Category list, one per line, numbered the way `watch` accepts them.
pub fn print_categories(out: &mut impl Write, categories: &[&str]) -> io::Result<()> {
    for (index, category) in categories.iter().enumerate() {
        writeln!(out, "{:>2}. {}", index + 1, category)?;
    }
    Ok(())
}
