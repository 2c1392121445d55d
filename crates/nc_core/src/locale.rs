use std::fmt;
use std::str::FromStr;

/// UI language. Selects both the message catalog and the date layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn lang(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// chrono format string for a published timestamp.
    pub fn date_format(&self) -> &'static str {
        match self {
            Locale::Ja => "%Y/%m/%d %H:%M",
            Locale::En => "%m/%d/%Y, %I:%M %p",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Locale::Ja => "ニュース一覧",
            Locale::En => "News",
        }
    }

    pub fn select_prompt(&self) -> &'static str {
        match self {
            Locale::Ja => "カテゴリーを選択",
            Locale::En => "Select a category",
        }
    }

    pub fn show_button(&self) -> &'static str {
        match self {
            Locale::Ja => "表示",
            Locale::En => "Show",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Locale::Ja => "読み込み中...",
            Locale::En => "Loading...",
        }
    }

    pub fn empty_state(&self) -> &'static str {
        match self {
            Locale::Ja => "カテゴリーを選択してニュースを表示",
            Locale::En => "Select a category to show news",
        }
    }

    pub fn categories_failed(&self) -> &'static str {
        match self {
            Locale::Ja => "カテゴリの読み込みに失敗しました",
            Locale::En => "Failed to load categories",
        }
    }

    pub fn news_failed(&self) -> &'static str {
        match self {
            Locale::Ja => "ニュースの読み込みに失敗しました",
            Locale::En => "Failed to load news",
        }
    }

    pub fn news_count(&self, count: usize) -> String {
        match self {
            Locale::Ja => format!("{} 件", count),
            Locale::En if count == 1 => "1 item".to_string(),
            Locale::En => format!("{} items", count),
        }
    }

    pub fn news_loaded(&self, category: &str, count: usize) -> String {
        match self {
            Locale::Ja => format!("{}のニュースを{}件取得しました", category, count),
            Locale::En => format!("Loaded {} {} news items", count, category),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lang())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Locale::Ja),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}
