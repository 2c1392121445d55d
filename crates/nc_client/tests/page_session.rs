use std::sync::Arc;
use chrono::FixedOffset;
use nc_client::{HttpNewsApi, NewsClient, PageView, UiEvent};
use nc_core::{ClientConfig, Locale};
use scraper::{Html, Selector};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["テクノロジー", "IT & AI"])))
        .mount(&server)
        .await;
    server
}

fn session(server: &MockServer, locale: Locale) -> (PageView, NewsClient) {
    let config = ClientConfig::default()
        .with_api_base_url(format!("{}/api", server.uri()))
        .with_locale(locale)
        .with_utc_offset(FixedOffset::east_opt(9 * 3600).unwrap());
    let api = HttpNewsApi::new(&config.api_base_url).unwrap();
    let view = PageView::from_config(&config);
    let client = NewsClient::new(Arc::new(api), Arc::new(view.clone()), &config);
    (view, client)
}

#[tokio::test]
async fn test_full_session_against_backend() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .and(query_param("category", "IT & AI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "title": "Chips <b>ship</b>",
                "summary": "Fabs & \"yields\"",
                "link": "https://example.com/chips",
                "tags": ["semis", "<i>x</i>"],
                "published": "2024-01-05T09:30:00Z"
            },
            {
                "title": "Second",
                "summary": "No date",
                "link": "https://example.com/second",
                "tags": [],
                "published": ""
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (view, client) = session(&server, Locale::Ja);
    client.handle_event(UiEvent::Ready).await;
    client.handle_event(UiEvent::CategoryChanged("IT & AI".to_string())).await;

    let requests = server.received_requests().await.unwrap();
    let news_requests: Vec<_> = requests.iter().filter(|r| r.url.path() == "/api/news").collect();
    assert_eq!(news_requests.len(), 1);
    assert_eq!(news_requests[0].url.query(), Some("category=IT%20%26%20AI"));

    let page = view.snapshot();
    assert_eq!(page.categories(), vec!["テクノロジー", "IT & AI"]);
    assert_eq!(page.news_count, 2);
    assert!(page.error.is_none());

    let html = page.to_html();
    let doc = Html::parse_document(html.as_str());
    let cards = Selector::parse("#newsList a.news-card").unwrap();
    let titles: Vec<String> = doc
        .select(&cards)
        .map(|card| {
            let title = Selector::parse(".news-title").unwrap();
            card.select(&title).next().unwrap().text().collect()
        })
        .collect();
    assert_eq!(titles, vec!["Chips <b>ship</b>", "Second"]);

    let injected = Selector::parse("#newsList b, #newsList i").unwrap();
    assert!(doc.select(&injected).next().is_none());

    let published = Selector::parse(".published-time").unwrap();
    let dates: Vec<String> = doc.select(&published).map(|el| el.text().collect()).collect();
    assert_eq!(dates, vec!["📅 2024/01/05 18:30"]);
}

#[tokio::test]
async fn test_backend_error_is_reported_in_page() {
    let server = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Invalid category"})))
        .mount(&server)
        .await;

    let (view, client) = session(&server, Locale::En);
    client.initialize().await;
    client.handle_event(UiEvent::CategoryChanged("テクノロジー".to_string())).await;

    let page = view.snapshot();
    assert_eq!(page.error.as_deref(), Some("Failed to load news"));
    assert_eq!(page.news_count_label, "0 items");
    assert!(client.current_news().is_empty());
    assert!(!page.loading);

    let html = page.to_html();
    let doc = Html::parse_document(html.as_str());
    let banner = Selector::parse("#error").unwrap();
    let banner = doc.select(&banner).next().unwrap();
    assert_eq!(banner.value().attr("class"), Some("error-message"));
}

#[tokio::test]
async fn test_unreachable_backend_degrades() {
    let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:1/api");
    let api = HttpNewsApi::new(&config.api_base_url).unwrap();
    let view = PageView::from_config(&config);
    let client = NewsClient::new(Arc::new(api), Arc::new(view.clone()), &config);

    client.initialize().await;

    let page = view.snapshot();
    assert_eq!(page.error.as_deref(), Some("カテゴリの読み込みに失敗しました"));
    assert!(page.categories().is_empty());
}
