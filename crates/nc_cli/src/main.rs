use anyhow::Context;
use clap::Parser;
use nc_client::{HttpNewsApi, NewsClient, PageView, UiEvent};
use nc_core::{ClientConfig, Locale, NewsApi};
use nc_web::AppState;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

mod logging;
mod terminal;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse categorized news from the news backend", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "ja", help = "UI language. Available: ja (default), en")]
    locale: Locale,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the categories the backend offers
    Categories,
    /// Show the news page for one category
    News {
        category: String,
        /// Also write the rendered page to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Read one category per line from stdin and redraw the page after each; an empty line clears the selection
    Watch,
    /// Serve the page over HTTP
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

struct Session {
    view: Arc<PageView>,
    client: NewsClient,
}

impl Session {
    fn new(api: Arc<dyn NewsApi>, config: &ClientConfig) -> Self {
        let view = Arc::new(PageView::from_config(config));
        let client = NewsClient::new(api, view.clone(), config);
        Self { view, client }
    }

    fn print(&self, config: &ClientConfig) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        terminal::print_page(
            &mut stdout,
            &self.view.snapshot(),
            &self.client.current_news(),
            &config.render_options(),
        )?;
        stdout.flush()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = ClientConfig::default().with_locale(cli.locale);
    let api: Arc<dyn NewsApi> = Arc::new(HttpNewsApi::new(&config.api_base_url)?);
    info!("🌐 Using backend at {}", config.api_base_url);

    match cli.command {
        Commands::Categories => {
            let categories = api
                .categories()
                .await
                .context(config.locale.categories_failed())?;
            let categories: Vec<&str> = categories.iter().map(String::as_str).collect();
            terminal::print_categories(&mut std::io::stdout().lock(), &categories)?;
        }
        Commands::News { category, html } => {
            let session = Session::new(api, &config);
            session.client.handle_event(UiEvent::Ready).await;
            if !session.view.snapshot().categories().contains(&category.as_str()) {
                warn!("Category {:?} is not offered by the backend", category);
            }
            session.client.handle_event(UiEvent::CategoryChanged(category)).await;
            session.print(&config)?;

            if let Some(path) = html {
                let document = session.view.snapshot().to_html();
                std::fs::write(&path, document.as_str())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("💾 Wrote page to {}", path.display());
            }
        }
        Commands::Watch => {
            let session = Session::new(api, &config);
            session.client.handle_event(UiEvent::Ready).await;
            terminal::print_categories(
                &mut std::io::stdout().lock(),
                &session.view.snapshot().categories(),
            )?;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let value = resolve_selection(line.trim(), &session.view.snapshot().categories());
                session.client.handle_event(UiEvent::CategoryChanged(value)).await;
                session.print(&config)?;
            }
        }
        Commands::Serve { port } => {
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
                .await
                .with_context(|| format!("Failed to bind port {}", port))?;
            info!("🚀 Serving news page on http://{}", listener.local_addr()?);
            let app = nc_web::create_app(AppState { api, config });
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

/// Accepts either a category name or its 1-based number from the listing.
fn resolve_selection(input: &str, categories: &[&str]) -> String {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= categories.len() && !categories.contains(&input) => {
            categories[n - 1].to_string()
        }
        _ => input.to_string(),
    }
}
