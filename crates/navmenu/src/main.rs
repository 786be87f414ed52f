//! Navigation menu server.
//!
//! Loads menu messages, then either serves the menu over HTTP or dumps a
//! resolved tree to stdout.

mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navmenu::{AppState, Config, MenuProvider, MessageCatalog, routes};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, locales_dir = %config.locales_dir.display(), "Configuration loaded");

    let catalog = MessageCatalog::new();
    match catalog.load_dir(&config.locales_dir) {
        Ok(languages) => info!(languages, "Menu messages loaded"),
        Err(e) => warn!(error = %e, "no menu messages loaded, labels will show their keys"),
    }

    let provider = MenuProvider::new(Arc::new(catalog), &config.default_language);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, provider).await,
        Command::Dump { lang, compact } => cli::cmd_dump(&provider, lang.as_deref(), compact),
    }
}

async fn serve(config: &Config, provider: MenuProvider) -> Result<()> {
    // Build the default tree up front so a broken setup shows in the logs
    // before the first request.
    let tree = provider.menu(provider.default_language());
    info!(
        default_language = %provider.default_language(),
        roots = tree.len(),
        languages = provider.languages().len(),
        "Menu ready"
    );

    let app = routes::app(AppState::new(provider))
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    // Logs go to stderr so `dump` output on stdout stays clean JSON.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
