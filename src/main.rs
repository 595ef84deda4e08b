use clap::Parser;
use summarizer::{
    api::{handlers::AppState, routes},
    cli::{Cli, Commands},
    config::Settings,
    github::GitHubClient,
    llm::Summarizer,
    Error, Result,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,summarizer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env()?;
    settings.validate()?;

    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Summarize { url } => {
            summarizer::cli::commands::summarize(&settings, &url).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }
    settings.validate()?;

    info!("Starting repository summarizer");
    info!("GitHub API: {}", settings.github.api_base_url);
    info!(
        "Generation provider: {} (model {})",
        settings.llm.base_url, settings.llm.model
    );

    if settings.github.token.is_none() {
        warn!("GITHUB_TOKEN not set; GitHub requests are unauthenticated");
    }
    if settings.llm.api_key.is_none() {
        warn!("NEBIUS_API_KEY not set; every summary will be the fallback analysis");
    }

    let state = AppState {
        github: GitHubClient::new(settings.github.clone())?,
        summarizer: Summarizer::new(settings.llm.clone())?,
    };

    let app = routes::create_router(state, &settings.server);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
