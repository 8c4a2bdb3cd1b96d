//! `console`
//!
//! This crate contains everything terminal-specific for Athenaeum: settings
//! from the environment, stdin prompts, the interactive session and the HTML
//! preview file it maintains.
use crate::prompts::StdinPrompter;
use crate::settings::Settings;
use anyhow::{Context as _, anyhow};
use athenaeum_core::catalog::client::CatalogHttpClient;
use athenaeum_core::catalog::controller::CatalogController;
use athenaeum_core::catalog::types::Viewer;
use tracing_subscriber::{EnvFilter, fmt};

/// Preview file maintenance
mod preview;
/// Stdin implementations of the prompter seam
mod prompts;
/// Command parsing and the read-eval loop
mod session;
/// Environment-derived settings
mod settings;

/// Run the console client until the user quits or stdin closes.
/// # Errors
/// Fails if tracing cannot be initialized, required settings are missing or
/// the HTTP client cannot be constructed. A failing initial book fetch is
/// only logged, the session starts with an empty catalog.
#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Executed once per run, never across crate boundaries"
)]
pub async fn run() -> anyhow::Result<()> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let subscriber = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global tracing subscriber")?;

    if !dotenv_loaded {
        tracing::debug!("No .env file found, reading settings from the process environment only");
    }

    let settings = Settings::from_env()?;
    tracing::info!(
        api_url = %settings.api_url,
        username = %settings.username,
        "Starting Athenaeum console session"
    );

    let client = CatalogHttpClient::new(&settings.api_url).map_err(|message| anyhow!(message))?;
    let viewer = Viewer::new(settings.username.clone());
    let mut controller = CatalogController::new(client, StdinPrompter, viewer);

    match controller.load_books().await {
        Ok(cards) => {
            if let Err(error) = preview::write_page(&settings.preview_path, &cards, "", "") {
                tracing::error!("Failed to write the preview file: {error}");
            }
        }
        Err(error) => {
            tracing::error!("Initial book fetch failed, starting with an empty catalog: {error}");
        }
    }

    session::run(&mut controller, &settings).await
}
