use anyhow::Context as _;
use std::env;
use std::path::PathBuf;

/// Default viewer name when none is configured. Matches the sentinel the
/// service uses for visitors without an account.
const DEFAULT_USERNAME: &str = "Anonymous";
const DEFAULT_PREVIEW_PATH: &str = "athenaeum-preview.html";

/// Runtime settings, read from `ATHENAEUM_*` environment variables (after an
/// optional `.env` file has been loaded).
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base endpoint of the catalog service, e.g. `https://example.com/api.php`
    pub api_url: String,
    /// Name the viewer's comments are posted under
    pub username: String,
    /// Path of the HTML preview file the session maintains
    pub preview_path: PathBuf,
}

impl Settings {
    /// Read settings from the environment.
    /// # Errors
    /// Fails if `ATHENAEUM_API_URL` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("ATHENAEUM_API_URL")
            .context("ATHENAEUM_API_URL must be set to the catalog endpoint")?;
        let username =
            env::var("ATHENAEUM_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_owned());
        let preview_path = env::var("ATHENAEUM_PREVIEW")
            .map_or_else(|_| PathBuf::from(DEFAULT_PREVIEW_PATH), PathBuf::from);

        Ok(Self {
            api_url,
            username,
            preview_path,
        })
    }
}
