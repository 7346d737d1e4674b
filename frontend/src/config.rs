use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// How long the success message stays up before the form clears itself
pub const DEFAULT_RESET_DELAY_MS: u32 = 5000;

/// Build-time configuration for the setup form
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub reset_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Defaults, with the API base URL taken from `SETUP_API_BASE_URL` when it
    /// was set at compile time
    pub fn from_env() -> Self {
        Self::with_base_url_override(option_env!("SETUP_API_BASE_URL"))
    }

    fn with_base_url_override(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        Self {
            api_base_url,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
