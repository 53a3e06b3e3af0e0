use board_core::Locale;
use board_core::view::LikeMode;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub locale: Locale,
    pub like_mode: LikeMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            locale: Locale::default(),
            like_mode: LikeMode::default(),
        }
    }
}

impl ClientConfig {
    /// Reads `BOARD_*` variables, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let api_url = lookup("BOARD_API_URL").unwrap_or(defaults.api_url);
        let timeout = match lookup("BOARD_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid BOARD_TIMEOUT_SECS: {}", e))?,
            ),
            None => defaults.timeout,
        };
        let locale = match lookup("BOARD_LOCALE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid BOARD_LOCALE: {}", e))?,
            None => defaults.locale,
        };
        let like_mode = match lookup("BOARD_LIKE_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid BOARD_LIKE_MODE: {}", e))?,
            None => defaults.like_mode,
        };

        Ok(Self {
            api_url,
            timeout,
            locale,
            like_mode,
        })
    }
}
