pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_EXCHANGE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "user-report")]
#[command(about = "Serves a random person report enriched with country, currency and news data")]
pub struct CliConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[arg(long, env = "USER_REPORT_CONFIG", help = "Optional TOML file with provider endpoints")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "RESTCOUNTRIES_API_KEY", hide_env_values = true)]
    pub restcountries_key: Option<String>,

    /// Older name for the countries key, used when `RESTCOUNTRIES_API_KEY` is unset or empty.
    #[arg(long, env = "RESTCOUNTRIES_KEY", hide_env_values = true, hide = true)]
    pub restcountries_key_fallback: Option<String>,

    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    #[arg(long, env = "EXCHANGE_RATE_KEY", hide_env_values = true)]
    pub exchange_rate_key: Option<String>,

    #[arg(long, env = "REQUEST_TIMEOUT_SECONDS", help = "Timeout for each upstream request")]
    pub request_timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Merges CLI/env values over the optional TOML file over built-in defaults.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading provider config from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let restcountries_key = non_empty(&self.restcountries_key)
            .or_else(|| non_empty(&self.restcountries_key_fallback));

        let timeout = self
            .request_timeout
            .or(file.http.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let config = AppConfig {
            endpoints: Endpoints {
                random_user: file
                    .endpoints
                    .random_user
                    .unwrap_or_else(|| DEFAULT_RANDOM_USER_URL.to_string()),
                countries: file
                    .endpoints
                    .countries
                    .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string()),
                exchange: file
                    .endpoints
                    .exchange
                    .unwrap_or_else(|| DEFAULT_EXCHANGE_URL.to_string()),
                news: file
                    .endpoints
                    .news
                    .unwrap_or_else(|| DEFAULT_NEWS_URL.to_string()),
            },
            credentials: Credentials::new(
                restcountries_key,
                self.news_api_key.clone(),
                self.exchange_rate_key.clone(),
            ),
            request_timeout: Some(Duration::from_secs(timeout)),
        };

        validate_positive_number("http.timeout_seconds", timeout, 1)?;
        config.validate()?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("port", u64::from(self.port), 1)
    }
}

/// Base URLs of the four providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub random_user: String,
    pub countries: String,
    pub exchange: String,
    pub news: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            random_user: DEFAULT_RANDOM_USER_URL.to_string(),
            countries: DEFAULT_COUNTRIES_URL.to_string(),
            exchange: DEFAULT_EXCHANGE_URL.to_string(),
            news: DEFAULT_NEWS_URL.to_string(),
        }
    }
}

impl Validate for Endpoints {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.random_user", &self.random_user)?;
        validate_url("endpoints.countries", &self.countries)?;
        validate_url("endpoints.exchange", &self.exchange)?;
        validate_url("endpoints.news", &self.news)
    }
}

/// Provider keys. Each one independently switches its provider on; an absent key is
/// not an error. Empty strings count as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub restcountries: Option<String>,
    pub news: Option<String>,
    pub exchange_rate: Option<String>,
}

impl Credentials {
    pub fn new(
        restcountries: Option<String>,
        news: Option<String>,
        exchange_rate: Option<String>,
    ) -> Self {
        Self {
            restcountries: restcountries.filter(|k| !k.is_empty()),
            news: news.filter(|k| !k.is_empty()),
            exchange_rate: exchange_rate.filter(|k| !k.is_empty()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = |k: &Option<String>| if k.is_some() { "set" } else { "unset" };
        f.debug_struct("Credentials")
            .field("restcountries", &state(&self.restcountries))
            .field("news", &state(&self.news))
            .field("exchange_rate", &state(&self.exchange_rate))
            .finish()
    }
}

/// Resolved, read-only settings handed to each provider at construction.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub credentials: Credentials,
    pub request_timeout: Option<Duration>,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.endpoints.validate()
    }
}
