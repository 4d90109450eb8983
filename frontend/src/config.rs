use premium_api::config::parse_or;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_SCORING_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub scoring_api_url: String,
    pub submit_delay: Duration,
    pub request_timeout: Duration,
    pub ready_attempts: u32,
    pub ready_backoff: Duration,
    pub static_dir: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: 1,
            scoring_api_url: DEFAULT_SCORING_API_URL.to_string(),
            submit_delay: Duration::from_millis(500),
            request_timeout: Duration::from_millis(10_000),
            ready_attempts: 5,
            ready_backoff: Duration::from_millis(250),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        }
    }
}

impl UiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = UiConfig::default();
        let millis = |key: &str, default: Duration| {
            Duration::from_millis(parse_or(&lookup, key, default.as_millis() as u64))
        };

        UiConfig {
            host: lookup("UI_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "UI_PORT", defaults.port),
            workers: parse_or(&lookup, "UI_WORKERS", defaults.workers).max(1),
            scoring_api_url: lookup("SCORING_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.scoring_api_url),
            submit_delay: millis("SUBMIT_DELAY_MS", defaults.submit_delay),
            request_timeout: millis("REQUEST_TIMEOUT_MS", defaults.request_timeout),
            ready_attempts: parse_or(&lookup, "READY_ATTEMPTS", defaults.ready_attempts),
            ready_backoff: millis("READY_BACKOFF_MS", defaults.ready_backoff),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
