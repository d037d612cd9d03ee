//! Configuration module

use std::env;
use std::str::FromStr;

pub const DEFAULT_LLM_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.0-flash";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Base URL of the text-generation API
    pub llm_api_url: String,

    /// API key for the text-generation API (None disables the AI features)
    pub llm_api_key: Option<String>,

    /// Model name used for both AI adapters
    pub llm_model: String,

    /// Request timeout for the text-generation API
    pub llm_timeout_secs: u64,

    /// Artificial delay applied when a view generates its records
    pub mock_latency_ms: u64,

    /// Page size used when the client does not send one
    pub default_page_size: usize,

    /// Upper bound for client-supplied page sizes
    pub max_page_size: usize,

    /// Number of view logs considered for the AI summary
    pub summary_sample_size: usize,

    /// Idle time after which a view is discarded
    pub view_ttl_secs: u64,

    /// Maximum number of open views
    pub max_views: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            llm_api_url: DEFAULT_LLM_API_URL.to_string(),
            llm_api_key: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: 60,
            mock_latency_ms: 1000,
            default_page_size: 10,
            max_page_size: 100,
            summary_sample_size: 15,
            view_ttl_secs: 30 * 60,
            max_views: 256,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            llm_api_url: env::var("LLM_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.llm_api_url),

            llm_api_key: ["LLM_API_KEY", "GOOGLE_API_KEY", "GEMINI_API_KEY"]
                .iter()
                .filter_map(|name| env::var(name).ok())
                .find(|key| !key.trim().is_empty()),

            llm_model: env::var("LLM_MODEL")
                .unwrap_or(defaults.llm_model),

            llm_timeout_secs: parse_var("LLM_TIMEOUT_SECS").unwrap_or(defaults.llm_timeout_secs),

            mock_latency_ms: parse_var("MOCK_LATENCY_MS").unwrap_or(defaults.mock_latency_ms),

            default_page_size: parse_var::<usize>("DEFAULT_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.default_page_size),

            max_page_size: parse_var::<usize>("MAX_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.max_page_size),

            summary_sample_size: parse_var("SUMMARY_SAMPLE_SIZE").unwrap_or(defaults.summary_sample_size),

            view_ttl_secs: parse_var("VIEW_TTL_SECS").unwrap_or(defaults.view_ttl_secs),

            max_views: parse_var::<usize>("MAX_VIEWS")
                .filter(|max| *max > 0)
                .unwrap_or(defaults.max_views),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
