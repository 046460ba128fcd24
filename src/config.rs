use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:42068";
pub const API_V1_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Resolved once at startup; `API_BASE_URL` overrides the default.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}
