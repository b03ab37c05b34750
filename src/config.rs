use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub http_timeout_secs: u64,
    /// How many rows the top-performer panels show.
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("API_BASE_URL").expect("API_BASE_URL must be set"),
            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            top_n: env::var("TOP_N")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap(),
        }
    }
}
