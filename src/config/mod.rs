use std::env;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub backend_url: String,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            max_page_size: env::var("MAX_PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}
