use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Announcer configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub whop_api_key: String,
    pub whop_agent_user_id: String,
    pub whop_company_id: String,
    pub forum_experience_id: String,
    pub fallback_webhook_url: Option<String>,
    pub app_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            whop_api_key: env::var("WHOP_API_KEY").context("WHOP_API_KEY must be set")?,
            whop_agent_user_id: env::var("WHOP_AGENT_USER_ID")
                .context("WHOP_AGENT_USER_ID must be set")?,
            whop_company_id: env::var("WHOP_COMPANY_ID")
                .context("WHOP_COMPANY_ID must be set")?,
            forum_experience_id: env::var("WHOP_FORUM_EXPERIENCE_ID")
                .context("WHOP_FORUM_EXPERIENCE_ID must be set")?,
            fallback_webhook_url: env::var("FALLBACK_WEBHOOK_URL").ok(),
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "https://whop.com".to_string()),
        })
    }
}
