//! Run configuration, loaded once at startup by the binary and passed
//! into each component's constructor. No global config state.

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the sales SQLite database file.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub from_mail: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    pub to_mail: String,
    pub template_id: String,
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

fn default_from_name() -> String {
    "Sales Desk".to_string()
}

fn default_api_url() -> String {
    "https://api.sendgrid.com/v3/mail/send".to_string()
}

fn default_subject_prefix() -> String {
    "Daily Sales Report for".to_string()
}

impl AppConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path}"))?;
        Ok(config)
    }
}
