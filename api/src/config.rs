use std::env;

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Run the bundled schema on startup
    pub apply_schema: bool,
    /// Per-IP rate limiting on the write routes
    pub rate_limit: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match lookup("PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", p))?,
            None => 8080,
        };

        Ok(Self {
            database_url,
            port,
            apply_schema: flag(&lookup, "APPLY_SCHEMA", true)?,
            rate_limit: flag(&lookup, "RATE_LIMIT", true)?,
        })
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> anyhow::Result<bool> {
    match lookup(key) {
        Some(value) => parse_flag(&value).with_context(|| format!("Invalid value for {}", key)),
        None => Ok(default),
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}
