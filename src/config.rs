use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;
use crate::graphql::GraphqlConfig;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_PAGE_TIMEOUT_MS: u64 = 5000;
const DEFAULT_REFRESH_SECS: u64 = 2;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound for each backend fetch made while rendering a page.
    pub page_timeout: Duration,
    /// Delay before the loading page asks the browser to reload.
    pub refresh_secs: u64,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("GRAPHQL_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Config("GRAPHQL_URL is not set".to_string()))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let page_timeout_ms = parse_number(&lookup, "PAGE_TIMEOUT_MS", DEFAULT_PAGE_TIMEOUT_MS)?;
        let refresh_secs = parse_number(&lookup, "REFRESH_SECS", DEFAULT_REFRESH_SECS)?;

        Ok(Self {
            bind_addr,
            page_timeout: Duration::from_millis(page_timeout_ms),
            refresh_secs,
            graphql: GraphqlConfig { endpoint },
        })
    }
}

fn parse_number<F>(lookup: &F, key: &str, default: u64) -> Result<u64, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("{} is invalid: {}", key, e))),
    }
}
