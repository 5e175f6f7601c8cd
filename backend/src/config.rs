//! Server configuration, read once from the environment at startup.
//!
//! | Variable            | Default                   |
//! |---------------------|---------------------------|
//! | `MEME_HOST`         | `127.0.0.1`               |
//! | `MEME_PORT`         | `8080`                    |
//! | `MEME_OPEN_BROWSER` | `true`                    |
//! | `IMGFLIP_API_BASE`  | `https://api.imgflip.com` |
//! | `IMGFLIP_USERNAME`  | empty                     |
//! | `IMGFLIP_PASSWORD`  | empty                     |
//!
//! Bad values are logged and replaced by the default; startup never fails on
//! configuration.

use common::requests::{ApiConfig, Credentials, DEFAULT_API_BASE};
use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Handed to the browser through `GET /api/config`.
    pub api: ApiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("MEME_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("MEME_PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = match var("MEME_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("MEME_OPEN_BROWSER={} is not a boolean, using true", raw);
                true
            }),
            None => true,
        };

        let username = var("IMGFLIP_USERNAME").unwrap_or_default();
        let password = var("IMGFLIP_PASSWORD").unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            warn!("IMGFLIP_USERNAME/IMGFLIP_PASSWORD not set, caption requests will be rejected");
        }

        Self {
            host: var("MEME_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
            api: ApiConfig {
                api_base: var("IMGFLIP_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                credentials: Credentials { username, password },
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
