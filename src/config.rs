// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. Loading
//! fails fast with an error naming the first missing variable.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `API_URL` | Upstream movies API base URL | Required |
//! | `DEV` | Permissive development mode (cookie flags) | `false` |
//! | `GOOGLE_CLIENT_ID` | Google OAuth client id | Required |
//! | `GOOGLE_CLIENT_SECRET` | Google OAuth client secret | Required |
//! | `GOOGLE_REDIRECT_URI` | Google OAuth callback URL | Required |
//! | `FACEBOOK_CLIENT_ID` | Facebook OAuth app id | Required |
//! | `FACEBOOK_CLIENT_SECRET` | Facebook OAuth app secret | Required |
//! | `FACEBOOK_REDIRECT_URI` | Facebook OAuth callback URL | Required |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration missing: {0}")]
    Missing(String),

    #[error("configuration invalid: {name}={value}")]
    Invalid { name: String, value: String },
}

/// Credentials and callback location for one OAuth identity provider.
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstream movies API base URL, without a trailing slash.
    pub api_url: String,
    /// Development mode relaxes the session cookie's transport flags.
    pub dev: bool,
    pub google: OAuthCredentials,
    pub facebook: OAuthCredentials,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", DEFAULT_HOST);
        let port = match env_optional("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT".to_string(),
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let api_url = env_required("API_URL")?.trim_end_matches('/').to_string();
        let dev = parse_bool(&env_or_default("DEV", "false"));

        Ok(Self {
            host,
            port,
            api_url,
            dev,
            google: oauth_credentials_from_env("GOOGLE")?,
            facebook: oauth_credentials_from_env("FACEBOOK")?,
        })
    }
}

fn oauth_credentials_from_env(provider: &str) -> Result<OAuthCredentials, ConfigError> {
    Ok(OAuthCredentials {
        client_id: env_required(&format!("{provider}_CLIENT_ID"))?,
        client_secret: env_required(&format!("{provider}_CLIENT_SECRET"))?,
        redirect_uri: env_required(&format!("{provider}_REDIRECT_URI"))?,
    })
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn env_required(name: &str) -> Result<String, ConfigError> {
    env_optional(name).ok_or_else(|| ConfigError::Missing(name.to_string()))
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}
