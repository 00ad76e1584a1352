// ABOUTME: Environment-only application configuration for the AI gateway, storage and HTTP server
// ABOUTME: Resolves the Gemini credential, data directory and bind address without config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use tracing::{error, info};

use super::types::{Environment, LogLevel, StorageBackend};
use crate::constants::{http, llm};
use crate::errors::{AppError, AppResult};
use crate::language::Language;

/// Primary variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Legacy variable accepted when the primary one is absent
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";
/// Model override
pub const LLM_MODEL_ENV: &str = "PORAMORSHOK_LLM_MODEL";
/// Endpoint override, mainly for tests and proxies
pub const LLM_BASE_URL_ENV: &str = "PORAMORSHOK_LLM_BASE_URL";
/// Data directory override
pub const DATA_DIR_ENV: &str = "PORAMORSHOK_DATA_DIR";
/// Bind host
pub const HOST_ENV: &str = "PORAMORSHOK_HOST";
/// Bind port
pub const PORT_ENV: &str = "PORAMORSHOK_PORT";
/// Comma-separated list of browser origins allowed to call the API
pub const CORS_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Name of the store file inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

/// Gemini connection settings
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; absence is tolerated and surfaces as request-time failures
    pub api_key: Option<String>,
    /// Model used for every operation
    pub model: String,
    /// API base URL
    pub base_url: String,
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: llm::DEFAULT_MODEL.to_owned(),
            base_url: llm::GEMINI_API_BASE_URL.to_owned(),
        }
    }
}

/// Local key-value store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend selection
    pub backend: StorageBackend,
    /// Directory holding the store file
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Full path of the JSON store file
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

/// HTTP bind settings for the local API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Bind address, loopback by default
    pub host: IpAddr,
    /// Bind port
    pub port: u16,
    /// Allowed CORS origins, `*` for any
    pub cors_allowed_origins: String,
}

impl HttpConfig {
    /// Socket address to bind
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: http::DEFAULT_PORT,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Language active at startup
    pub default_language: Language,
    /// AI gateway settings
    pub gemini: GeminiConfig,
    /// Storage settings
    pub storage: StorageConfig,
    /// HTTP server settings
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A missing API key is logged and tolerated.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORAMORSHOK_HOST` or `PORAMORSHOK_PORT` is set but unparseable.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api_key = [GEMINI_API_KEY_ENV, LEGACY_API_KEY_ENV]
            .into_iter()
            .find_map(|name| env::var(name).ok().filter(|key| !key.trim().is_empty()));
        if api_key.is_none() {
            error!(
                "{GEMINI_API_KEY_ENV} environment variable not set; AI requests will fail until it is provided"
            );
        }

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(Environment::ENV_VAR, "")),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            default_language: Language::from_str_or_default(&env_var_or(Language::ENV_VAR, "en")),
            gemini: GeminiConfig {
                api_key,
                model: env_var_or(LLM_MODEL_ENV, llm::DEFAULT_MODEL),
                base_url: env_var_or(LLM_BASE_URL_ENV, llm::GEMINI_API_BASE_URL),
            },
            storage: StorageConfig {
                backend: StorageBackend::from_str_or_default(&env_var_or(
                    StorageBackend::ENV_VAR,
                    "file",
                )),
                data_dir: env::var(DATA_DIR_ENV).map_or_else(|_| default_data_dir(), PathBuf::from),
            },
            http: HttpConfig {
                host: env_var_or(HOST_ENV, http::DEFAULT_HOST)
                    .parse()
                    .map_err(|e| AppError::config(format!("Invalid {HOST_ENV} value: {e}")))?,
                port: env_var_or(PORT_ENV, &http::DEFAULT_PORT.to_string())
                    .parse()
                    .map_err(|e| AppError::config(format!("Invalid {PORT_ENV} value: {e}")))?,
                cors_allowed_origins: env_var_or(CORS_ORIGINS_ENV, "*"),
            },
        };

        Ok(config)
    }

    /// True when an API key was resolved
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }

    /// One-line configuration summary for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} language={} model={} api_key={} storage={} data_dir={} http={}",
            self.environment,
            self.default_language,
            self.gemini.model,
            if self.has_api_key() { "set" } else { "missing" },
            self.storage.backend,
            self.storage.data_dir.display(),
            self.http.socket_addr(),
        )
    }
}

/// Platform data directory for the store, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("poramorshok")
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
