//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton
//! containing runtime configuration values loaded from environment
//! variables (and `.env` during development). It provides thread-safe
//! access plus per-field setters for overrides in tests.

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// The complete application configuration loaded from the environment.
///
/// Every field has a default, so the service starts without any
/// environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    /// Upper bound on transcript word counts accepted for scoring.
    /// Word alignment is quadratic, so this caps worst-case latency.
    pub max_transcript_tokens: usize,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "dictation-lab".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "logs/api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "true".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .unwrap_or(3000),
            max_transcript_tokens: env::var("MAX_TRANSCRIPT_TOKENS")
                .unwrap_or_else(|_| "5000".into())
                .parse()
                .unwrap_or(5000),
        }
    }

    /// Returns a shared read guard over the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Reloads the configuration from the environment, clearing any
    /// overrides. Useful in tests.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    pub fn set_env(value: impl Into<String>) {
        Self::set_field(|config| config.env = value.into());
    }

    pub fn set_host(value: impl Into<String>) {
        Self::set_field(|config| config.host = value.into());
    }

    pub fn set_port(value: u16) {
        Self::set_field(|config| config.port = value);
    }

    pub fn set_max_transcript_tokens(value: usize) {
        Self::set_field(|config| config.max_transcript_tokens = value);
    }
}

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn max_transcript_tokens() -> usize {
    AppConfig::global().max_transcript_tokens
}
