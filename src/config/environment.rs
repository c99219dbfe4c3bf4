// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern.
// * Every setting has a default, so an empty environment serves on 0.0.0.0:8009.
// * Keys are prefixed so a front-end's .env (PORT, HOST, ...) in the same directory is ignored.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8009;
pub const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

// ! Variable names read by the server
pub const ENVIRONMENT_KEY: &str = "PING_SERVER_ENVIRONMENT";
pub const HOST_KEY: &str = "PING_SERVER_HOST";
pub const PORT_KEY: &str = "PING_SERVER_PORT";
pub const TIMEOUT_KEY: &str = "PING_SERVER_TIMEOUT_SECONDS";

// * A struct containing all environment variables used by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables.
    // * Only reads .env if PING_SERVER_ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var(ENVIRONMENT_KEY).unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit variable map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        Ok(Self {
            environment: get_var(ENVIRONMENT_KEY)
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing {ENVIRONMENT_KEY}, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var(HOST_KEY)
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var(PORT_KEY)
                .map(|s| s.parse().with_context(|| format!("Invalid {PORT_KEY} value")))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            default_timeout_seconds: get_var(TIMEOUT_KEY)
                .map(|s| s.parse().with_context(|| format!("Invalid {TIMEOUT_KEY} value")))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    /// Address the listener binds to when no socket is inherited
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, String>> = Lazy::new(|| {
            let config: EnvironmentVariables =
                EnvironmentVariables::load().map_err(|err| format!("{err:#}"))?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        INSTANCE
            .as_ref()
            .map_err(|err| anyhow::anyhow!("Failed to load environment configuration: {err}"))
    }
}


// End of file: /src/config/environment.rs
