use crate::constants::{DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS};
use crate::error::ConfigError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use crate::utils::id::get_id;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, warn};

/// Target environment of the API
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live system
    #[default]
    Production,
    /// Pre-release system
    Staging,
    /// Development system
    Development,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Development => "development",
        };
        f.write_str(name)
    }
}

/// Unknown names fall back to [`Environment::Production`]
impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Environment::Staging,
            "development" => Environment::Development,
            "production" => Environment::Production,
            other => {
                warn!("Unknown environment '{}', falling back to production", other);
                Environment::Production
            }
        })
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Connection configuration for the Tracking3 API
///
/// Email and password are mandatory even when a token is supplied; tokens take
/// precedence for authorization, basic auth is the fallback.
pub struct Configuration {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// OAuth access token, preferred over every other credential
    pub access_token: Option<String>,
    /// OAuth refresh token, used when no access token is set
    pub refresh_token: Option<String>,
    /// Identifier of the calling 3rd party application
    pub id_application: Option<String>,
    /// Identifier correlating requests of one API transaction
    pub id_api_transaction: Option<String>,
    /// Request timeout in seconds, `0` disables the timeout
    pub timeout: u64,
    /// API version used to build endpoint paths
    pub api_version: String,
    /// Target environment
    pub environment: Environment,
    /// Whether higher layers should log in automatically
    pub do_auto_login: bool,
}

impl Configuration {
    /// Creates a configuration with default values
    ///
    /// # Errors
    ///
    /// * [`ConfigError::MissingPassword`] if `password` is empty
    /// * [`ConfigError::MissingEmail`] if `email` is empty
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into();
        let password = password.into();

        if password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }
        if email.is_empty() {
            return Err(ConfigError::MissingEmail);
        }

        Ok(Self {
            email,
            password,
            access_token: None,
            refresh_token: None,
            id_application: None,
            id_api_transaction: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            api_version: DEFAULT_API_VERSION.to_string(),
            environment: Environment::default(),
            do_auto_login: true,
        })
    }

    /// Loads the configuration from the environment (and a `.env` file if present)
    ///
    /// Recognised variables: `T3_EMAIL`, `T3_PASSWORD`, `T3_ACCESS_TOKEN`,
    /// `T3_REFRESH_TOKEN`, `T3_ID_APPLICATION`, `T3_ID_API_TRANSACTION`,
    /// `T3_TIMEOUT`, `T3_API_VERSION`, `T3_ENVIRONMENT`, `T3_DO_AUTO_LOGIN`.
    ///
    /// # Errors
    ///
    /// Same as [`Configuration::new`] when email or password are missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("T3_EMAIL", String::new());
        let password = get_env_or_default("T3_PASSWORD", String::new());
        if email.is_empty() {
            error!("T3_EMAIL not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("T3_PASSWORD not found in environment variables or .env file");
        }

        let mut configuration = Self::new(email, password)?;
        configuration.access_token = get_env_or_none("T3_ACCESS_TOKEN");
        configuration.refresh_token = get_env_or_none("T3_REFRESH_TOKEN");
        configuration.id_application = get_env_or_none("T3_ID_APPLICATION");
        configuration.id_api_transaction = get_env_or_none("T3_ID_API_TRANSACTION");
        configuration.timeout = get_env_or_default("T3_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        configuration.api_version =
            get_env_or_default("T3_API_VERSION", DEFAULT_API_VERSION.to_string());
        configuration.environment = get_env_or_default("T3_ENVIRONMENT", Environment::default());
        configuration.do_auto_login = get_env_flag("T3_DO_AUTO_LOGIN", true);
        Ok(configuration)
    }

    /// Sets the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the refresh token
    #[must_use]
    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Sets the application identifier
    #[must_use]
    pub fn with_id_application(mut self, id: impl Into<String>) -> Self {
        self.id_application = Some(id.into());
        self
    }

    /// Sets the API transaction identifier
    #[must_use]
    pub fn with_id_api_transaction(mut self, id: impl Into<String>) -> Self {
        self.id_api_transaction = Some(id.into());
        self
    }

    /// Sets a freshly generated API transaction identifier
    #[must_use]
    pub fn with_generated_transaction_id(mut self) -> Self {
        self.id_api_transaction = get_id();
        self
    }

    /// Sets the timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the API version
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the environment
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Enables or disables auto login
    #[must_use]
    pub fn with_do_auto_login(mut self, do_auto_login: bool) -> Self {
        self.do_auto_login = do_auto_login;
        self
    }

    /// Access token, if set and not empty
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        non_empty(self.access_token.as_deref())
    }

    /// Refresh token, if set and not empty
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        non_empty(self.refresh_token.as_deref())
    }

    /// Application identifier, if set and not empty
    #[must_use]
    pub fn id_application(&self) -> Option<&str> {
        non_empty(self.id_application.as_deref())
    }

    /// API transaction identifier, if set and not empty
    #[must_use]
    pub fn id_api_transaction(&self) -> Option<&str> {
        non_empty(self.id_api_transaction.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
