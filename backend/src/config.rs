//! Notion configuration loaded via OrthoConfig.
//!
//! [`NotionSettings`] holds raw values from the environment (`NOTION_*`),
//! command-line flags, or configuration files. [`NotionSettings::validate`]
//! turns them into the immutable [`NotionConfig`] shared for the process
//! lifetime, failing when the token or database identifier is absent.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use zeroize::Zeroizing;

/// Base URL of the public Notion REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1/";
/// Pinned `Notion-Version` header value.
pub const DEFAULT_API_VERSION: &str = "2022-06-28";
/// Title property of the target database.
pub const DEFAULT_TITLE_PROPERTY: &str = "Name";
/// Outbound request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw Notion settings before validation.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NOTION")]
pub struct NotionSettings {
    /// Integration token sent as a bearer credential.
    pub token: Option<String>,
    /// Identifier of the database receiving new pages.
    pub database_id: Option<String>,
    /// Optional API base URL override.
    pub api_base_url: Option<String>,
    /// Optional `Notion-Version` header override.
    pub api_version: Option<String>,
    /// Optional title property override.
    pub title_property: Option<String>,
    /// Outbound request timeout in seconds.
    #[ortho_config(default = 30)]
    pub timeout_secs: u64,
}

impl fmt::Debug for NotionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionSettings")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("database_id", &self.database_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("title_property", &self.title_property)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Reasons the process refuses to start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Settings could not be read from their sources.
    #[error("failed to load Notion settings: {0}")]
    Load(String),
    /// The integration token is absent or blank.
    #[error("missing Notion token: set NOTION_TOKEN")]
    MissingToken,
    /// The database identifier is absent or blank.
    #[error("missing Notion database id: set NOTION_DATABASE_ID")]
    MissingDatabaseId,
    /// The API base URL does not parse.
    #[error("invalid Notion API base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// A zero timeout would fail every call immediately.
    #[error("Notion timeout must be at least one second")]
    ZeroTimeout,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl NotionSettings {
    /// Load settings from the given arguments, the environment, and any
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source cannot be parsed.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|error| ConfigError::Load(error.to_string()))
    }

    /// Validate raw settings into process configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is missing or an
    /// optional override is malformed.
    pub fn validate(&self) -> Result<NotionConfig, ConfigError> {
        let token = non_blank(self.token.as_deref()).ok_or(ConfigError::MissingToken)?;
        let database_id =
            non_blank(self.database_id.as_deref()).ok_or(ConfigError::MissingDatabaseId)?;

        let mut config = NotionConfig::new(token, database_id);
        if let Some(raw) = non_blank(self.api_base_url.as_deref()) {
            config = config.with_api_base_url(parse_base_url(raw)?);
        }
        if let Some(version) = non_blank(self.api_version.as_deref()) {
            config.api_version = version.to_owned();
        }
        if let Some(property) = non_blank(self.title_property.as_deref()) {
            config.title_property = property.to_owned();
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(config.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

/// Parse a base URL, ensuring a trailing slash so endpoint joins keep the
/// version segment.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalised = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalised).map_err(|error| ConfigError::InvalidBaseUrl {
        value: raw.to_owned(),
        reason: error.to_string(),
    })
}

/// Validated, read-only Notion configuration.
#[derive(Clone)]
pub struct NotionConfig {
    token: Zeroizing<String>,
    database_id: String,
    api_base_url: String,
    api_version: String,
    title_property: String,
    timeout: Duration,
}

impl NotionConfig {
    /// Build a configuration with default endpoint, version, title property,
    /// and timeout.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    ///
    /// use topic_gateway::config::NotionConfig;
    ///
    /// let config = NotionConfig::new("secret_token", "db-id").with_timeout(Duration::from_secs(5));
    /// assert_eq!(config.database_id(), "db-id");
    /// assert_eq!(config.api_base_url(), "https://api.notion.com/v1/");
    /// ```
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
            database_id: database_id.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            title_property: DEFAULT_TITLE_PROPERTY.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at another API root.
    #[must_use]
    pub fn with_api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the outbound request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bearer token for the integration.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Target database identifier.
    pub fn database_id(&self) -> &str {
        self.database_id.as_str()
    }

    /// API root the page endpoint is resolved against.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_str()
    }

    /// Value of the `Notion-Version` header.
    pub fn api_version(&self) -> &str {
        self.api_version.as_str()
    }

    /// Database property holding page titles.
    pub fn title_property(&self) -> &str {
        self.title_property.as_str()
    }

    /// Outbound request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("title_property", &self.title_property)
            .field("timeout", &self.timeout)
            .finish()
    }
}
