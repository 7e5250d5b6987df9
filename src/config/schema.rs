//! Configuration schema types
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the stock executive-order export.

use serde::{Deserialize, Serialize};
use url::Url;

/// Fields requested from the documents endpoint, matching the output columns
pub const REQUESTED_FIELDS: [&str; 6] = [
    "title",
    "citation",
    "document_number",
    "president",
    "signing_date",
    "publication_date",
];

/// Main fedreg-export configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FedRegConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Data source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FedRegConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Federal Register API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Documents endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size requested from the API (the API caps this at 1000)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Sort order (newest, oldest, relevance, executive_order_number)
    #[serde(default = "default_order")]
    pub order: String,

    /// Value for `conditions[type][]`
    #[serde(default = "default_document_type")]
    pub document_type: String,

    /// Value for `conditions[presidential_document_type][]`
    #[serde(default = "default_presidential_document_type")]
    pub presidential_document_type: String,

    #[serde(default = "default_true")]
    pub include_pre_1994_docs: bool,

    /// Full first-page URL; when set, the query fields above are ignored
    #[serde(default)]
    pub start_url: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SourceConfig {
    /// Builds the URL of the first page
    ///
    /// # Errors
    ///
    /// Returns an error if `start_url` or `base_url` is not a valid URL
    pub fn start_url(&self) -> Result<Url, url::ParseError> {
        if let Some(start_url) = &self.start_url {
            return Url::parse(start_url);
        }

        let mut url = Url::parse(&self.base_url)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("per_page", &self.per_page.to_string());
            for field in REQUESTED_FIELDS {
                query.append_pair("fields[]", field);
            }
            query.append_pair("order", &self.order);
            query.append_pair("conditions[type][]", &self.document_type);
            query.append_pair(
                "include_pre_1994_docs",
                &self.include_pre_1994_docs.to_string(),
            );
            query.append_pair(
                "conditions[presidential_document_type][]",
                &self.presidential_document_type,
            );
        }
        Ok(url)
    }

    fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.per_page) {
            return Err(format!(
                "source.per_page must be between 1 and 1000, got {}",
                self.per_page
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("source.timeout_seconds must be > 0".to_string());
        }

        if self.connect_timeout_seconds == 0 {
            return Err("source.connect_timeout_seconds must be > 0".to_string());
        }

        let url = self
            .start_url()
            .map_err(|e| format!("source URL is invalid: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "source URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            order: default_order(),
            document_type: default_document_type(),
            presidential_document_type: default_presidential_document_type(),
            include_pre_1994_docs: true,
            start_url: None,
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output CSV path; overwritten on every run
    #[serde(default = "default_output")]
    pub output: String,

    /// Number of page batches that may wait between the fetcher and the writer
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output.trim().is_empty() {
            return Err("export.output cannot be empty".to_string());
        }

        if self.channel_capacity == 0 {
            return Err("export.channel_capacity must be >= 1".to_string());
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://www.federalregister.gov/api/v1/documents.json".to_string()
}

fn default_per_page() -> u32 {
    1000
}

fn default_order() -> String {
    "newest".to_string()
}

fn default_document_type() -> String {
    "PRESDOCU".to_string()
}

fn default_presidential_document_type() -> String {
    "executive_order".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_connect_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("fedreg-export/{}", env!("CARGO_PKG_VERSION"))
}

fn default_output() -> String {
    "executive_orders.csv".to_string()
}

fn default_channel_capacity() -> usize {
    1
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
