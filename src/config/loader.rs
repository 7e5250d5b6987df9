//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FedRegConfig;
use crate::domain::errors::FedRegError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FedRegConfig
/// 4. Applies environment variable overrides (FEDREG_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`FedRegError::Configuration`] if the file is missing or unreadable,
/// a referenced variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use fedreg_export::config::loader::load_config;
///
/// let config = load_config("fedreg.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FedRegConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FedRegError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FedRegError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: FedRegConfig = toml::from_str(&contents)
        .map_err(|e| FedRegError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(&mut config)?;
    Ok(config)
}

/// Builds the default configuration with environment overrides applied
///
/// Used when no configuration file is given.
///
/// # Errors
///
/// Returns [`FedRegError::Configuration`] if an override produces an invalid
/// configuration.
pub fn load_default_config() -> Result<FedRegConfig> {
    let mut config = FedRegConfig::default();
    finish(&mut config)?;
    Ok(config)
}

fn finish(config: &mut FedRegConfig) -> Result<()> {
    apply_env_overrides(config);

    config.validate().map_err(|e| {
        FedRegError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| FedRegError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Comment lines are copied through untouched
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FedRegError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using FEDREG_* prefix
///
/// Environment variables follow the pattern: FEDREG_<SECTION>_<KEY>
/// For example: FEDREG_SOURCE_START_URL, FEDREG_EXPORT_OUTPUT
fn apply_env_overrides(config: &mut FedRegConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("FEDREG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Source overrides
    if let Ok(val) = std::env::var("FEDREG_SOURCE_BASE_URL") {
        config.source.base_url = val;
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_START_URL") {
        config.source.start_url = Some(val);
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_PER_PAGE") {
        if let Ok(per_page) = val.parse() {
            config.source.per_page = per_page;
        }
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_ORDER") {
        config.source.order = val;
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_DOCUMENT_TYPE") {
        config.source.document_type = val;
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_PRESIDENTIAL_DOCUMENT_TYPE") {
        config.source.presidential_document_type = val;
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_INCLUDE_PRE_1994_DOCS") {
        if let Ok(include) = val.parse() {
            config.source.include_pre_1994_docs = include;
        }
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.source.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.source.connect_timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("FEDREG_SOURCE_USER_AGENT") {
        config.source.user_agent = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("FEDREG_EXPORT_OUTPUT") {
        config.export.output = val;
    }
    if let Ok(val) = std::env::var("FEDREG_EXPORT_CHANNEL_CAPACITY") {
        if let Ok(capacity) = val.parse() {
            config.export.channel_capacity = capacity;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FEDREG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("FEDREG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("FEDREG_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("FEDREG_LOADER_TEST_VAR", "test_value");
        let input = "output = \"${FEDREG_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "output = \"test_value\"\n");
        std::env::remove_var("FEDREG_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("FEDREG_LOADER_UNSET_IN_COMMENT");
        let input = "# output = \"${FEDREG_LOADER_UNSET_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${FEDREG_LOADER_UNSET_IN_COMMENT}"));
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("FEDREG_LOADER_MISSING_VAR");
        let input = "output = \"${FEDREG_LOADER_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("FEDREG_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(FedRegError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[source]
per_page = 250
order = "oldest"

[export]
output = "orders.csv"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.source.per_page, 250);
        assert_eq!(config.source.order, "oldest");
        assert_eq!(config.export.output, "orders.csv");
        assert_eq!(config.export.channel_capacity, 1);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\nchannel_capacity = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("channel_capacity"));
    }
}
