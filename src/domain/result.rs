//! Result type alias for fedreg-export

use super::errors::FedRegError;

/// Result type alias using [`FedRegError`] as the error type
///
/// # Examples
///
/// ```
/// use fedreg_export::domain::result::Result;
/// use fedreg_export::domain::errors::FedRegError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(FedRegError::WriteFailed("disk full".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, FedRegError>;
