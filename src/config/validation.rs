//! Configuration validation.

use crate::error::AppError;

/// Checks a loaded configuration for values that would fail later in
/// confusing ways. An empty API domain is allowed (fetch commands check
/// for it themselves), but a present one must be an http(s) URL.
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if !api_domain.is_empty()
        && !api_domain.starts_with("https://")
        && !api_domain.starts_with("http://")
    {
        return Err(AppError::config_error(format!(
            "API domain must start with http:// or https://, got: {api_domain}"
        )));
    }

    if let Some(path) = log_file_path {
        if path.trim().is_empty() {
            return Err(AppError::config_error(
                "Log file path is set but empty",
            ));
        }
    }

    Ok(())
}
