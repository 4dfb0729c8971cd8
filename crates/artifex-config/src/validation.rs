// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as known log levels and well-formed archive extensions.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::ArtifexConfig;

/// Log levels accepted in `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ArtifexConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.plugin.archive_extensions.is_empty() {
        errors.push(ConfigError::Validation {
            message: "plugin.archive_extensions must list at least one extension".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (i, ext) in config.plugin.archive_extensions.iter().enumerate() {
        if ext.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("plugin.archive_extensions[{i}] must not be empty"),
            });
            continue;
        }
        if ext.starts_with('.') {
            errors.push(ConfigError::Validation {
                message: format!(
                    "plugin.archive_extensions[{i}] `{ext}` must not start with a dot (use `{}`)",
                    ext.trim_start_matches('.')
                ),
            });
        }
        if !seen.insert(ext.to_ascii_lowercase()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate archive extension `{ext}` in plugin.archive_extensions"
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
