// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./artifex.toml` > `~/.config/artifex/artifex.toml`
//! > `/etc/artifex/artifex.toml`
//! with environment variable overrides via `ARTIFEX_` prefix.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ArtifexConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/artifex/artifex.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "artifex.toml";

/// Path of the user configuration file, if a config directory is known.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("artifex/artifex.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/artifex/artifex.toml` (system-wide)
/// 3. `~/.config/artifex/artifex.toml` (user XDG config)
/// 4. `./artifex.toml` (local directory)
/// 5. `ARTIFEX_*` environment variables
pub fn load_config() -> Result<ArtifexConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ArtifexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArtifexConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ArtifexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ArtifexConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(ArtifexConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `ARTIFEX_PLUGIN_ARCHIVE_EXTENSIONS` must map to
/// `plugin.archive_extensions`, not `plugin.archive.extensions`.
fn env_provider() -> Env {
    Env::prefixed("ARTIFEX_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("log_", "log.", 1)
            .replacen("plugin_", "plugin.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_are_mapped_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ARTIFEX_LOG_LEVEL", "debug");
            jail.set_env("ARTIFEX_PLUGIN_ARCHIVE_EXTENSIONS", "[jar, zip]");

            let config: ArtifexConfig = Figment::new()
                .merge(Serialized::defaults(ArtifexConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.log.level, "debug");
            assert_eq!(config.plugin.archive_extensions, vec!["jar", "zip"]);
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up_from_working_directory() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[log]\nlevel = \"warn\"\n")?;
            let config = load_config()?;
            assert_eq!(config.log.level, "warn");
            Ok(())
        });
    }
}
