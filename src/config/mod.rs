// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for randwiki.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. randwiki.toml (cwd, unless --no-default-inis)
//! 3. --ini FILE (in order)
//! 4. RANDWIKI_* env vars
//! 5. --set overrides and CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RANDWIKI_FETCH__URL=http://..      → fetch.url
//! RANDWIKI_RENDER__WIDTH=80          → render.width
//! RANDWIKI_GLOBAL__OUTPUT_LOG_LEVEL  → global.output_log_level
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::render::RenderOptions;

use loader::ConfigLoader;
use types::{FetchConfig, GlobalConfig, RenderConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "randwiki.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RANDWIKI";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Fetch options.
    pub fetch: FetchConfig,
    /// Render options.
    pub render: RenderConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use randwiki::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("randwiki.toml")
    ///     .with_env_prefix("RANDWIKI")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty URL or user agent.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.fetch.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "fetch".to_string(),
                key: "url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "fetch".to_string(),
                key: "user_agent".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render options for a sink, resolving `color = "auto"` with `is_terminal`.
    #[must_use]
    pub fn render_options(&self, is_terminal: bool) -> RenderOptions {
        RenderOptions::builder()
            .with_width(self.render.width)
            .with_bold(self.render.color.enabled(is_terminal))
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is sorted by key and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_fetch_options(&mut options);
        self.format_render_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            u8::from(self.global.output_log_level).to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            u8::from(self.global.file_log_level).to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string()),
        );
    }

    fn format_fetch_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("fetch.url".into(), self.fetch.url.clone());
        options.insert("fetch.user_agent".into(), self.fetch.user_agent.clone());
    }

    fn format_render_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("render.width".into(), self.render.width.to_string());
        options.insert("render.color".into(), self.render.color.to_string());
    }
}
