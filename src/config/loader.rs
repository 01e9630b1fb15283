// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! defaults (serde)
//!   < TOML files / strings, in the order added
//!   < PREFIX_SECTION__KEY environment variables
//!   < set() / set_option("section/key=value")
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// How a TOML source was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Must exist.
    File,
    /// Read only if present.
    Optional,
    /// TOML text passed directly.
    Inline,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Optional => "optional",
            Self::Inline => "inline",
        })
    }
}

/// A TOML source that takes part in the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub kind: SourceKind,
    pub path: PathBuf,
}

/// Collects sources, then merges and validates them in [`build`](Self::build).
#[derive(Debug)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<LoadedSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Add a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(LoadedSource {
            kind: SourceKind::Inline,
            path: PathBuf::from("<inline>"),
        });
        self
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required || path.exists() {
            self.sources.push(LoadedSource {
                kind: if required {
                    SourceKind::File
                } else {
                    SourceKind::Optional
                },
                path: path.to_path_buf(),
            });
        }
        self
    }

    /// Read `PREFIX_SECTION__KEY` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Override a dotted key (`render.width`) above every other source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid path expression.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid override key '{key}'"))?;
        Ok(self)
    }

    /// Sets an override written as `section/key=value` or `section.key=value`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the option has no `=` or no key.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let (key, value) = parse_option(option)?;
        self.set(&key, value)
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required file is missing or is not valid TOML.
    /// - An environment variable cannot be parsed.
    /// - The merged values do not fit `Config` (unknown keys, wrong types).
    /// - A value fails validation (e.g. an empty URL).
    pub fn build(self) -> Result<Config> {
        let builder = match self.env_prefix.as_deref() {
            Some(prefix) => self.builder.add_source(environment(prefix)),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[LoadedSource] {
        &self.sources
    }

    /// One numbered line per source, in merge order.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. [{}] {}", i + 1, source.kind, source.path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Split `section/key=value` into a dotted key and its value.
pub(crate) fn parse_option(option: &str) -> std::result::Result<(String, String), ConfigError> {
    let invalid = |message: &str| ConfigError::ParseError {
        path: "--set".to_string(),
        message: format!("{message} in '{option}', expected 'section/key=value'"),
    };

    let (key, value) = option.split_once('=').ok_or_else(|| invalid("missing '='"))?;
    let key = key.trim().replace('/', ".");
    if key.is_empty() || key.starts_with('.') || key.ends_with('.') {
        return Err(invalid("missing key"));
    }
    Ok((key, value.trim().to_string()))
}
