// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for randwiki using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! randwiki [global options] [command]
//! fetch     (default)
//! options
//! inis
//! version
//! ```

pub mod fetch;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::fetch::FetchArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Random Wikipedia article viewer.
#[derive(Debug, Parser)]
#[command(
    name = "randwiki",
    author,
    version,
    about = "Print a random Wikipedia article summary",
    long_about = "Fetches a page summary (by default a random English Wikipedia\n\
                  article) and prints its title and extract to stdout.\n\n\
                  Running `randwiki` with no command is the same as `randwiki fetch`.",
    after_help = "CONFIG FILES:\n\n\
                  randwiki reads `randwiki.toml` from the current directory if\n\
                  present, then every file given with --ini, then RANDWIKI_*\n\
                  environment variables (e.g. RANDWIKI_RENDER__WIDTH=80), then\n\
                  --set options and command flags. Use --no-default-inis to skip\n\
                  `randwiki.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Inis,

    /// Fetches an article and prints it.
    Fetch(FetchArgs),
}

impl Cli {
    /// Config overrides from global options and the command's own flags.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.global.to_config_overrides();
        if let Some(Command::Fetch(args)) = &self.command {
            overrides.extend(args.to_config_overrides());
        }
        overrides
    }
}

/// Append `key=value` when a flag was given.
fn push_override<T: std::fmt::Display>(overrides: &mut Vec<String>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        overrides.push(format!("{key}={value}"));
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
