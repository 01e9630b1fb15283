// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch command: one request, one render.
//!
//! ```text
//! Config --> ArticleFetcher::fetch() --> render::show() --> stdout
//! ```

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use tracing::debug;

use crate::article::Article;
use crate::config::Config;
use crate::error::{Result, WikiResult};
use crate::net::ArticleFetcher;
use crate::render;

/// Fetch the configured endpoint.
///
/// # Errors
///
/// Returns a network error for transport or status failures and a decode
/// error for a malformed payload.
pub async fn fetch_configured(config: &Config) -> WikiResult<Article> {
    ArticleFetcher::new()
        .url(&config.fetch.url)
        .user_agent(&config.fetch.user_agent)
        .fetch()
        .await
}

/// Render an already fetched article into `out`.
///
/// `is_terminal` decides whether `color = "auto"` bolds the title.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_article<W: Write + ?Sized>(
    config: &Config,
    article: &Article,
    out: &mut W,
    is_terminal: bool,
) -> Result<()> {
    let options = config.render_options(is_terminal);
    debug!(width = options.width(), bold = options.bold(), "rendering article");
    render::show(article, out, &options).context("failed to write article")?;
    Ok(())
}

/// Main handler for the fetch command.
///
/// # Errors
///
/// Returns an error if the fetch fails or stdout cannot be written.
pub async fn run_fetch_command(config: &Config) -> Result<()> {
    let article = fetch_configured(config).await?;

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    write_article(config, &article, &mut stdout.lock(), is_terminal)
}
