// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain-text article rendering.
//!
//! ```text
//! Title (bold on a colour terminal)
//! <blank>
//! Summary wrapped at `width` columns
//! ```
//!
//! The summary block is omitted when the summary is empty. Output always ends
//! with exactly one `\n`, never with a blank line.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

use bon::Builder;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::error::ConfigError;

/// Default wrap width, in columns.
pub const DEFAULT_WIDTH: usize = 72;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct RenderOptions {
    /// Wrap width in columns; 0 disables wrapping.
    #[builder(setters(name = with_width), default = DEFAULT_WIDTH)]
    width: usize,
    /// Emphasize the title with ANSI bold.
    #[builder(setters(name = with_bold), default = false)]
    bold: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl RenderOptions {
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn bold(&self) -> bool {
        self.bold
    }

    fn wrap<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.width == 0 {
            Cow::Borrowed(text)
        } else {
            textwrap::fill(text, self.width).into()
        }
    }
}

/// When to emphasize output with ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide for a sink, given whether it is a terminal.
    #[must_use]
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Decide for the process's stdout.
    #[must_use]
    pub fn enabled_for_stdout(self) -> bool {
        self.enabled(io::stdout().is_terminal())
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::InvalidValue {
                section: "render".to_string(),
                key: "color".to_string(),
                message: format!("expected 'auto', 'always', or 'never', got '{s}'"),
            }),
        }
    }
}

/// Render an article into a string.
#[must_use]
pub fn render_to_string(article: &Article, options: &RenderOptions) -> String {
    let mut out = String::new();

    // Trailing newlines in either field would leave a blank last line
    let title = options.wrap(article.title().trim_end());
    if options.bold() && !title.is_empty() {
        let _ = writeln!(out, "{}", title.bold());
    } else {
        let _ = writeln!(out, "{title}");
    }

    let summary = article.summary().trim_end();
    if !summary.is_empty() {
        out.push('\n');
        out.push_str(&options.wrap(summary));
        out.push('\n');
    }

    out
}

/// Write an article to `out`.
///
/// # Errors
///
/// Returns an error if writing to or flushing the sink fails.
pub fn show<W: Write + ?Sized>(
    article: &Article,
    out: &mut W,
    options: &RenderOptions,
) -> io::Result<()> {
    out.write_all(render_to_string(article, options).as_bytes())?;
    out.flush()
}
