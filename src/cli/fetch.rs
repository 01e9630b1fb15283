// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch command arguments.
//!
//! ```text
//! --url URL          → fetch.url
//! --user-agent UA    → fetch.user_agent
//! --width N          → render.width (0 = no wrapping)
//! --color WHEN       → render.color
//! ```

use clap::Args;

use super::push_override;
use crate::render::ColorChoice;

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Default, Args)]
pub struct FetchArgs {
    /// Endpoint returning a page summary (`title` and `extract`).
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// User-Agent header sent with the request.
    #[arg(short = 'A', long = "user-agent", value_name = "AGENT")]
    pub user_agent: Option<String>,

    /// Wrap output at N columns (0 disables wrapping).
    #[arg(short = 'w', long, value_name = "N")]
    pub width: Option<usize>,

    /// Bold the title: auto, always or never.
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorChoice>,
}

impl FetchArgs {
    /// Converts command options to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        push_override(&mut overrides, "fetch/url", self.url.as_deref());
        push_override(&mut overrides, "fetch/user_agent", self.user_agent.as_deref());
        push_override(&mut overrides, "render/width", self.width);
        push_override(&mut overrides, "render/color", self.color);
        overrides
    }
}
