// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                   main.rs
//!                      |
//!           +----------+----------+
//!           v                     v
//!       cli (clap)          cmd (handlers)
//!           |          fetch / options / inis
//!           +----------+----------+
//!                      v
//!       ,-----------------------------,
//!       |           config            |
//!       |  TOML, env, layered values  |
//!       '------+---------------+------'
//!              v               v
//!             net           render
//!         GET + decode    text output
//!              |               ^
//!              +--> article ---+
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod article;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod net;
pub mod render;
