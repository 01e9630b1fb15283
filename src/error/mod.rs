// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   WikiError (16 bytes)
//!          |
//!     +----+----+
//!     v         v
//!    Net     Decode
//!    Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Network HttpError, Reqwest, InvalidUrl
//!   Decode  Json
//!
//! ConfigError  ParseError, InvalidValue
//!   (raised while loading config, carried through anyhow)
//! ```
//!
//! Transport and status failures surface as [`NetworkError`], malformed
//! payloads as [`DecodeError`]. Neither is retried.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WikiError`].
pub type WikiResult<T> = std::result::Result<T, WikiError>;

/// Error returned by a fetch.
///
/// All sub-errors are boxed so this enum stays pointer-sized plus tag.
#[derive(Debug, Error)]
pub enum WikiError {
    /// Request could not be sent, or the server answered with a failure status.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Response body is not a valid article payload.
    #[error("decode error: {0}")]
    Decode(#[from] Box<DecodeError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WikiError {
                fn from(err: $error) -> Self {
                    WikiError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    DecodeError => Decode,
}

// --- Network Errors ---

/// Transport and status errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Server answered with a non-success status.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest (connect, TLS, redirect limit, body read).
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid or missing URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Decode Errors ---

/// Payload decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not JSON, or lacks a required field.
    #[error("invalid article payload from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration or an override.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
