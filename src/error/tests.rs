// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DecodeError, NetworkError, WikiError, WikiResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "render".to_string(),
        key: "color".to_string(),
        message: "expected 'auto', 'always', or 'never', got 'rainbow'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'color' in section '[render]': expected 'auto', 'always', or 'never', got 'rainbow'"
    );
}

#[test]
fn test_http_error_wraps_into_network_variant() {
    let err: WikiError = NetworkError::HttpError {
        status: 404,
        url: "http://localhost/missing".to_string(),
    }
    .into();

    assert!(matches!(&err, WikiError::Network(inner)
        if matches!(**inner, NetworkError::HttpError { status: 404, .. })));
    insta::assert_snapshot!(err.to_string(), @"network error: http error 404: http://localhost/missing");
}

#[test]
fn test_decode_error_keeps_source() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: WikiError = DecodeError::Json {
        url: "http://localhost/".to_string(),
        source,
    }
    .into();

    assert!(matches!(err, WikiError::Decode(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_wiki_error_size() {
    let size = std::mem::size_of::<WikiError>();
    assert!(size <= 16, "WikiError is {size} bytes, expected <= 16");
}

#[test]
fn test_wiki_result_size() {
    let size = std::mem::size_of::<WikiResult<()>>();
    assert!(size <= 16, "WikiResult<()> is {size} bytes, expected <= 16");
}
