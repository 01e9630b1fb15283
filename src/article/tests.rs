// randwiki: Random Wikipedia Article Viewer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Article;

#[test]
fn test_default_is_empty() {
    let article = Article::default();
    assert_eq!(article.title(), "");
    assert_eq!(article.summary(), "");
    assert_eq!(article, Article::new("", ""));
}

#[test]
fn test_structural_equality() {
    assert_eq!(Article::titled("test"), Article::new("test", ""));
    assert_ne!(Article::new("test", ""), Article::new("test", "x"));
    assert_ne!(Article::new("a", "x"), Article::new("b", "x"));
    assert_eq!(
        Article::new("Lorem Ipsum", "Lorem ipsum dolor sit amet."),
        Article::new("Lorem Ipsum".to_string(), "Lorem ipsum dolor sit amet.".to_string()),
    );
}

#[test]
fn test_from_json_renames_extract() {
    let body = br#"{"title": "Lorem Ipsum", "extract": "Lorem ipsum dolor sit amet."}"#;
    let article = Article::from_json(body).unwrap();
    assert_eq!(
        article,
        Article::new("Lorem Ipsum", "Lorem ipsum dolor sit amet.")
    );
}

#[test]
fn test_from_json_ignores_unknown_fields() {
    let body = br#"{
        "type": "standard",
        "title": "Gegenes nostrodamus",
        "displaytitle": "<i>Gegenes nostrodamus</i>",
        "pageid": 123,
        "extract": "Gegenes nostrodamus is a butterfly.",
        "lang": "en"
    }"#;
    let article = Article::from_json(body).unwrap();
    assert_eq!(article.title(), "Gegenes nostrodamus");
    assert_eq!(article.summary(), "Gegenes nostrodamus is a butterfly.");
}

#[test]
fn test_from_json_rejects_missing_extract() {
    let err = Article::from_json(br#"{"title": "Gegenes nostrodamus"}"#).unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().starts_with("missing field `extract`"));
}

#[test]
fn test_from_json_rejects_missing_title() {
    let err = Article::from_json(br#"{"extract": "text"}"#).unwrap_err();
    assert!(err.is_data());
    assert!(err.to_string().contains("missing field `title`"));
}

#[test]
fn test_from_json_rejects_summary_field_name() {
    // Only the wire name is accepted
    let err = Article::from_json(br#"{"title": "t", "summary": "s"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `extract`"));
}

#[test]
fn test_from_json_rejects_null_and_non_string() {
    assert!(Article::from_json(br#"{"title": null, "extract": ""}"#).is_err());
    assert!(Article::from_json(br#"{"title": "t", "extract": 42}"#).is_err());
}

#[test]
fn test_from_json_rejects_positional_array() {
    let err =
        Article::from_json(br#"["Lorem Ipsum", "Lorem ipsum dolor sit amet."]"#).unwrap_err();
    assert!(err.is_data(), "{err}");
}

#[test]
fn test_from_json_rejects_non_object_payloads() {
    let bodies: [&[u8]; 4] = [b"null", b"\"Lorem Ipsum\"", b"42", b"[]"];
    for body in bodies {
        assert!(
            Article::from_json(body).is_err(),
            "{} should be rejected",
            String::from_utf8_lossy(body)
        );
    }
}

#[test]
fn test_from_json_rejects_invalid_json() {
    let err = Article::from_json(b"<html>not json</html>").unwrap_err();
    assert!(err.is_syntax());
}

#[test]
fn test_to_json_uses_wire_names() {
    let article = Article::new("Lorem Ipsum", "Lorem ipsum dolor sit amet.");
    assert_eq!(
        article.to_json(),
        serde_json::json!({"title": "Lorem Ipsum", "extract": "Lorem ipsum dolor sit amet."})
    );
    assert_eq!(
        Article::from_json(article.to_json().to_string().as_bytes()).unwrap(),
        article
    );
}
