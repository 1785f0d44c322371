// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tests for `gh_compare::run` against a mock GitHub API

use gh_compare::config::{Config, ConfigError};
use gh_compare::run;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use similar_asserts::assert_eq;

const PATH: &str = "/repos/ijkim88/veritone/compare/0984cda...71c4e08";

fn config_for(server: &ServerGuard) -> Config {
    Config {
        organization: "ijkim88".to_string(),
        repository: "veritone".to_string(),
        base: "0984cda".to_string(),
        head: "71c4e08".to_string(),
        token: Some("test-token".to_string()),
        api_url: server.url(),
        ..Default::default()
    }
}

fn body(total: usize, range: std::ops::Range<usize>) -> String {
    let commits: Vec<_> = range
        .map(|i| {
            json!({
                "sha": format!("{i:040x}"),
                "commit": {"message": format!("Commit {i}\n\nBody {i}")},
            })
        })
        .collect();
    json!({"total_commits": total, "commits": commits}).to_string()
}

fn page(server: &mut ServerGuard, page: usize, per_page: u32, body: String) -> mockito::Mock {
    server
        .mock("GET", PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("per_page".into(), per_page.to_string()),
        ]))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(body)
        .expect(1)
        .create()
}

#[test]
fn test_run_paginates_and_prints_each_commit() {
    let mut server = Server::new();
    let mocks = [
        page(&mut server, 1, 2, body(5, 0..2)),
        page(&mut server, 2, 2, body(5, 2..4)),
        page(&mut server, 3, 2, body(5, 4..5)),
    ];
    let config = Config {
        per_page: 2,
        ..config_for(&server)
    };

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("run");

    assert_eq!(summary.printed, 5);
    assert!(!summary.failed);
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 5);
    assert_eq!(text.lines().next(), Some("0000000000\tCommit 0"));
    for mock in &mocks {
        mock.assert();
    }
}

#[test]
fn test_run_full_message() {
    let mut server = Server::new();
    let mock = page(&mut server, 1, 30, body(1, 0..1));
    let config = Config {
        full_message: true,
        ..config_for(&server)
    };

    let mut out = Vec::new();
    run(&config, &mut out).expect("run");

    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "0000000000\tCommit 0\n\nBody 0\n"
    );
    mock.assert();
}

#[test]
fn test_run_no_paginate_sends_single_plain_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", PATH)
        .with_status(200)
        .with_body(body(3, 0..3))
        .expect(1)
        .create();
    let config = Config {
        no_paginate: true,
        ..config_for(&server)
    };

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("run");

    assert_eq!(summary.printed, 3);
    mock.assert();
}

#[test]
fn test_run_fetch_failure_is_reported_not_raised() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .expect(1)
        .create();
    let config = Config {
        base: "bogus".to_string(),
        head: "sha".to_string(),
        ..config_for(&server)
    };

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("fetch failures are not errors");

    assert!(summary.failed);
    assert_eq!(summary.printed, 0);
    assert!(out.is_empty());
    mock.assert();
}

#[test]
fn test_run_missing_token_makes_no_request() {
    let mut server = Server::new();
    let mock = server.mock("GET", Matcher::Any).expect(0).create();
    let config = Config {
        token: None,
        ..config_for(&server)
    };

    let mut out = Vec::new();
    let err = run(&config, &mut out).expect_err("missing token must fail");

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingCredential { .. })
    ));
    assert!(err.to_string().contains("GH_TOKEN"));
    mock.assert();
}

#[test]
fn test_run_invalid_api_url_makes_no_request() {
    let config = Config {
        organization: "ijkim88".to_string(),
        repository: "veritone".to_string(),
        base: "0984cda".to_string(),
        head: "71c4e08".to_string(),
        token: Some("test-token".to_string()),
        api_url: "api.github.com".to_string(),
        ..Default::default()
    };

    let mut out = Vec::new();
    let err = run(&config, &mut out).expect_err("invalid url must fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidApiUrl(_))
    ));
}
