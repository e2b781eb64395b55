//
//  vector-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests for the `vector` binary.

use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A `vector` command isolated from the user's environment.
fn vector(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vector").unwrap();
    cmd.env("VECTOR_CONFIG_DIR", config_dir.path())
        .env_remove("VECTOR_API_KEY")
        .env_remove("VECTOR_API_URL")
        .env_remove("VECTOR_DEBUG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["version", "--no-json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "vector version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_json() {
    let dir = TempDir::new().unwrap();
    let output = vector(&dir).args(["version", "--json"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"version": env!("CARGO_PKG_VERSION")}})
    );
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("site"));
}

#[test]
fn test_usage_error_exits_three() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["site", "create", "--domain", "example.com"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_missing_credentials_exit_two() {
    let dir = TempDir::new().unwrap();
    let output = vector(&dir).args(["site", "list", "--json"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let body = stdout_json(&output);
    assert!(body["data"]["error"]
        .as_str()
        .unwrap()
        .contains("vector auth login"));
    assert_eq!(body["data"]["status_code"], json!(0));
}

#[test]
fn test_site_list_prints_json_envelope() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/vector/sites")
        .match_header("authorization", "Bearer env-key")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "data": [{"id": 1, "dev_php_version": "8.3", "status": "active"}],
                "meta": {"current_page": 1, "per_page": 15, "total": 1, "last_page": 1}
            })
            .to_string(),
        )
        .create();

    let output = vector(&dir)
        .args(["site", "list", "--json", "--api-url", &server.url()])
        .env("VECTOR_API_KEY", "env-key")
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["data"][0]["id"], json!(1));
    assert_eq!(body["meta"]["total"], json!(1));
}

#[test]
fn test_account_show_prints_summary() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/v1/vector/account")
        .with_status(200)
        .with_body(r#"{"data": {"name": "Acme", "owner_id": 3, "suspended_at": null}}"#)
        .create();

    let output = vector(&dir)
        .args(["account", "show", "--json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", server.url())
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"name": "Acme", "owner_id": 3, "suspended_at": null}})
    );
}

#[test]
fn test_secret_show_keeps_fields_as_sent() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/v1/vector/sites/42/environments/staging/secrets/5")
        .with_status(200)
        .with_body(r#"{"data": {"id": 5, "name": "API_TOKEN", "updated_at": null}}"#)
        .create();

    let output = vector(&dir)
        .args(["secret", "show", "5", "--site", "42", "--env", "staging", "--json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", server.url())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"id": 5, "name": "API_TOKEN", "updated_at": null}})
    );
}

#[test]
fn test_not_found_exits_four() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/v1/vector/sites/999")
        .with_status(404)
        .with_body(r#"{"message": "Site not found"}"#)
        .create();

    let output = vector(&dir)
        .args(["site", "show", "999", "--json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", server.url())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"error": "Site not found", "status_code": 404}})
    );
}

#[test]
fn test_html_error_page_reports_its_status() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/v1/vector/sites/1")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create();

    let output = vector(&dir)
        .args(["site", "show", "1", "--json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", server.url())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let body = stdout_json(&output);
    assert_eq!(body["data"]["status_code"], json!(502));
    assert!(body["data"]["error"].is_string());
}

#[test]
fn test_api_validation_failure_exits_three() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("POST", "/api/v1/vector/sites")
        .with_status(422)
        .with_body(
            json!({
                "message": "The given data was invalid.",
                "errors": {"domain": ["The domain has already been taken."]}
            })
            .to_string(),
        )
        .create();

    vector(&dir)
        .args(["site", "create", "--name", "Blog", "--domain", "taken.example", "--no-json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", server.url())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("The given data was invalid."))
        .stderr(predicate::str::contains("domain: The domain has already been taken."));
}

#[test]
fn test_update_without_options_is_rejected_locally() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["site", "update", "42", "--no-json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", "http://127.0.0.1:1")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No update options provided"));
}

#[test]
fn test_delete_without_force_refuses_without_terminal() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["site", "delete", "42", "--no-json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", "http://127.0.0.1:1")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_unreachable_api_exits_five() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["site", "list", "--json"])
        .env("VECTOR_API_KEY", "env-key")
        .env("VECTOR_API_URL", "http://127.0.0.1:1")
        .assert()
        .code(5);
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();

    vector(&dir)
        .args(["config", "set", "api_url", "https://staging.example.com/", "--no-json"])
        .assert()
        .success();

    let output = vector(&dir)
        .args(["config", "get", "api_url", "--json"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"key": "api_url", "value": "https://staging.example.com"}})
    );
}

#[test]
fn test_config_rejects_bad_api_url() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["config", "set", "api_url", "not a url"])
        .assert()
        .code(3);
}

#[test]
fn test_login_then_status() {
    let dir = TempDir::new().unwrap();

    vector(&dir)
        .args(["auth", "login", "--token", "stored-token-1234", "--json"])
        .assert()
        .success();
    assert!(dir.path().join("credentials.json").exists());

    let output = vector(&dir)
        .args(["auth", "status", "--show-token", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let body = stdout_json(&output);
    assert_eq!(body["data"]["authenticated"], json!(true));
    assert_eq!(body["data"]["source"], json!("credentials file"));
    assert_eq!(body["data"]["token"], json!("stor*********1234"));
}

#[test]
fn test_status_unauthenticated_exits_two() {
    let dir = TempDir::new().unwrap();
    let output = vector(&dir)
        .args(["auth", "status", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout_json(&output),
        json!({"data": {"authenticated": false, "source": null}})
    );
}

#[test]
fn test_logout_removes_credentials() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["auth", "login", "--token", "stored-token-1234"])
        .assert()
        .success();

    vector(&dir)
        .args(["auth", "logout", "--no-json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully logged out"));

    vector(&dir).args(["auth", "status"]).assert().code(2);
}

#[test]
fn test_completion_script() {
    let dir = TempDir::new().unwrap();
    vector(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vector"));
}
