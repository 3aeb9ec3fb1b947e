use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn oaectl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("oaectl"));
    cmd.env_remove("OAECTL_CONFIG")
        .env_remove("OAECTL_PROFILE")
        .env_remove("OAECTL_TENANT")
        .env_remove("OAECTL_FORMAT")
        .env_remove("OAECTL_DEBUG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "active_profile: cam\nprofiles:\n  cam:\n    base_url: {base_url}\n  cam-admin:\n    base_url: {base_url}\n    user_id: u:cam:admin\n    password: secret\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

#[test]
fn help_lists_group_commands() {
    oaectl()
        .args(["group", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("set-members"))
                .and(predicate::str::contains("exists")),
        );
}

#[test]
fn status_shows_resolved_profile() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "cam.oae.com");

    let assert = oaectl()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .arg("--profile")
        .arg("cam-admin")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("cam-admin"));
    assert!(stdout.contains("cam.oae.com"));
    assert!(stdout.contains("Acting as u:cam:admin"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn debug_env_accepts_boolish_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "cam.oae.com");

    for value in ["1", "yes", "on"] {
        oaectl()
            .arg("status")
            .arg("--config")
            .arg(&config_path)
            .env("OAECTL_DEBUG", value)
            .assert()
            .success()
            .stdout(predicate::str::contains("cam.oae.com"));
    }

    oaectl()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .env("OAECTL_DEBUG", "0")
        .assert()
        .success();

    Ok(())
}

#[test]
fn missing_config_without_tenant_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    oaectl()
        .args(["group", "exists", "eng-team"])
        .arg("--config")
        .arg(temp.path().join("does-not-exist.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("not found")));

    Ok(())
}

#[test]
fn exists_reports_taken_alias() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _exists = server
        .mock("GET", "/api/group/exists/eng-team")
        .with_status(200)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    oaectl()
        .args(["group", "exists", "eng-team", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is taken"));

    Ok(())
}

#[test]
fn exists_with_tenant_override_and_no_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _exists = server
        .mock("GET", "/api/group/exists/free-alias")
        .with_status(404)
        .create();

    let temp = tempdir()?;

    let assert = oaectl()
        .args(["group", "exists", "free-alias", "--format", "json"])
        .arg("--config")
        .arg(temp.path().join("none.yaml"))
        .arg("--tenant")
        .arg(server.url())
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["data"]["exists"], false);
    assert_eq!(parsed["data"]["alias"], "free-alias");
    assert_eq!(parsed["meta"]["tenant"], server.url());
    assert_eq!(parsed["meta"]["actingAs"], "anonymous");

    Ok(())
}

#[test]
fn create_logs_in_and_prints_group() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("username".into(), "u:cam:admin".into()),
            mockito::Matcher::UrlEncoded("password".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_header("set-cookie", "connect.sid=admin-session; Path=/; HttpOnly")
        .create();
    let create = server
        .mock("POST", "/api/group/create")
        .match_header("cookie", "connect.sid=admin-session")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("alias".into(), "eng-team".into()),
            mockito::Matcher::UrlEncoded("visibility".into(), "private".into()),
            mockito::Matcher::UrlEncoded("managers[]".into(), "u:cam:alice".into()),
        ]))
        .with_status(201)
        .with_body(r#"{"id":"g:cam:eng-team","visibility":"private"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    oaectl()
        .args([
            "group",
            "create",
            "eng-team",
            "--visibility",
            "private",
            "--manager",
            "u:cam:alice",
            "--profile",
            "cam-admin",
        ])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("g:cam:eng-team"));

    login.assert();
    create.assert();
    Ok(())
}

#[test]
fn create_with_empty_response_body_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/group/create")
        .with_status(201)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    oaectl()
        .args(["group", "create", "eng-team", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no content returned"));

    create.assert();
    Ok(())
}

#[test]
fn unexpected_status_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _get = server
        .mock("GET", "/api/group/g:cam:missing")
        .with_status(404)
        .with_body("Group not found")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    oaectl()
        .args(["group", "get", "g:cam:missing", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Could not get the group")
                .and(predicate::str::contains("Group not found")),
        );

    Ok(())
}

#[test]
fn set_members_requires_valid_roles() -> Result<(), Box<dyn std::error::Error>> {
    oaectl()
        .args([
            "group",
            "set-members",
            "g:cam:eng",
            "--set",
            "u:cam:alice=owner",
            "--tenant",
            "cam.oae.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner"));

    Ok(())
}
