use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn popover() -> Command {
    let mut cmd = Command::cargo_bin("popover").expect("popover binary should be built");
    cmd.env_remove("APIS__MISSING_KEY");
    cmd
}

#[test]
fn title_prints_the_popover_header() {
    popover().args(["title", "client-name"]).assert().success().stdout("Client app name\n");
}

#[test]
fn content_prints_the_popover_body() {
    popover()
        .args(["content", "resource-server-name"])
        .assert()
        .success()
        .stdout("The unique name of the Resource Server\n");
}

#[test]
fn show_prints_both_lines() {
    popover()
        .args(["show", "client-resource-server"])
        .assert()
        .success()
        .stdout("Client app - Resource server\nEvery client app belongs to one (and only one) resource server\n");
}

#[test]
fn unknown_key_fails() {
    popover()
        .args(["title", "does-not-exist"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn blank_policy_from_environment() {
    popover()
        .env("APIS__MISSING_KEY", "blank")
        .args(["title", "does-not-exist"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn blank_policy_from_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "missing_key = \"blank\"").unwrap();

    popover()
        .arg("--config")
        .arg(file.path())
        .args(["content", "does-not-exist"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn missing_config_file_fails() {
    popover()
        .args(["--config", "/nonexistent/popover.toml", "title", "client-name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn keys_lists_every_identifier() {
    let output = popover().arg("keys").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let keys: Vec<&str> = stdout.lines().collect();
    assert_eq!(keys.len(), 19);
    assert_eq!(keys.first(), Some(&"resource-server-name"));
    assert_eq!(keys.last(), Some(&"client-attributes"));
}

#[test]
fn keys_can_be_filtered_by_form() {
    popover()
        .args(["keys", "--form", "client"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("client-key\nclient-secret\nclient-name\n"))
        .stdout(predicate::str::contains("resource-server-").not());
}

#[test]
fn export_emits_the_bundle_as_json() {
    let output = popover().args(["export", "--pretty"]).assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 19);
    assert_eq!(value["resource-server-scope"]["title"], "Resource server scopes");
}
