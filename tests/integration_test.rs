#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn edgar_cmd(home: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("edgar").unwrap();
	cmd.env("HOME", home).env_remove("EDGAR_LOG");
	cmd
}

const SIMPLE_SOURCE: &str = r#"---
Compression: yes
subhosts:
- Host: name
  HostName: 127.0.0.1
"#;

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let home = tempfile::tempdir().unwrap();
	edgar_cmd(home.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("OpenSSH client config"));
}

#[test]
fn test_version_flag() {
	let home = tempfile::tempdir().unwrap();
	edgar_cmd(home.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("edgar"));
}

// ============================================================================
// Source discovery tests
// ============================================================================

#[test]
fn test_no_source_found() {
	let home = tempfile::tempdir().unwrap();
	edgar_cmd(home.path())
		.arg("show")
		.assert()
		.failure()
		.stderr(predicate::str::contains("No source document found"))
		.stderr(predicate::str::contains(".edgarrc"));
}

#[test]
fn test_edgarrc_in_home() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), SIMPLE_SOURCE).unwrap();

	edgar_cmd(home.path())
		.arg("show")
		.assert()
		.success()
		.stdout("Host *\n  Compression yes\n\nHost name\n  HostName 127.0.0.1\n");
}

#[test]
fn test_config_dir_takes_precedence() {
	let home = tempfile::tempdir().unwrap();
	fs::create_dir_all(home.path().join(".config")).unwrap();
	fs::write(home.path().join(".config/edgar.yml"), "- Host: from-config\n  Port: 1\n").unwrap();
	fs::write(home.path().join(".edgarrc"), "- Host: from-rc\n  Port: 2\n").unwrap();

	edgar_cmd(home.path())
		.arg("show")
		.assert()
		.success()
		.stdout(predicate::str::contains("from-config"))
		.stdout(predicate::str::contains("from-rc").not());
}

#[test]
fn test_explicit_toml_source() {
	let home = tempfile::tempdir().unwrap();
	let source = home.path().join("hosts.toml");
	fs::write(
		&source,
		r#"
[[subhosts]]
Host = "db{item}"
HostName = "10.0.0.{item}"
with_items = [1, 2]
"#,
	)
	.unwrap();

	edgar_cmd(home.path())
		.args(["show", "--config"])
		.arg(&source)
		.assert()
		.success()
		.stdout(predicate::str::contains("Host db1\n  HostName 10.0.0.1"))
		.stdout(predicate::str::contains("Host db2\n  HostName 10.0.0.2"));
}

// ============================================================================
// store tests
// ============================================================================

#[test]
fn test_store_writes_ssh_config() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), SIMPLE_SOURCE).unwrap();

	edgar_cmd(home.path()).assert().success();

	let content = fs::read_to_string(home.path().join(".ssh/config")).unwrap();
	assert!(content.starts_with("# Generated by edgar on "));
	assert!(content.contains("# Source: "));
	assert!(content.ends_with("Host name\n  HostName 127.0.0.1\n"));
}

#[test]
fn test_store_to_custom_output() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), SIMPLE_SOURCE).unwrap();
	let output = home.path().join("out/ssh_config");

	edgar_cmd(home.path())
		.args(["store", "-o"])
		.arg(&output)
		.assert()
		.success();

	let content = fs::read_to_string(&output).unwrap();
	assert!(content.contains("Host *\n  Compression yes"));
	assert!(!home.path().join(".ssh/config").exists());
}

#[test]
fn test_store_expands_tilde_in_output() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), SIMPLE_SOURCE).unwrap();

	edgar_cmd(home.path())
		.current_dir(home.path())
		.args(["store", "-o", "~/generated/config"])
		.assert()
		.success();

	let content = fs::read_to_string(home.path().join("generated/config")).unwrap();
	assert!(content.ends_with("Host name\n  HostName 127.0.0.1\n"));
	assert!(!home.path().join("~").exists());
}

#[test]
fn test_store_to_stdout() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), SIMPLE_SOURCE).unwrap();

	edgar_cmd(home.path())
		.args(["store", "-o", "-"])
		.assert()
		.success()
		.stdout(predicate::str::starts_with("Host *"));

	assert!(!home.path().join(".ssh/config").exists());
}

// ============================================================================
// Diagnostics tests
// ============================================================================

#[test]
fn test_deprecated_option_warns() {
	let home = tempfile::tempdir().unwrap();
	fs::write(
		home.path().join(".edgarrc"),
		"- Host: a\n  UseRoaming: no\n  Port: 22\n",
	)
	.unwrap();

	edgar_cmd(home.path())
		.arg("show")
		.assert()
		.success()
		.stdout("Host a\n  Port 22\n")
		.stderr(predicate::str::contains("UseRoaming is deprecated"));
}

#[test]
fn test_invalid_option_fails_without_output() {
	let home = tempfile::tempdir().unwrap();
	fs::write(
		home.path().join(".edgarrc"),
		"- Host: a\n  Port: 22\n- Host: b\n  AbsolutelyNotAnOption: test\n",
	)
	.unwrap();

	edgar_cmd(home.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("AbsolutelyNotAnOption is not a valid option"));

	assert!(!home.path().join(".ssh/config").exists());
}

#[test]
fn test_invalid_yaml_fails() {
	let home = tempfile::tempdir().unwrap();
	fs::write(home.path().join(".edgarrc"), "- Host: a\nb: [").unwrap();

	edgar_cmd(home.path())
		.arg("show")
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to parse YAML"));
}

#[test]
fn test_check_reports_counts() {
	let home = tempfile::tempdir().unwrap();
	fs::write(
		home.path().join(".edgarrc"),
		"- Host: a\n  Protocol: 2\n- Host: b\n  Port: 22\n",
	)
	.unwrap();

	edgar_cmd(home.path())
		.arg("check")
		.assert()
		.success()
		.stdout(predicate::str::contains("is valid (2 blocks, 1 warnings)"));

	assert!(!home.path().join(".ssh/config").exists());
}
