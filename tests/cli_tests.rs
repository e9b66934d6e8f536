//! CLI integration tests using the REAL infat binary
//!
//! Nothing here touches Launch Services: every case either fails before the
//! OS services are needed or only inspects argument and config handling.

mod common;

use common::{TestHome, infat_cmd};
use predicates::prelude::*;

#[test]
fn test_help_output() {
    infat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("URL schemes"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_output() {
    infat_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("infat"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    infat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_zsh() {
    infat_cmd()
        .args(["completions", "--shell", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef infat"));
}

#[test]
fn test_completions_unknown_shell() {
    infat_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    infat_cmd()
        .args(["--verbose", "--quiet", "version"])
        .assert()
        .failure();
}

#[test]
fn test_zero_timeout_is_rejected() {
    infat_cmd()
        .args(["--timeout", "0", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_missing_config_names_search_location() {
    let home = TestHome::new();
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains(
            home.default_config().display().to_string(),
        ));
}

#[test]
fn test_explicit_missing_config() {
    let home = TestHome::new();
    let missing = home.temp.path().join("nope.toml");
    home.cmd()
        .args(["--config", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_config_from_environment_variable() {
    let home = TestHome::new();
    let path = home.write_config("env.toml", "[extensions]\n");
    home.cmd()
        .env("INFAT_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid configuration tables"))
        .stderr(predicate::str::contains("env.toml"));
}

#[test]
fn test_empty_tables_are_rejected() {
    let home = TestHome::new();
    home.write_default_config("[extensions]\n\n[schemes]\n");
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid configuration tables"));
}

#[test]
fn test_config_without_known_tables_is_rejected() {
    let home = TestHome::new();
    home.write_default_config("[aliases]\nmd = \"Zed\"\n");
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid configuration tables"));
}

#[test]
fn test_non_string_value_is_rejected() {
    let home = TestHome::new();
    home.write_default_config("[extensions]\nmd = 42\n");
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Value for key 'md' in [extensions] is not a string",
        ));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let home = TestHome::new();
    home.write_default_config("[extensions\nmd = \"Zed\"\n");
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_types_and_supertypes_together_are_invalid() {
    let home = TestHome::new();
    home.write_default_config(
        "[types]\nplain-text = \"Zed\"\n\n[supertypes]\nimage = \"Preview\"\n",
    );
    home.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_set_requires_a_target() {
    infat_cmd()
        .args(["set", "Zed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required option"))
        .stderr(predicate::str::contains("--ext, --scheme, --type"));
}

#[test]
fn test_set_rejects_two_targets() {
    infat_cmd()
        .args(["set", "Zed", "--ext", "md", "--scheme", "mailto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conflicting options"));
}

#[test]
fn test_set_requires_an_application() {
    infat_cmd().args(["set", "--ext", "md"]).assert().failure();
}

#[test]
fn test_info_requires_a_subject() {
    infat_cmd()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required option"));
}

#[test]
fn test_info_rejects_two_subjects() {
    infat_cmd()
        .args(["info", "--ext", "png", "--scheme", "http"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conflicting options"));
}

#[test]
fn test_info_unknown_application() {
    infat_cmd()
        .args(["info", "--app", "Definitely Not Installed 7f3a"])
        .assert()
        .failure();
}

#[cfg(not(target_os = "macos"))]
mod unsupported_host {
    use super::*;

    #[test]
    fn test_apply_valid_config_reports_platform() {
        let home = TestHome::new();
        home.write_default_config("[extensions]\nmd = \"Zed\"\n");
        home.cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Platform not supported"));
    }

    #[test]
    fn test_set_reports_platform() {
        infat_cmd()
            .args(["set", "Zed", "--ext", "md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Platform not supported"));
    }

    #[test]
    fn test_info_ext_reports_platform() {
        infat_cmd()
            .args(["info", "--ext", "png"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Platform not supported"));
    }
}
