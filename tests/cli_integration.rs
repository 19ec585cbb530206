//! Command-line tests
//!
//! Run the built binary and check what lands on stdout, stderr and the exit
//! status.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const DEFAULT_PARTY_OUTPUT: &str = "\
Elena (Human Mage) casts Fireball! - Health: 80
Borislav (Human Warrior) strikes with a sword! - Health: 120
Ilya (Human Archer) shoots an arrow! - Health: 90
Gor'uk (Orc Mage) curses the enemy! - Health: 70
Thrag (Orc Warrior) performs a brutal strike! - Health: 150
Rag (Orc Archer) fires a heavy bolt! - Health: 85
";

fn hero_factory(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hero_factory"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Should run hero_factory binary")
}

fn temp_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp roster");
    file.write_all(content.as_bytes())
        .expect("Should write temp roster");
    file
}

#[test]
fn test_no_arguments_prints_default_party() {
    let output = hero_factory(&[]);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEFAULT_PARTY_OUTPUT);
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = hero_factory(&["--verbose"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEFAULT_PARTY_OUTPUT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Mustering 6 heroes"));
}

#[test]
fn test_json_format_flag() {
    let output = hero_factory(&["--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["line"], "Elena (Human Mage) casts Fireball! - Health: 80");
}

#[test]
fn test_roster_flag() {
    let file = temp_roster(
        r#"
        [[heroes]]
        faction = "Orc"
        role = "Archer"
        name = "Rag"
        "#,
    );
    let path = file.path().to_str().expect("temp path is UTF-8");
    let output = hero_factory(&["--roster", path]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Rag (Orc Archer) fires a heavy bolt! - Health: 85\n"
    );
}

#[test]
fn test_blank_name_roster_exits_with_failure() {
    let file = temp_roster(
        r#"
        [[heroes]]
        faction = "Human"
        role = "Mage"
        name = "Elena"

        [[heroes]]
        faction = "Human"
        role = "Warrior"
        name = ""
        "#,
    );
    let path = file.path().to_str().expect("temp path is UTF-8");
    let output = hero_factory(&["--roster", path]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No hero should act when recruiting fails");
    assert!(String::from_utf8_lossy(&output.stderr).contains("BlankName"));
}

#[test]
fn test_missing_roster_exits_with_failure() {
    let output = hero_factory(&["--roster", "/nonexistent/roster.toml"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_format_rejected_by_parser() {
    let output = hero_factory(&["--format", "yaml"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
