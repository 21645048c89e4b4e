use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in files {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    dir
}

fn quickargs(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quickargs").unwrap();
    cmd.current_dir(dir.path());
    cmd.env("QUICKARGS_CONFIG", dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolve_filters_and_sorts() {
    let dir = workspace(&["b.txt", "a.txt", "c.md"]);
    quickargs(&dir)
        .args(["resolve", "*.txt", "--ext", ".txt", "--sort", "--basenames"])
        .assert()
        .success()
        .stdout("a.txt\ta\nb.txt\tb\n");
}

#[test]
fn resolve_accepts_extension_without_period() {
    let dir = workspace(&["a.png", "b.jpg"]);
    quickargs(&dir)
        .args(["resolve", "*", "-e", "png"])
        .assert()
        .success()
        .stdout("a.png\n");
}

#[test]
fn resolve_without_matches_prints_nothing() {
    let dir = workspace(&["a.txt"]);
    quickargs(&dir)
        .args(["resolve", "*.png", "nope.txt"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn remembered_extensions_become_the_default() {
    let dir = workspace(&["a.png", "b.txt"]);
    quickargs(&dir)
        .args(["resolve", "*", "--ext", ".png", "--remember"])
        .assert()
        .success()
        .stdout("a.png\n");

    let saved = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains(".png"));

    quickargs(&dir)
        .args(["resolve", "*", "--sort"])
        .assert()
        .success()
        .stdout("a.png\n");
}

#[test]
fn config_sort_default_applies() {
    let dir = workspace(&["b.txt", "a.txt"]);
    fs::write(dir.path().join("config.toml"), "sort = true\n").unwrap();
    quickargs(&dir)
        .args(["resolve", "b.txt", "a.txt"])
        .assert()
        .success()
        .stdout("a.txt\nb.txt\n");
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = workspace(&["a.txt"]);
    fs::write(dir.path().join("config.toml"), "sort = [").unwrap();
    quickargs(&dir)
        .args(["resolve", "a.txt"])
        .assert()
        .success()
        .stdout("a.txt\n");
}

#[test]
fn check_consumes_flags_and_passes() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .args(["check", "-f", "--verbose", "-f", "--dry-run", "--", "--verbose", "file.txt"])
        .assert()
        .success()
        .stdout("--verbose=true\n--dry-run=false\npositional: file.txt\n");
}

#[test]
fn check_rejects_unknown_option() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .args(["check", "--", "--unknown"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains(
            "Unrecognized command-line option: --unknown",
        ));
}

#[test]
fn check_flags_positional_containing_double_dash() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .args(["check", "--", "my--file.txt"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("my--file.txt"));
}

#[test]
fn config_flag_shows_path() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .arg("--config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config path:"))
        .stdout(predicate::str::contains("Config file does not exist."));
}

#[test]
fn missing_subcommand_fails() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("A subcommand is required"));
}

#[test]
fn check_reports_consumed_flags_before_exiting() {
    let dir = workspace(&[]);
    quickargs(&dir)
        .args(["check", "-f", "--verbose", "--", "--verbose", "--extra", "file.txt"])
        .assert()
        .code(255)
        .stdout("--verbose=true\n")
        .stderr(predicate::str::contains(
            "Unrecognized command-line option: --extra",
        ))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn configured_extension_without_period_still_matches() {
    let dir = workspace(&["a.png", "b.txt"]);
    fs::write(dir.path().join("config.toml"), "extensions = [\"png\"]\n").unwrap();
    quickargs(&dir)
        .args(["resolve", "*"])
        .assert()
        .success()
        .stdout("a.png\n");
}
