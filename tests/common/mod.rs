#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;

pub const PASSWORD: &str = "correct horse";

pub fn courtside_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("courtside").expect("failed to find binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(data_dir.path());
    cmd
}

pub fn data_dir_arg(data_dir: &TempDir) -> String {
    data_dir.path().to_string_lossy().to_string()
}

/// Runs `courtside init` with the given court capacity.
pub fn init(data_dir: &TempDir, players_per_court: usize) {
    courtside_cmd(data_dir)
        .args(["init", "--data-dir", &data_dir_arg(data_dir)])
        .args(["--players-per-court", &players_per_court.to_string()])
        .assert()
        .success();
}

pub fn add_person(data_dir: &TempDir, id: &str, player: bool) {
    let mut cmd = courtside_cmd(data_dir);
    cmd.args(["person", "add", "--data-dir", &data_dir_arg(data_dir)])
        .args(["--id", id, "--first-name", id, "--last-name", "Test"])
        .args(["--email", &format!("{id}@example.com")])
        .args(["--password", PASSWORD, "--non-interactive"]);
    if player {
        cmd.arg("--player");
    }
    cmd.assert().success();
}

/// Creates a court and returns the id printed by the CLI.
pub fn create_court(data_dir: &TempDir, name: &str) -> String {
    let output = courtside_cmd(data_dir)
        .args(["court", "create", "--data-dir", &data_dir_arg(data_dir)])
        .args(["--name", name])
        .output()
        .expect("run court create");
    assert!(output.status.success(), "court create failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_whitespace()
        .last()
        .expect("court id in output")
        .to_string()
}
