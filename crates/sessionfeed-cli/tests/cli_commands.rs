//! Commands that finish on their own: guidance, config, argument errors.

use predicates::prelude::*;
use sessionfeed_testing::TestWorld;

const BIN: &str = env!("CARGO_BIN_EXE_sessionfeed");

#[test]
fn test_help_lists_commands() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Get started:"))
        .stdout(predicate::str::contains("sessionfeed watch <EVENTS_URL>"));
}

#[test]
fn test_config_path_honours_env() {
    let world = TestWorld::new();
    let expected = world.config_path().display().to_string();

    world
        .command(BIN)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_config_path_flag_wins_over_env() {
    let world = TestWorld::new();
    let explicit = world.temp_dir().join("other.toml");

    world
        .command(BIN)
        .arg("--config")
        .arg(&explicit)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(explicit.display().to_string()));
}

#[test]
fn test_config_show_without_file_prints_defaults() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[viewer]"))
        .stdout(predicate::str::contains("capacity = 200"));
}

#[test]
fn test_config_show_reads_file() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config(
        "[viewer]\nevents_url = \"http://localhost:9/events\"\ncapacity = 25\n",
    )?;

    world
        .command(BIN)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 25"))
        .stdout(predicate::str::contains("http://localhost:9/events"));
    Ok(())
}

#[test]
fn test_config_show_rejects_invalid_file() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[viewer\ncapacity = ")?;

    world
        .command(BIN)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn test_watch_without_url_fails() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .args(["watch", "--mode", "console"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no events URL configured"));
}

#[test]
fn test_watch_rejects_non_http_url() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .args(["watch", "--mode", "console", "ftp://host/events"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn test_watch_rejects_zero_capacity() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .args([
            "watch",
            "--mode",
            "console",
            "--capacity",
            "0",
            "http://localhost:9/events",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}

#[test]
fn test_watch_rejects_unknown_type() {
    let world = TestWorld::new();
    world
        .command(BIN)
        .args([
            "watch",
            "--mode",
            "console",
            "--types",
            "status,bogus",
            "http://localhost:9/events",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--types"));
}
