#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);
pub const API_KEY: &str = "TEST_SECRET_KEY";

/// A `weather` command with colors off and logging quiet.
pub fn weather_cmd(secrets: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("weather"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("WEATHER_SECRETS_FILE", secrets);
    cmd.env("NO_COLOR", "1");
    cmd.env("NO_PROXY", "127.0.0.1,localhost");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes a secrets file pointing the client at `base_uri`.
pub fn secrets_for(base_uri: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create secrets dir");
    let path = dir.path().join("secrets.toml");
    let contents = format!(
        "[openweather]\napi_key = \"{API_KEY}\"\nbase_url = \"{base_uri}/data/2.5/weather\"\ntimeout_secs = 5\n"
    );
    std::fs::write(&path, contents).expect("failed to write secrets file");
    (dir, path)
}
