mod analyze;
mod section;
mod today;

use std::path::{Path, PathBuf};

use assert_cmd::prelude::*;
use std::process::Command;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("_data_")
        .join(name)
}

/// The binary, isolated from the developer's own configuration and preferences.
pub fn course_timer(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("NO_COLOR", "1")
        .env(
            "COURSE_TIMER_PREFERENCES_PATH",
            workdir.join("preferences.toml"),
        )
        .env_remove("COURSE_TIMER_CONFIG")
        .env_remove("COURSE_TIMER_DAILY_TARGET")
        .env_remove("COURSE_TIMER_ORIGIN_PATTERN")
        .env_remove("COURSE_TIMER_LOG_LEVEL");
    cmd
}
