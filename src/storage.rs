//! 偏好设置存储
//!
//! 只保存一个值：每日学习目标（分钟）。读写失败只记录警告，
//! 调用方继续使用默认值，不会向用户报错。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_DAILY_TARGET, MAX_DAILY_TARGET, MIN_DAILY_TARGET};
use crate::error::{CourseTimerError, CourseTimerResult};

/// Minutes per day the user plans to study, always within `1..=1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct DailyTarget(u32);

impl DailyTarget {
    pub fn new(minutes: i64) -> Self {
        Self::clamp(minutes)
    }

    /// Clamps any integer into the accepted range.
    pub fn clamp(minutes: i64) -> Self {
        let clamped = minutes.clamp(i64::from(MIN_DAILY_TARGET), i64::from(MAX_DAILY_TARGET));
        DailyTarget(clamped as u32)
    }

    /// Interprets free-form user input.
    ///
    /// The leading integer is used (`"45 min"` is 45). Input without one, or
    /// a zero, falls back to the default before clamping.
    pub fn from_input(input: &str) -> Self {
        match leading_integer(input) {
            Some(0) | None => Self::default(),
            Some(minutes) => Self::clamp(minutes),
        }
    }

    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl Default for DailyTarget {
    fn default() -> Self {
        DailyTarget(DEFAULT_DAILY_TARGET)
    }
}

impl From<DailyTarget> for u32 {
    fn from(target: DailyTarget) -> Self {
        target.0
    }
}

impl TryFrom<i64> for DailyTarget {
    type Error = String;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        if (i64::from(MIN_DAILY_TARGET)..=i64::from(MAX_DAILY_TARGET)).contains(&minutes) {
            Ok(DailyTarget(minutes as u32))
        } else {
            Err(format!(
                "daily target {} is outside {}..={}",
                minutes, MIN_DAILY_TARGET, MAX_DAILY_TARGET
            ))
        }
    }
}

impl std::fmt::Display for DailyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // 超长数字按饱和处理，之后会被限制到最大值
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Key/value collaborator holding the daily target between runs.
pub trait PreferenceStore {
    /// `Ok(None)` when nothing was stored yet.
    fn get_daily_target(&self) -> CourseTimerResult<Option<DailyTarget>>;

    fn set_daily_target(&mut self, target: DailyTarget) -> CourseTimerResult<()>;
}

/// Reads the stored target, falling back to `fallback` on absence or failure.
pub fn load_daily_target(store: &dyn PreferenceStore, fallback: DailyTarget) -> DailyTarget {
    match store.get_daily_target() {
        Ok(Some(target)) => target,
        Ok(None) => fallback,
        Err(e) => {
            tracing::warn!("Could not load daily target from storage: {}", e);
            fallback
        }
    }
}

/// Writes the target, logging failures instead of returning them.
pub fn save_daily_target(store: &mut dyn PreferenceStore, target: DailyTarget) {
    if let Err(e) = store.set_daily_target(target) {
        tracing::warn!("Could not save daily target to storage: {}", e);
    }
}

fn storage_failure(path: &Path, error: impl std::fmt::Display) -> CourseTimerError {
    CourseTimerError::StorageFailure(format!("{}: {}", path.display(), error))
}

#[derive(Debug, Deserialize, Serialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    daily_target: Option<DailyTarget>,
}

/// TOML file backed store, e.g. `~/.config/course-timer/preferences.toml`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path).as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CourseTimerResult<Option<Preferences>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| storage_failure(&self.path, e))?;
        let preferences = toml::from_str(&content).map_err(|e| storage_failure(&self.path, e))?;

        Ok(Some(preferences))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_daily_target(&self) -> CourseTimerResult<Option<DailyTarget>> {
        Ok(self.read()?.and_then(|preferences| preferences.daily_target))
    }

    fn set_daily_target(&mut self, target: DailyTarget) -> CourseTimerResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_failure(&self.path, e))?;
        }

        let preferences = Preferences {
            daily_target: Some(target),
        };
        let content = toml::to_string(&preferences).map_err(|e| storage_failure(&self.path, e))?;
        fs::write(&self.path, content).map_err(|e| storage_failure(&self.path, e))?;

        tracing::debug!("saved daily target {} to {}", target.minutes(), self.path.display());
        Ok(())
    }
}

/// In-process store, used when no preferences file should be touched.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    daily_target: Option<DailyTarget>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_daily_target(target: DailyTarget) -> Self {
        Self {
            daily_target: Some(target),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_daily_target(&self) -> CourseTimerResult<Option<DailyTarget>> {
        Ok(self.daily_target)
    }

    fn set_daily_target(&mut self, target: DailyTarget) -> CourseTimerResult<()> {
        self.daily_target = Some(target);
        Ok(())
    }
}
