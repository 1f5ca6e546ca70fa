//! 课时标题解析
//!
//! 课时名称的末尾可能带有 `(MM:SS)` 形式的时长，例如 `Intro (5:30)`。
//! 只识别位于字符串末尾的时长标记，其他位置的括号内容保持原样。

use std::sync::LazyLock;

use regex::Regex;

// Minutes: 1-2 digits. Seconds: exactly 2 digits below 60.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]{1,2}):([0-5][0-9])\)$").unwrap());
static DURATION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([0-9]{1,2}:[0-5][0-9]\)$").unwrap());

/// Returns the lesson duration in minutes encoded at the end of `raw_title`,
/// or `0.0` when there is no valid trailing `(MM:SS)` token.
pub fn parse_duration(raw_title: &str) -> f64 {
    let Some(captures) = DURATION_RE.captures(raw_title.trim()) else {
        return 0.0;
    };

    let minutes: f64 = captures[1].parse().unwrap_or(0.0);
    let seconds: f64 = captures[2].parse().unwrap_or(0.0);

    minutes + seconds / 60.0
}

/// Removes the trailing `(MM:SS)` token (and the whitespace before it) and trims.
pub fn clean_title(raw_title: &str) -> String {
    DURATION_TOKEN_RE
        .replace(raw_title.trim(), "")
        .trim()
        .to_string()
}

/// Splits a raw lesson label into its display title and duration.
pub fn parse_title(raw_title: &str) -> (String, f64) {
    (clean_title(raw_title), parse_duration(raw_title))
}
