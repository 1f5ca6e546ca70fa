//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "COURSE_TIMER_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.trim().to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 课程分析相关环境变量
pub mod course {
    use super::*;

    /// 每日学习目标（分钟）
    pub struct DailyTarget;
    impl EnvVar<u32> for DailyTarget {
        const NAME: &'static str = "COURSE_TIMER_DAILY_TARGET";
        const DEFAULT: Option<u32> = None;
        const DESCRIPTION: &'static str =
            "Default daily study target in minutes, read like the `target` command (0 or invalid gives 30, clamped to 1-1440)";

        fn parse(value: &str) -> EnvResult<u32> {
            Ok(crate::storage::DailyTarget::from_input(value).minutes())
        }
    }

    /// 允许的课程页面地址模式
    pub struct OriginPattern;
    impl EnvVar<Vec<String>> for OriginPattern {
        const NAME: &'static str = "COURSE_TIMER_ORIGIN_PATTERN";
        const DEFAULT: Option<Vec<String>> = None;
        const DESCRIPTION: &'static str =
            "Comma separated host/path fragments a course page location must contain";

        fn parse(value: &str) -> EnvResult<Vec<String>> {
            let patterns: Vec<String> = value
                .split(',')
                .map(|pattern| pattern.trim().to_string())
                .filter(|pattern| !pattern.is_empty())
                .collect();

            if patterns.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "At least one pattern is required".to_string(),
                });
            }

            Ok(patterns)
        }
    }

    /// 偏好设置文件路径
    pub struct PreferencesPath;
    impl EnvVar<String> for PreferencesPath {
        const NAME: &'static str = "COURSE_TIMER_PREFERENCES_PATH";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Path of the TOML file holding the daily target";

        fn parse(value: &str) -> EnvResult<String> {
            parse_non_empty(value, Self::NAME)
        }
    }

    /// 配置文件路径
    pub struct ConfigPath;
    impl EnvVar<String> for ConfigPath {
        const NAME: &'static str = "COURSE_TIMER_CONFIG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Path of the configuration file (TOML or JSON)";

        fn parse(value: &str) -> EnvResult<String> {
            parse_non_empty(value, Self::NAME)
        }
    }
}

/// 辅助函数
fn parse_non_empty(value: &str, var_name: &str) -> EnvResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    Ok(value.to_string())
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"warn\")\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        core::NoColor::DEFAULT
    ));

    docs.push_str("\n## Course Analysis\n\n");
    docs.push_str(&format!(
        "- `{}`: {}\n",
        course::DailyTarget::NAME,
        course::DailyTarget::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {}\n",
        course::OriginPattern::NAME,
        course::OriginPattern::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {}\n",
        course::PreferencesPath::NAME,
        course::PreferencesPath::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {}\n",
        course::ConfigPath::NAME,
        course::ConfigPath::DESCRIPTION
    ));

    docs
}
