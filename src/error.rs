//! 统一错误处理
//!
//! 所有面向页面的错误都以 `Result` 值返回，不会以 panic 的形式穿过提取边界。

use thiserror::Error;

/// Errors produced while analyzing a course page or acting on the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseTimerError {
    /// The page has no extractable sections
    #[error("{0}")]
    NoSectionsFound(String),

    /// The analysis was triggered for a page outside the course host
    #[error("{0}")]
    WrongPage(String),

    /// Unexpected structural failure while reading or parsing the page
    #[error("Error extracting course data: {0}")]
    ExtractionFailure(String),

    /// Preference read/write failed; never shown to the user
    #[error("Preference storage failed: {0}")]
    StorageFailure(String),

    #[error("Failed to copy to clipboard: {0}")]
    ClipboardFailure(String),

    #[error("Please analyze the course first")]
    NotAnalyzed,

    #[error("No incomplete lessons found or course is already complete!")]
    NothingToStudy,

    #[error("Section {0} does not exist")]
    SectionOutOfRange(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}

/// 错误严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl CourseTimerError {
    /// Whether the error should be surfaced to the user. Storage failures are
    /// only logged and defaults are applied instead.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, CourseTimerError::StorageFailure(_))
    }

    /// Whether the user can fix the problem by navigating or retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CourseTimerError::NoSectionsFound(_)
                | CourseTimerError::WrongPage(_)
                | CourseTimerError::ClipboardFailure(_)
                | CourseTimerError::NotAnalyzed
                | CourseTimerError::StorageFailure(_)
        )
    }

    /// 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CourseTimerError::NothingToStudy => ErrorSeverity::Info,
            CourseTimerError::StorageFailure(_) => ErrorSeverity::Warning,
            CourseTimerError::NotAnalyzed => ErrorSeverity::Warning,
            CourseTimerError::NoSectionsFound(_) => ErrorSeverity::Error,
            CourseTimerError::WrongPage(_) => ErrorSeverity::Error,
            CourseTimerError::ExtractionFailure(_) => ErrorSeverity::Error,
            CourseTimerError::ClipboardFailure(_) => ErrorSeverity::Error,
            CourseTimerError::SectionOutOfRange(_) => ErrorSeverity::Error,
            CourseTimerError::Config(_) => ErrorSeverity::Error,
            CourseTimerError::Input(_) => ErrorSeverity::Error,
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            CourseTimerError::WrongPage(_) => 2,
            CourseTimerError::NoSectionsFound(_) => 3,
            CourseTimerError::ExtractionFailure(_) => 4,
            CourseTimerError::ClipboardFailure(_) => 5,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for CourseTimerError {
    fn from(error: std::io::Error) -> Self {
        CourseTimerError::Input(error.to_string())
    }
}

impl From<toml::de::Error> for CourseTimerError {
    fn from(error: toml::de::Error) -> Self {
        CourseTimerError::Config(format!("TOML解析错误: {}", error))
    }
}

impl From<serde_json::Error> for CourseTimerError {
    fn from(error: serde_json::Error) -> Self {
        CourseTimerError::Config(format!("JSON解析错误: {}", error))
    }
}

/// 错误结果类型别名
pub type CourseTimerResult<T> = Result<T, CourseTimerError>;

/// 记录错误并原样返回
///
/// 返回的错误由调用方展示给用户，这里只在调试日志中留下记录。
pub fn log_error<T>(error: CourseTimerError) -> CourseTimerResult<T> {
    tracing::debug!(severity = ?error.severity(), "{}", error);
    Err(error)
}
