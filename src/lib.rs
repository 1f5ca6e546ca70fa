//! # Course Timer Library
//!
//! 从保存下来的课程页面中提取章节和课时，计算学习进度、剩余时间和每日学习计划。
//!
//! ## 模块组织
//!
//! - `model` - 课程、章节、课时数据模型
//! - `parsers` - 课时标题解析和 HTML 页面查询
//! - `extractor` - 从页面提取课程结构
//! - `metrics` - 进度统计、完成预测、今日计划
//! - `formatter` - 文本报告
//! - `session` - 学习会话（当前课程和每日目标）
//! - `storage` / `clipboard` - 偏好设置存储和剪贴板
//! - `config` / `env` - 配置文件和环境变量
//! - `core` - 输入加载、页面地址检查、终端消息输出

pub mod clipboard;
pub mod config;
pub mod core;
pub mod env;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod metrics;
pub mod model;
pub mod parsers;
pub mod session;
pub mod storage;

// Re-export commonly used items for convenience
pub use config::CourseTimerConfig;
pub use error::{CourseTimerError, CourseTimerResult};
pub use model::{Course, CourseInfo, Lesson, Section};
pub use session::StudySession;
