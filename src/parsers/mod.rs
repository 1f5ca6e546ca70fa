//! # 解析器模块
//!
//! - `title` - 从课时标题中解析时长 `(MM:SS)`
//! - `html` - HTML 文档解析、页面查询、完成状态检测、元数据

pub mod html;
pub mod title;

// Re-export commonly used items for convenience
pub use html::{html_to_document, HtmlPage, PageQuery};
pub use title::{clean_title, parse_duration, parse_title};
