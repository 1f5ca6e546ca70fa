//! HTML解析和处理模块
//!
//! - `utils`: 基础工具函数和常量
//! - `dom`: 文档解码与解析
//! - `query`: 页面查询接口
//! - `completion`: 课时完成状态检测
//! - `metadata`: 文档元数据处理

pub mod completion;
pub mod dom;
pub mod metadata;
pub mod query;
pub mod utils;

pub use completion::{AnyOf, CompletionDetector, MarkerDetector};
pub use dom::{decode_html, element_text, html_to_document};
pub use metadata::{discover_page_url, get_base_url, get_canonical_url, get_charset, get_og_url};
pub use query::{HtmlPage, PageQuery};
pub use utils::{normalize_whitespace, WHITESPACES};
