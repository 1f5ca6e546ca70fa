//! HTML 文档元数据处理模块
//!
//! 此模块从保存下来的课程页面中读取元数据：
//! - 字符编码声明
//! - 页面原始地址（canonical 链接、`og:url`、`<base href>`）
//!
//! 页面通常是从浏览器另存为的本地文件，原始地址只能从这些标签中恢复。

use std::sync::LazyLock;

use scraper::{Html, Selector};

static META: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta").unwrap());
static LINK_WITH_HREF: LazyLock<Selector> = LazyLock::new(|| Selector::parse("link[href]").unwrap());
static BASE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("base").unwrap());

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// 获取文档字符编码
///
/// 支持两种格式：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
pub fn get_charset(document: &Html) -> Option<String> {
    for meta in document.select(&META) {
        let meta = meta.value();

        if let Some(charset) = meta.attr("charset") {
            return Some(charset.trim().to_string());
        }

        if meta
            .attr("http-equiv")
            .is_some_and(|value| value.eq_ignore_ascii_case("content-type"))
        {
            let charset = meta.attr("content").and_then(|content| {
                content
                    .split(';')
                    .skip(1)
                    .map(str::trim)
                    .find_map(|part| part.strip_prefix("charset="))
                    .map(|charset| charset.trim_matches('"').to_string())
            });
            if charset.is_some() {
                return charset;
            }
        }
    }

    None
}

/// 获取文档的 base URL
///
/// 只有第一个 `<base>` 标签有效。
pub fn get_base_url(document: &Html) -> Option<String> {
    document
        .select(&BASE)
        .next()
        .and_then(|base| base.value().attr("href"))
        .and_then(non_empty)
}

/// 获取 `<link rel="canonical">` 的地址
pub fn get_canonical_url(document: &Html) -> Option<String> {
    document
        .select(&LINK_WITH_HREF)
        .find(|link| {
            link.value()
                .attr("rel")
                .unwrap_or_default()
                .split_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("canonical"))
        })
        .and_then(|link| link.value().attr("href"))
        .and_then(non_empty)
}

/// 获取 `<meta property="og:url">` 的地址
pub fn get_og_url(document: &Html) -> Option<String> {
    document
        .select(&META)
        .find(|meta| {
            meta.value()
                .attr("property")
                .is_some_and(|property| property.eq_ignore_ascii_case("og:url"))
        })
        .and_then(|meta| meta.value().attr("content"))
        .and_then(non_empty)
}

/// 推断页面原始地址：canonical → og:url → base
pub fn discover_page_url(document: &Html) -> Option<String> {
    get_canonical_url(document)
        .or_else(|| get_og_url(document))
        .or_else(|| get_base_url(document))
}
