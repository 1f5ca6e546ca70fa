//! 页面查询接口
//!
//! 提取器不直接依赖具体的 DOM 实现，而是通过 `PageQuery` 查询页面：
//! 按 CSS 选择器查找节点、读取文本和属性。`HtmlPage` 是基于 `scraper` 的实现。
//!
//! 没有匹配节点时返回空集合，而不是错误。

use scraper::{ElementRef, Html, Selector};

use super::dom::element_text;

/// Read-only access to a loaded document.
pub trait PageQuery {
    type Node<'a>: Clone
    where
        Self: 'a;

    /// All elements under `scope` (or the whole document) matching `selector`,
    /// in document order. The scope node itself is never included.
    fn select_all<'a>(&'a self, scope: Option<&Self::Node<'a>>, selector: &Selector) -> Vec<Self::Node<'a>>;

    /// First match in document order.
    fn select_first<'a>(
        &'a self,
        scope: Option<&Self::Node<'a>>,
        selector: &Selector,
    ) -> Option<Self::Node<'a>> {
        self.select_all(scope, selector).into_iter().next()
    }

    /// Whether `node` itself matches `selector`.
    fn matches<'a>(&'a self, node: &Self::Node<'a>, selector: &Selector) -> bool;

    /// Text content with only the leading and trailing whitespace removed.
    fn text<'a>(&'a self, node: &Self::Node<'a>) -> String;

    fn attr<'a>(&'a self, node: &Self::Node<'a>, name: &str) -> Option<String>;
}

/// A parsed HTML document.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn new(document: Html) -> HtmlPage {
        HtmlPage { document }
    }

    pub fn parse(html: &str) -> HtmlPage {
        HtmlPage::new(Html::parse_document(html))
    }

    pub fn document(&self) -> &Html {
        &self.document
    }
}

impl PageQuery for HtmlPage {
    type Node<'a> = ElementRef<'a>
    where
        Self: 'a;

    fn select_all<'a>(&'a self, scope: Option<&ElementRef<'a>>, selector: &Selector) -> Vec<ElementRef<'a>> {
        match scope {
            Some(scope) => scope.select(selector).collect(),
            None => self.document.select(selector).collect(),
        }
    }

    fn matches<'a>(&'a self, node: &ElementRef<'a>, selector: &Selector) -> bool {
        selector.matches(node)
    }

    fn text<'a>(&'a self, node: &ElementRef<'a>) -> String {
        element_text(node)
    }

    fn attr<'a>(&'a self, node: &ElementRef<'a>, name: &str) -> Option<String> {
        node.value().attr(name).map(str::to_string)
    }
}
