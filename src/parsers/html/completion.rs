//! 课时完成状态检测
//!
//! 完成状态只能从页面标记中推断，属于启发式判断，页面结构变化时可能误判。
//! 检测策略通过 `CompletionDetector` 注入提取器，可以替换或组合。

use scraper::Selector;

use super::query::PageQuery;

/// Classes on the lesson node itself that mark it complete.
pub const DEFAULT_SELF_MARKER: &str = ".completed, .complete";

/// Descendants that mark a lesson complete, including icon markers like `fa-check`.
pub const DEFAULT_DESCENDANT_MARKER: &str = r#".completed, .fa-check, [class*="check"]"#;

/// Decides whether a lesson node is marked as complete.
pub trait CompletionDetector<Q: PageQuery + ?Sized> {
    fn is_lesson_complete<'a>(&self, page: &'a Q, node: &Q::Node<'a>) -> bool;
}

/// Selector-based heuristic: a lesson is complete when the node itself matches
/// `self_marker` or any descendant matches `descendant_marker`.
pub struct MarkerDetector {
    pub self_marker: Option<Selector>,
    pub descendant_marker: Option<Selector>,
}

impl Default for MarkerDetector {
    fn default() -> Self {
        MarkerDetector {
            self_marker: Selector::parse(DEFAULT_SELF_MARKER).ok(),
            descendant_marker: Selector::parse(DEFAULT_DESCENDANT_MARKER).ok(),
        }
    }
}

impl<Q: PageQuery + ?Sized> CompletionDetector<Q> for MarkerDetector {
    fn is_lesson_complete<'a>(&self, page: &'a Q, node: &Q::Node<'a>) -> bool {
        let marked = self
            .self_marker
            .as_ref()
            .is_some_and(|marker| page.matches(node, marker));

        marked
            || self
                .descendant_marker
                .as_ref()
                .is_some_and(|marker| page.select_first(Some(node), marker).is_some())
    }
}

/// Treats a lesson as complete when any of the wrapped detectors says so.
pub struct AnyOf<Q: PageQuery + ?Sized> {
    detectors: Vec<Box<dyn CompletionDetector<Q>>>,
}

impl<Q: PageQuery + ?Sized> AnyOf<Q> {
    pub fn new() -> Self {
        AnyOf {
            detectors: Vec::new(),
        }
    }

    pub fn register(&mut self, detector: Box<dyn CompletionDetector<Q>>) {
        self.detectors.push(detector);
    }
}

impl<Q: PageQuery + ?Sized> Default for AnyOf<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: PageQuery + ?Sized> CompletionDetector<Q> for AnyOf<Q> {
    fn is_lesson_complete<'a>(&self, page: &'a Q, node: &Q::Node<'a>) -> bool {
        self.detectors
            .iter()
            .any(|detector| detector.is_lesson_complete(page, node))
    }
}
