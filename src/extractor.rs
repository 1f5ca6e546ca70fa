//! 课程结构提取
//!
//! 遍历页面中的章节节点和课时节点，生成规范化的 `Course` 模型。
//! 缺少标题的章节、缺少名称的课时会被跳过，不计入任何统计。

use chrono::{SecondsFormat, Utc};
use scraper::Selector;

use crate::config::PageMarkers;
use crate::error::{CourseTimerError, CourseTimerResult};
use crate::model::{Course, CourseInfo, Lesson, Section};
use crate::parsers::html::completion::CompletionDetector;
use crate::parsers::html::query::PageQuery;
use crate::parsers::html::utils::{normalize_whitespace, PLATFORM_NAME};
use crate::parsers::title::parse_title;

pub const NO_SECTIONS_MESSAGE: &str =
    "No course sections found. Make sure you're on a Teachable course page.";

/// Extracts the course structure from `page`.
///
/// Fails with [`CourseTimerError::NoSectionsFound`] when the page exposes no
/// section nodes at all. Sections without a title element are skipped.
pub fn extract_course<Q: PageQuery + ?Sized>(
    page: &Q,
    markers: &PageMarkers,
    detector: &dyn CompletionDetector<Q>,
    page_url: &str,
) -> CourseTimerResult<Course> {
    let section_nodes = page.select_all(None, &markers.section);
    if section_nodes.is_empty() {
        return Err(CourseTimerError::NoSectionsFound(
            NO_SECTIONS_MESSAGE.to_string(),
        ));
    }

    let mut sections = Vec::with_capacity(section_nodes.len());
    for (index, section_node) in section_nodes.iter().enumerate() {
        let Some(title_node) = page.select_first(Some(section_node), &markers.section_title) else {
            tracing::debug!("skipping section #{} without a title element", index + 1);
            continue;
        };
        let title = page.text(&title_node);
        let lessons = extract_lessons(page, section_node, markers, detector);

        sections.push(Section::new(title, lessons));
    }

    let course = Course::new(
        sections,
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        page_url.to_string(),
        extract_course_info(page, markers),
    );

    tracing::info!(
        sections = course.sections.len(),
        lessons = course.total_lessons,
        timed = course.timed_lessons,
        minutes = course.total_time_minutes,
        "extracted course"
    );

    Ok(course)
}

fn extract_lessons<'a, Q: PageQuery + ?Sized>(
    page: &'a Q,
    section_node: &Q::Node<'a>,
    markers: &PageMarkers,
    detector: &dyn CompletionDetector<Q>,
) -> Vec<Lesson> {
    page.select_all(Some(section_node), &markers.lesson)
        .iter()
        .filter_map(|lesson_node| {
            let Some(name_node) = page.select_first(Some(lesson_node), &markers.lesson_name) else {
                tracing::debug!("skipping lesson without a name element");
                return None;
            };

            let full_title = page.text(&name_node);
            let (title, duration) = parse_title(&full_title);

            Some(Lesson {
                title,
                full_title,
                duration,
                id: page.attr(lesson_node, &markers.lesson_id_attr),
                url: page.attr(lesson_node, &markers.lesson_url_attr),
                is_complete: detector.is_lesson_complete(page, lesson_node),
            })
        })
        .collect()
}

/// Reads the course title and instructor name, when the page shows them.
pub fn extract_course_info<Q: PageQuery + ?Sized>(page: &Q, markers: &PageMarkers) -> CourseInfo {
    let first_text = |selector: &Selector| {
        page.select_first(None, selector)
            .map(|node| normalize_whitespace(&page.text(&node)))
            .filter(|text| !text.is_empty())
    };

    CourseInfo {
        course_title: first_text(&markers.course_title),
        instructor: first_text(&markers.instructor),
        platform: PLATFORM_NAME.to_string(),
    }
}

/// Whether the page looks like a course curriculum page at all.
pub fn is_course_page<Q: PageQuery + ?Sized>(page: &Q, markers: &PageMarkers) -> bool {
    page.select_first(None, &markers.course_page).is_some()
}
