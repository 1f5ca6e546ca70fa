//! 课程数据模型
//!
//! 从页面中提取出的课程结构：课程 → 章节 → 课时。
//! 文档顺序在每一层都有意义，计划选择和报告都依赖它。

use serde::{Deserialize, Serialize};

/// Minutes charged per lesson by the count-based fallback estimate.
pub const ESTIMATED_MINUTES_PER_LESSON: f64 = 10.0;

/// A single lesson row of a course section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Display title, with the trailing `(MM:SS)` token removed
    pub title: String,
    /// Raw label as found on the page
    pub full_title: String,
    /// Duration in minutes; `0.0` means the lesson is untimed
    pub duration: f64,
    pub id: Option<String>,
    pub url: Option<String>,
    pub is_complete: bool,
}

impl Lesson {
    pub fn is_timed(&self) -> bool {
        self.duration > 0.0
    }
}

/// A titled group of lessons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub lessons: Vec<Lesson>,
    /// Sum of the durations of timed lessons
    pub actual_time: f64,
    /// Lesson count × 10, independent of `actual_time`
    pub estimated_time: f64,
}

impl Section {
    /// Builds a section and derives both time totals from its lessons.
    pub fn new(title: String, lessons: Vec<Lesson>) -> Section {
        let actual_time = lessons
            .iter()
            .filter(|lesson| lesson.is_timed())
            .map(|lesson| lesson.duration)
            .sum();
        let estimated_time = lessons.len() as f64 * ESTIMATED_MINUTES_PER_LESSON;

        Section {
            title,
            lessons,
            actual_time,
            estimated_time,
        }
    }

    pub fn timed_lessons(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.is_timed()).count()
    }

    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|lesson| lesson.is_complete).count()
    }
}

/// Descriptive page metadata found next to the curriculum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub course_title: Option<String>,
    pub instructor: Option<String>,
    pub platform: String,
}

/// The full extracted course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub sections: Vec<Section>,
    pub total_lessons: usize,
    pub timed_lessons: usize,
    pub total_time_minutes: f64,
    /// RFC 3339 timestamp of the extraction
    pub extracted_at: String,
    pub page_url: String,
    #[serde(default)]
    pub info: CourseInfo,
}

impl Course {
    /// Builds a course and derives every aggregate from `sections`, which keeps
    /// `total_lessons` and `total_time_minutes` consistent with the sections.
    pub fn new(
        sections: Vec<Section>,
        extracted_at: String,
        page_url: String,
        info: CourseInfo,
    ) -> Course {
        let total_lessons = sections.iter().map(|section| section.lessons.len()).sum();
        let timed_lessons = sections.iter().map(Section::timed_lessons).sum();
        let total_time_minutes = sections.iter().map(|section| section.actual_time).sum();

        Course {
            sections,
            total_lessons,
            timed_lessons,
            total_time_minutes,
            extracted_at,
            page_url,
            info,
        }
    }

    pub fn untimed_lessons(&self) -> usize {
        self.total_lessons - self.timed_lessons
    }

    /// Iterates over every lesson together with the section it belongs to,
    /// in document order.
    pub fn lessons(&self) -> impl Iterator<Item = (&Section, &Lesson)> {
        self.sections
            .iter()
            .flat_map(|section| section.lessons.iter().map(move |lesson| (section, lesson)))
    }
}
