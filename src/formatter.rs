//! 文本报告渲染
//!
//! 所有函数都是纯函数：只读取 `Course` / `TodayPlan`，输出确定的文本。

use chrono::NaiveDate;

use crate::metrics::{
    course_stats, projection, section_stats, CompletionDate, CourseStats, TodayPlan,
};
use crate::model::{Course, Section};

const PROGRESS_BAR_WIDTH: usize = 20;

/// Renders minutes as `"N min"` under an hour, `"Hh Mm"` otherwise.
///
/// Fractional minutes keep up to two decimals with trailing zeros dropped,
/// so `5.5` renders as `"5.5 min"` and `75.25` as `"1h 15.25m"`.
pub fn format_time(minutes: f64) -> String {
    let minutes = if minutes.is_finite() { minutes.max(0.0) } else { 0.0 };
    // 先保留两位小数，再决定按分钟还是小时显示
    let minutes = round_hundredths(minutes);

    if minutes < 60.0 {
        format!("{} min", format_number(minutes))
    } else {
        let hours = (minutes / 60.0).floor();
        let remaining = minutes - hours * 60.0;
        format!("{}h {}m", hours as u64, format_number(remaining))
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_number(value: f64) -> String {
    let text = format!("{:.2}", round_hundredths(value));
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn lesson_time_suffix(duration: f64) -> String {
    if duration > 0.0 {
        format!(" ({})", format_time(duration))
    } else {
        String::new()
    }
}

fn status_icon(is_complete: bool) -> &'static str {
    if is_complete {
        "✅"
    } else {
        "⏳"
    }
}

/// Full course report: course level numbers followed by every section.
pub fn format_report(course: &Course, daily_target_minutes: u32) -> String {
    let stats = course_stats(course);
    let days_to_complete = if stats.remaining_time > 0.0 {
        (stats.remaining_time / f64::from(daily_target_minutes.max(1))).ceil() as u64
    } else {
        0
    };

    let mut text = String::new();
    text.push_str("Course Analysis Report\n");
    text.push_str("========================\n\n");
    text.push_str(&format!("Total Sections: {}\n", stats.sections));
    text.push_str(&format!("Total Lessons: {}\n", stats.total_lessons));
    text.push_str(&format!("Completed Lessons: {}\n", stats.completed_lessons));
    text.push_str(&format!("Timed Lessons: {}\n", stats.timed_lessons));
    text.push_str(&format!("Total Time: {}\n", format_time(stats.total_time.round())));
    text.push_str(&format!("Completed Time: {}\n", format_time(stats.completed_time.round())));
    text.push_str(&format!("Remaining Time: {}\n", format_time(stats.remaining_time.round())));
    text.push_str(&format!("Progress: {}%\n", stats.progress_percent));
    text.push_str(&format!("Daily Target: {} minutes\n", daily_target_minutes));
    text.push_str(&format!("Estimated Days to Complete: {}\n", days_to_complete));
    text.push_str(&format!("Lessons Without Timing: {}\n\n", stats.untimed_lessons));
    text.push_str("Section Details:\n");
    text.push_str("----------------\n");

    for (index, section) in course.sections.iter().enumerate() {
        let section_stats = section_stats(section);
        let progress_info = if section_stats.completed_lessons > 0 {
            format!(
                " ({}/{} completed - {}%)",
                section_stats.completed_lessons, section_stats.lessons, section_stats.progress_percent
            )
        } else {
            String::new()
        };

        text.push_str(&format!("\n{}. {}{}\n", index + 1, section.title, progress_info));
        text.push_str(&format!(
            "   Total Lessons: {} ({} timed)\n",
            section_stats.lessons, section_stats.timed_lessons
        ));
        text.push_str(&format!("   Total Time: {}\n", section_time(section)));
        if section_stats.completed_time > 0.0 {
            text.push_str(&format!(
                "   Completed Time: {}\n",
                format_time(section_stats.completed_time)
            ));
        }
        if section_stats.remaining_time > 0.0 {
            text.push_str(&format!(
                "   Remaining Time: {}\n",
                format_time(section_stats.remaining_time)
            ));
        }
        text.push_str("   Lessons:\n");
        for (lesson_index, lesson) in section.lessons.iter().enumerate() {
            text.push_str(&format!(
                "   {} {}. {}{}\n",
                status_icon(lesson.is_complete),
                lesson_index + 1,
                lesson.title,
                lesson_time_suffix(lesson.duration)
            ));
        }
        text.push('\n');
    }

    text
}

fn section_time(section: &Section) -> String {
    if section.actual_time > 0.0 {
        format_time(section.actual_time)
    } else {
        "No timing info".to_string()
    }
}

/// Detailed report for a single section.
pub fn format_section_report(section: &Section) -> String {
    let stats = section_stats(section);

    let mut text = String::new();
    text.push_str(&format!("Section: {}\n", section.title));
    text.push_str("==========================================\n");
    text.push_str(&format!("Total Lessons: {}\n", stats.lessons));
    text.push_str(&format!("Timed Lessons: {}\n", stats.timed_lessons));
    text.push_str(&format!("Completed: {}/{}\n", stats.completed_lessons, stats.lessons));
    text.push_str(&format!("Total Time: {}\n", section_time(section)));
    if stats.completed_time > 0.0 {
        text.push_str(&format!("Completed Time: {}\n", format_time(stats.completed_time)));
    }
    if stats.remaining_time > 0.0 {
        text.push_str(&format!("Remaining Time: {}\n", format_time(stats.remaining_time)));
    }
    text.push_str(&format!("Progress: {}%\n\n", stats.progress_percent));
    text.push_str("Lesson Details:\n");
    text.push_str("---------------\n");

    for (index, lesson) in section.lessons.iter().enumerate() {
        text.push_str(&format!(
            "{} {}. {}{}\n",
            status_icon(lesson.is_complete),
            index + 1,
            lesson.title,
            lesson_time_suffix(lesson.duration)
        ));
    }

    text
}

/// Lesson titles of one section, completed ones ticked.
pub fn format_section_titles(section: &Section) -> String {
    let heading = format!("{} - Lesson Titles:", section.title);
    // 下划线长度按字符数计算
    let underline = "=".repeat(section.title.chars().count() + 18);

    let mut text = format!("{}\n{}\n", heading, underline);
    for (index, lesson) in section.lessons.iter().enumerate() {
        let status = if lesson.is_complete { "✅ " } else { "" };
        text.push_str(&format!("{}{}. {}\n", status, index + 1, lesson.title));
    }

    text
}

/// Checklist of today's lessons grouped by section.
pub fn format_today_plan(plan: &TodayPlan, date: NaiveDate) -> String {
    let mut text = String::new();
    text.push_str(&format!("📚 Today's Study Plan - {}\n", date.format("%Y-%m-%d")));
    text.push_str(&format!("📖 Lessons to Complete: {}\n\n", plan.lessons.len()));
    text.push_str("Lesson List:\n");
    text.push_str("-----------\n");

    let mut current_section: Option<&str> = None;
    for (index, planned) in plan.lessons.iter().enumerate() {
        if current_section != Some(planned.section_title.as_str()) {
            current_section = Some(planned.section_title.as_str());
            text.push_str(&format!("\n📁 {}\n", planned.section_title));
        }

        let time_info = if planned.lesson.duration > 0.0 {
            format!(" ({})", format_time(planned.lesson.duration.round()))
        } else if let Some(estimate) = planned.estimated_duration {
            format!(" (~{} min)", format_number(estimate))
        } else {
            String::new()
        };
        let exceeds_note = if planned.exceeds_target {
            " 🔥 Exceeds daily target"
        } else {
            ""
        };

        text.push_str(&format!(
            "- [ ] {}. {}{}{}\n",
            index + 1,
            planned.lesson.title,
            time_info,
            exceeds_note
        ));
    }

    text
}

/// One line confirmation shown after a successful analysis.
pub fn format_summary(course: &Course) -> String {
    let stats = course_stats(course);

    let timing_info = if stats.untimed_lessons > 0 {
        format!(" ({} lessons without timing)", stats.untimed_lessons)
    } else {
        String::new()
    };
    let progress_info = if stats.completed_lessons > 0 {
        format!(
            " • {} completed ({}%)",
            stats.completed_lessons, stats.progress_percent
        )
    } else {
        String::new()
    };

    format!(
        "Found {} sections with {} lessons{}{}!",
        stats.sections, stats.total_lessons, timing_info, progress_info
    )
}

/// Message confirming a today's plan copy.
pub fn format_plan_copied(plan: &TodayPlan) -> String {
    format!(
        "Copied {} lessons for today ({} min)",
        plan.lessons.len(),
        plan.total_time.round()
    )
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn format_course_block(course: &Course, stats: &CourseStats) -> String {
    let mut text = String::new();

    let title = course.info.course_title.as_deref().unwrap_or("Course Overview");
    text.push_str(&format!("📊 {}\n", title));
    if let Some(instructor) = course.info.instructor.as_deref() {
        text.push_str(&format!("Instructor: {}\n", instructor));
    }
    text.push('\n');

    text.push_str(&format!("Sections: {}\n", stats.sections));
    text.push_str(&format!("Lessons: {}\n", stats.total_lessons));
    text.push_str(&format!("Completed: {}\n", stats.completed_lessons));
    text.push_str(&format!("Timed: {}\n", stats.timed_lessons));
    text.push_str(&format!("Total Time: {}\n", format_time(stats.total_time.round())));
    text.push_str(&format!("Completed Time: {}\n", format_time(stats.completed_time.round())));
    text.push_str(&format!("Remaining Time: {}\n", format_time(stats.remaining_time.round())));
    text.push_str(&format!(
        "Progress: {} {}%\n",
        progress_bar(stats.progress_percent),
        stats.progress_percent
    ));

    text
}

/// Interactive panel rendered as text: stats, pacing and section overview.
pub fn format_dashboard(course: &Course, daily_target_minutes: u32, today: NaiveDate) -> String {
    let stats = course_stats(course);
    let projection = projection(course, daily_target_minutes, today);

    let mut text = format_course_block(course, &stats);

    text.push_str(&format!("\n🎯 Daily Target: {} min\n", daily_target_minutes));
    match projection.completion_date {
        CompletionDate::AlreadyComplete => {
            text.push_str("Days to Complete: 0\n");
            text.push_str("Daily Needed: 0 min\n");
            text.push_str("Weekly Hours: 0h\n");
            text.push_str("Completion Date: Complete!\n");
        }
        CompletionDate::On(date) => {
            text.push_str(&format!("Days to Complete: {}\n", projection.days_to_complete));
            text.push_str(&format!("Daily Needed: {} min\n", projection.daily_needed));
            text.push_str(&format!("Weekly Hours: {:.1}h\n", projection.weekly_hours));
            text.push_str(&format!("Completion Date: {}\n", date.format("%Y-%m-%d")));
        }
    }

    if !course.sections.is_empty() {
        text.push_str("\nSections:\n");
    }
    for (index, section) in course.sections.iter().enumerate() {
        let section_stats = section_stats(section);
        let time_text = if section_stats.total_time > 0.0 {
            format_time(section_stats.total_time.round())
        } else {
            "No timing info".to_string()
        };
        let progress_text = if section_stats.completed_lessons > 0 {
            format!(
                " • {}/{} completed",
                section_stats.completed_lessons, section_stats.lessons
            )
        } else {
            String::new()
        };

        text.push_str(&format!("{}. {}\n", index + 1, section.title));
        text.push_str(&format!(
            "   {} lessons ({} timed) • {}{}\n",
            section_stats.lessons, section_stats.timed_lessons, time_text, progress_text
        ));

        if section_stats.completed_time > 0.0 || section_stats.remaining_time > 0.0 {
            let completed_text = if section_stats.completed_time > 0.0 {
                format!(" • ✅ {}", format_time(section_stats.completed_time.round()))
            } else {
                String::new()
            };
            let remaining_text = if section_stats.remaining_time > 0.0 {
                format!(" • ⏳ {}", format_time(section_stats.remaining_time.round()))
            } else {
                String::new()
            };
            text.push_str(&format!(
                "   {}% complete{}{}\n",
                section_stats.progress_percent, completed_text, remaining_text
            ));
        }
    }

    text
}
