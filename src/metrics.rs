//! 学习进度统计
//!
//! 根据课程模型和每日目标计算：完成情况、进度百分比、剩余时间预测，
//! 以及“今日课程”计划。

use std::ops::ControlFlow;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::model::{Course, Lesson, Section};

/// Minutes charged against the daily budget for a lesson without a duration.
pub const UNTIMED_LESSON_ESTIMATE: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedStats {
    pub completed_lessons: usize,
    pub completed_time: f64,
}

/// Sums lesson count and duration over every completed lesson.
pub fn completed_stats(course: &Course) -> CompletedStats {
    course
        .sections
        .iter()
        .map(|section| completed_in(&section.lessons))
        .fold(CompletedStats::default(), |acc, stats| CompletedStats {
            completed_lessons: acc.completed_lessons + stats.completed_lessons,
            completed_time: acc.completed_time + stats.completed_time,
        })
}

fn completed_in(lessons: &[Lesson]) -> CompletedStats {
    lessons
        .iter()
        .filter(|lesson| lesson.is_complete)
        .fold(CompletedStats::default(), |acc, lesson| CompletedStats {
            completed_lessons: acc.completed_lessons + 1,
            completed_time: acc.completed_time + lesson.duration,
        })
}

/// `round(completed / total * 100)`, or `0` when there is nothing to measure.
pub fn progress_percent(total: f64, completed: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }

    ((completed / total) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Course level numbers shown on the dashboard and in the full report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub sections: usize,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    pub timed_lessons: usize,
    pub untimed_lessons: usize,
    pub total_time: f64,
    pub completed_time: f64,
    /// Never negative
    pub remaining_time: f64,
    pub progress_percent: u32,
}

pub fn course_stats(course: &Course) -> CourseStats {
    let completed = completed_stats(course);

    CourseStats {
        sections: course.sections.len(),
        total_lessons: course.total_lessons,
        completed_lessons: completed.completed_lessons,
        timed_lessons: course.timed_lessons,
        untimed_lessons: course.untimed_lessons(),
        total_time: course.total_time_minutes,
        completed_time: completed.completed_time,
        remaining_time: (course.total_time_minutes - completed.completed_time).max(0.0),
        progress_percent: progress_percent(course.total_time_minutes, completed.completed_time),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    pub lessons: usize,
    pub completed_lessons: usize,
    pub timed_lessons: usize,
    pub total_time: f64,
    pub completed_time: f64,
    /// Never negative
    pub remaining_time: f64,
    pub progress_percent: u32,
}

pub fn section_stats(section: &Section) -> SectionStats {
    let completed = completed_in(&section.lessons);

    SectionStats {
        lessons: section.lessons.len(),
        completed_lessons: completed.completed_lessons,
        timed_lessons: section.timed_lessons(),
        total_time: section.actual_time,
        completed_time: completed.completed_time,
        remaining_time: (section.actual_time - completed.completed_time).max(0.0),
        progress_percent: progress_percent(section.actual_time, completed.completed_time),
    }
}

/// When the remaining material will be done at the current pace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "date")]
pub enum CompletionDate {
    AlreadyComplete,
    On(NaiveDate),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub days_to_complete: u64,
    /// Minutes per day needed to finish in `days_to_complete` days
    pub daily_needed: u64,
    pub weekly_hours: f64,
    pub completion_date: CompletionDate,
}

impl Projection {
    pub fn is_complete(&self) -> bool {
        self.completion_date == CompletionDate::AlreadyComplete
    }
}

/// Projects the finish date for the remaining timed material.
pub fn projection(course: &Course, daily_target_minutes: u32, today: NaiveDate) -> Projection {
    let completed = completed_stats(course);
    let remaining = (course.total_time_minutes - completed.completed_time).max(0.0);

    if remaining <= 0.0 {
        return Projection {
            days_to_complete: 0,
            daily_needed: 0,
            weekly_hours: 0.0,
            completion_date: CompletionDate::AlreadyComplete,
        };
    }

    let daily_target = f64::from(daily_target_minutes.max(1));
    let days_to_complete = (remaining / daily_target).ceil() as u64;
    let daily_needed = (remaining / days_to_complete as f64).ceil() as u64;
    let completion_date = today
        .checked_add_days(Days::new(days_to_complete))
        .map_or(CompletionDate::On(NaiveDate::MAX), CompletionDate::On);

    Projection {
        days_to_complete,
        daily_needed,
        weekly_hours: daily_target * 7.0 / 60.0,
        completion_date,
    }
}

/// A lesson picked for today, with the section it came from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedLesson {
    pub lesson: Lesson,
    pub section_title: String,
    /// Set for untimed lessons, which are charged a fixed estimate
    pub estimated_duration: Option<f64>,
    /// Set when the lesson alone overshoots the daily target
    pub exceeds_target: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayPlan {
    pub lessons: Vec<PlannedLesson>,
    /// Minutes charged against the target, estimates included
    pub total_time: f64,
    pub target_time: u32,
    pub time_remaining: f64,
}

impl TodayPlan {
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

struct PlanState {
    lessons: Vec<PlannedLesson>,
    budget: f64,
}

/// One step of the greedy selection. `Break` ends the scan over the whole
/// course, not only the current section.
fn plan_step(mut state: PlanState, section: &Section, lesson: &Lesson) -> ControlFlow<PlanState, PlanState> {
    if lesson.is_complete {
        return ControlFlow::Continue(state);
    }

    // 没有剩余预算时不再选课，包括目标为 0 的情况
    if state.budget <= 0.0 {
        return ControlFlow::Break(state);
    }

    let mut planned = PlannedLesson {
        lesson: lesson.clone(),
        section_title: section.title.clone(),
        estimated_duration: None,
        exceeds_target: false,
    };

    if !lesson.is_timed() {
        planned.estimated_duration = Some(UNTIMED_LESSON_ESTIMATE);
        state.budget -= UNTIMED_LESSON_ESTIMATE;
    } else if lesson.duration <= state.budget {
        state.budget -= lesson.duration;
    } else if state.lessons.is_empty() {
        // 计划为空时总是保留第一节课，即使超出目标
        planned.exceeds_target = true;
        state.budget -= lesson.duration;
    } else {
        return ControlFlow::Break(state);
    }

    state.lessons.push(planned);
    ControlFlow::Continue(state)
}

/// Greedily picks today's lessons in document order.
///
/// - nothing is planned once the budget is used up, so a zero target gives an
///   empty plan
/// - completed lessons are skipped
/// - untimed lessons are always taken and charged [`UNTIMED_LESSON_ESTIMATE`]
/// - timed lessons are taken while they fit the remaining budget
/// - a lesson that doesn't fit is still taken when the plan is empty (flagged
///   `exceeds_target`), otherwise the scan stops for good
pub fn select_today_plan(course: &Course, daily_target_minutes: u32) -> TodayPlan {
    let initial = PlanState {
        lessons: Vec::new(),
        budget: f64::from(daily_target_minutes),
    };

    let state = match course
        .lessons()
        .try_fold(initial, |state, (section, lesson)| plan_step(state, section, lesson))
    {
        ControlFlow::Continue(state) | ControlFlow::Break(state) => state,
    };

    TodayPlan {
        total_time: f64::from(daily_target_minutes) - state.budget,
        target_time: daily_target_minutes,
        time_remaining: state.budget.max(0.0),
        lessons: state.lessons,
    }
}
