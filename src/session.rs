//! 学习会话
//!
//! 会话持有当前分析得到的课程和每日目标，所有报告都从这里生成。
//! 再次分析会直接替换之前的课程（后写入者生效），失败时保留原有课程。

use chrono::NaiveDate;

use crate::clipboard::ClipboardSink;
use crate::config::{CourseTimerConfig, PageMarkers};
use crate::core::{check_page_location, resolve_page_url};
use crate::error::{log_error, CourseTimerError, CourseTimerResult};
use crate::extractor::extract_course;
use crate::formatter::{
    format_dashboard, format_plan_copied, format_report, format_section_report,
    format_section_titles, format_summary, format_today_plan,
};
use crate::metrics::{projection, select_today_plan, Projection, TodayPlan};
use crate::model::{Course, Section};
use crate::parsers::html::completion::{AnyOf, CompletionDetector};
use crate::parsers::html::query::HtmlPage;
use crate::storage::{load_daily_target, save_daily_target, DailyTarget, PreferenceStore};

pub struct StudySession {
    markers: PageMarkers,
    detector: AnyOf<HtmlPage>,
    origin_patterns: Vec<String>,
    store: Box<dyn PreferenceStore>,
    daily_target: DailyTarget,
    course: Option<Course>,
}

impl StudySession {
    /// Builds a session from `config`. The stored daily target wins over the
    /// configured default.
    pub fn new(config: &CourseTimerConfig, store: Box<dyn PreferenceStore>) -> CourseTimerResult<Self> {
        let mut detector = AnyOf::new();
        detector.register(Box::new(config.completion_detector()?));

        let fallback = DailyTarget::new(i64::from(config.default_daily_target));
        let daily_target = load_daily_target(store.as_ref(), fallback);

        Ok(StudySession {
            markers: config.page_markers()?,
            detector,
            origin_patterns: config.origin_patterns.clone(),
            store,
            daily_target,
            course: None,
        })
    }

    /// Adds another completion heuristic next to the configured one.
    pub fn register_detector(&mut self, detector: Box<dyn CompletionDetector<HtmlPage>>) {
        self.detector.register(detector);
    }

    /// Extracts the course from `page` and keeps it for later reports.
    ///
    /// `page_url` is the location the page was loaded from; when absent it is
    /// recovered from the document itself.
    pub fn analyze(&mut self, page: &HtmlPage, page_url: Option<&str>) -> CourseTimerResult<&Course> {
        let page_url = resolve_page_url(page, page_url).or_else(log_error)?;
        check_page_location(&page_url, &self.origin_patterns).or_else(log_error)?;

        let course =
            extract_course(page, &self.markers, &self.detector, &page_url).or_else(log_error)?;

        Ok(self.course.insert(course))
    }

    /// Replaces the held course, e.g. with one loaded from a JSON export.
    pub fn load_course(&mut self, course: Course) -> &Course {
        self.course.insert(course)
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    fn require_course(&self) -> CourseTimerResult<&Course> {
        self.course.as_ref().ok_or(CourseTimerError::NotAnalyzed)
    }

    pub fn daily_target(&self) -> DailyTarget {
        self.daily_target
    }

    /// Sets and persists the daily target. Storage failures are only logged.
    pub fn set_daily_target(&mut self, target: DailyTarget) {
        self.daily_target = target;
        save_daily_target(self.store.as_mut(), target);
    }

    /// Applies free-form user input as the new daily target.
    pub fn update_daily_target(&mut self, input: &str) -> DailyTarget {
        let target = DailyTarget::from_input(input);
        self.set_daily_target(target);
        target
    }

    pub fn summary(&self) -> CourseTimerResult<String> {
        Ok(format_summary(self.require_course()?))
    }

    pub fn report(&self) -> CourseTimerResult<String> {
        Ok(format_report(self.require_course()?, self.daily_target.minutes()))
    }

    pub fn dashboard(&self, today: NaiveDate) -> CourseTimerResult<String> {
        Ok(format_dashboard(
            self.require_course()?,
            self.daily_target.minutes(),
            today,
        ))
    }

    pub fn projection(&self, today: NaiveDate) -> CourseTimerResult<Projection> {
        Ok(projection(self.require_course()?, self.daily_target.minutes(), today))
    }

    /// Section by its 1-based position, as numbered in the reports.
    pub fn section(&self, number: usize) -> CourseTimerResult<&Section> {
        let course = self.require_course()?;

        number
            .checked_sub(1)
            .and_then(|index| course.sections.get(index))
            .ok_or(CourseTimerError::SectionOutOfRange(number))
    }

    pub fn section_report(&self, number: usize) -> CourseTimerResult<String> {
        Ok(format_section_report(self.section(number)?))
    }

    pub fn section_titles(&self, number: usize) -> CourseTimerResult<String> {
        Ok(format_section_titles(self.section(number)?))
    }

    /// Today's lessons; an empty plan is reported as [`CourseTimerError::NothingToStudy`].
    pub fn today_plan(&self) -> CourseTimerResult<TodayPlan> {
        let plan = select_today_plan(self.require_course()?, self.daily_target.minutes());

        if plan.is_empty() {
            return Err(CourseTimerError::NothingToStudy);
        }

        Ok(plan)
    }

    pub fn today_plan_text(&self, today: NaiveDate) -> CourseTimerResult<String> {
        Ok(format_today_plan(&self.today_plan()?, today))
    }

    /// The held course as pretty-printed JSON.
    pub fn to_json(&self) -> CourseTimerResult<String> {
        serde_json::to_string_pretty(self.require_course()?)
            .map_err(|e| CourseTimerError::ExtractionFailure(e.to_string()))
    }

    pub fn copy_report(&self, sink: &mut dyn ClipboardSink) -> CourseTimerResult<()> {
        sink.write(&self.report()?)
    }

    pub fn copy_section(&self, sink: &mut dyn ClipboardSink, number: usize) -> CourseTimerResult<()> {
        sink.write(&self.section_report(number)?)
    }

    pub fn copy_section_titles(
        &self,
        sink: &mut dyn ClipboardSink,
        number: usize,
    ) -> CourseTimerResult<()> {
        sink.write(&self.section_titles(number)?)
    }

    /// Copies today's plan and returns the confirmation message.
    pub fn copy_today_plan(
        &self,
        sink: &mut dyn ClipboardSink,
        today: NaiveDate,
    ) -> CourseTimerResult<String> {
        let plan = self.today_plan()?;
        sink.write(&format_today_plan(&plan, today))?;

        Ok(format_plan_copied(&plan))
    }
}
