//! 配置管理
//!
//! 支持配置文件（TOML 或 JSON）、环境变量覆盖和默认值。
//! 默认值对应 Teachable 课程页面的标记。

use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{CourseTimerError, CourseTimerResult};
use crate::parsers::html::completion::{
    MarkerDetector, DEFAULT_DESCENDANT_MARKER, DEFAULT_SELF_MARKER,
};

/// 配置常量
pub mod constants {
    pub const DEFAULT_DAILY_TARGET: u32 = 30;
    pub const MIN_DAILY_TARGET: u32 = 1;
    pub const MAX_DAILY_TARGET: u32 = 1440;

    pub const DEFAULT_ORIGIN_PATTERN: &str = "programmingadvices.com/courses";
    pub const DEFAULT_PREFERENCES_PATH: &str = "~/.config/course-timer/preferences.toml";

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "course-timer.toml",
        ".course-timer.toml",
        "~/.config/course-timer/config.toml",
    ];
}

/// Page markers and behaviour knobs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseTimerConfig {
    /// Fragments of `host + path` that identify a course page
    pub origin_patterns: Vec<String>,

    pub section_selector: String,
    pub section_title_selector: String,
    pub lesson_selector: String,
    pub lesson_name_selector: String,
    pub lesson_id_attr: String,
    pub lesson_url_attr: String,

    /// Selector matched against the lesson node itself; empty disables it
    pub completion_self_selector: String,
    /// Selector for descendants that mark the lesson complete; empty disables it
    pub completion_descendant_selector: String,

    pub course_title_selectors: Vec<String>,
    pub instructor_selectors: Vec<String>,
    pub course_page_markers: Vec<String>,

    pub default_daily_target: u32,
    pub preferences_path: String,
}

impl Default for CourseTimerConfig {
    fn default() -> Self {
        Self {
            origin_patterns: vec![constants::DEFAULT_ORIGIN_PATTERN.to_string()],

            section_selector: ".course-section".to_string(),
            section_title_selector: ".section-title".to_string(),
            lesson_selector: ".section-item".to_string(),
            lesson_name_selector: ".lecture-name".to_string(),
            lesson_id_attr: "data-lecture-id".to_string(),
            lesson_url_attr: "data-lecture-url".to_string(),

            completion_self_selector: DEFAULT_SELF_MARKER.to_string(),
            completion_descendant_selector: DEFAULT_DESCENDANT_MARKER.to_string(),

            course_title_selectors: vec![
                "h1.course-sidebar-header-title".to_string(),
                ".course-title".to_string(),
                "h1".to_string(),
            ],
            instructor_selectors: vec![
                ".instructor-name".to_string(),
                ".author-name".to_string(),
                ".teacher-name".to_string(),
            ],
            course_page_markers: vec![".lecture-sidebar".to_string(), ".course-section".to_string()],

            default_daily_target: constants::DEFAULT_DAILY_TARGET,
            preferences_path: constants::DEFAULT_PREFERENCES_PATH.to_string(),
        }
    }
}

/// Selectors compiled from a [`CourseTimerConfig`].
#[derive(Debug, Clone)]
pub struct PageMarkers {
    pub section: Selector,
    pub section_title: Selector,
    pub lesson: Selector,
    pub lesson_name: Selector,
    pub lesson_id_attr: String,
    pub lesson_url_attr: String,
    pub course_title: Selector,
    pub instructor: Selector,
    pub course_page: Selector,
}

#[cfg(test)]
impl Default for PageMarkers {
    fn default() -> Self {
        CourseTimerConfig::default()
            .page_markers()
            .expect("default selectors are valid")
    }
}

fn selector(field: &str, value: &str) -> CourseTimerResult<Selector> {
    Selector::parse(value)
        .map_err(|e| CourseTimerError::Config(format!("invalid selector for {field}: '{value}': {e}")))
}

/// 多个候选选择器合并成一个选择器组，按文档顺序取第一个匹配
fn selector_list(field: &str, values: &[String]) -> CourseTimerResult<Selector> {
    let values: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();

    if values.is_empty() {
        return Err(CourseTimerError::Config(format!("{field} cannot be empty")));
    }

    selector(field, &values.join(", "))
}

fn optional_selector(field: &str, value: &str) -> CourseTimerResult<Option<Selector>> {
    match value.trim() {
        "" => Ok(None),
        value => selector(field, value).map(Some),
    }
}

impl CourseTimerConfig {
    /// Loads the configuration: explicit path, else the first existing search
    /// path, else defaults. Environment overrides are applied last.
    pub fn load(explicit_path: Option<&str>) -> CourseTimerResult<Self> {
        Self::load_dotenv();

        let env_path = {
            use crate::env::{course, EnvVar};
            course::ConfigPath::get().ok()
        };

        let mut config = match explicit_path.map(str::to_string).or(env_path) {
            Some(path) => {
                let expanded_path = shellexpand::tilde(&path).to_string();
                tracing::info!("加载配置文件: {}", expanded_path);
                Self::load_from_file(&expanded_path)?
            }
            None => Self::load_from_search_paths()?,
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn load_from_search_paths() -> CourseTimerResult<Self> {
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(&expanded_path);
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file(path: &str) -> CourseTimerResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CourseTimerError::Config(format!("读取配置文件失败 {}: {}", path, e)))?;

        if path.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// 加载 .env 文件
    fn load_dotenv() {
        let env_files = [".env.local", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::debug!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        use crate::env::{course, EnvVar};

        if let Ok(patterns) = course::OriginPattern::get() {
            self.origin_patterns = patterns;
        }

        if let Ok(path) = course::PreferencesPath::get() {
            self.preferences_path = path;
        }

        if let Ok(target) = course::DailyTarget::get() {
            self.default_daily_target = target;
        }
    }

    /// 验证配置
    pub fn validate(&self) -> CourseTimerResult<()> {
        if self.origin_patterns.iter().all(|pattern| pattern.trim().is_empty()) {
            return Err(CourseTimerError::Config(
                "at least one origin pattern is required".to_string(),
            ));
        }

        if self.lesson_id_attr.trim().is_empty() || self.lesson_url_attr.trim().is_empty() {
            return Err(CourseTimerError::Config(
                "lesson attribute names cannot be empty".to_string(),
            ));
        }

        if !(constants::MIN_DAILY_TARGET..=constants::MAX_DAILY_TARGET)
            .contains(&self.default_daily_target)
        {
            return Err(CourseTimerError::Config(format!(
                "default daily target must be between {} and {}",
                constants::MIN_DAILY_TARGET,
                constants::MAX_DAILY_TARGET
            )));
        }

        self.page_markers()?;
        self.completion_detector()?;

        Ok(())
    }

    pub fn page_markers(&self) -> CourseTimerResult<PageMarkers> {
        Ok(PageMarkers {
            section: selector("section_selector", &self.section_selector)?,
            section_title: selector("section_title_selector", &self.section_title_selector)?,
            lesson: selector("lesson_selector", &self.lesson_selector)?,
            lesson_name: selector("lesson_name_selector", &self.lesson_name_selector)?,
            lesson_id_attr: self.lesson_id_attr.clone(),
            lesson_url_attr: self.lesson_url_attr.clone(),
            course_title: selector_list("course_title_selectors", &self.course_title_selectors)?,
            instructor: selector_list("instructor_selectors", &self.instructor_selectors)?,
            course_page: selector_list("course_page_markers", &self.course_page_markers)?,
        })
    }

    pub fn completion_detector(&self) -> CourseTimerResult<MarkerDetector> {
        Ok(MarkerDetector {
            self_marker: optional_selector("completion_self_selector", &self.completion_self_selector)?,
            descendant_marker: optional_selector(
                "completion_descendant_selector",
                &self.completion_descendant_selector,
            )?,
        })
    }

    /// 生成示例配置文件
    pub fn generate_example_config(path: &str) -> CourseTimerResult<()> {
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| CourseTimerError::Config(format!("序列化配置失败: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| CourseTimerError::Config(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }
}
