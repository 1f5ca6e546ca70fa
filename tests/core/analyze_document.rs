//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use course_timer::core::analyze_document;
    use course_timer::CourseTimerConfig;

    use super::super::fixture;

    #[test]
    fn extracts_sections_and_totals() {
        let course =
            analyze_document(&fixture("course.html"), None, None, &CourseTimerConfig::default())
                .unwrap();

        let titles: Vec<&str> = course.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Getting Started", "Variables and Types", "Control Flow"]);
        assert_eq!(course.total_lessons, 8);
        assert_eq!(course.timed_lessons, 6);
        assert_eq!(course.total_time_minutes, 85.5);
        assert_eq!(
            course.total_lessons,
            course.sections.iter().map(|s| s.lessons.len()).sum::<usize>()
        );
    }

    #[test]
    fn reads_page_location_and_course_info() {
        let course =
            analyze_document(&fixture("course.html"), None, None, &CourseTimerConfig::default())
                .unwrap();

        assert_eq!(
            course.page_url,
            "https://programmingadvices.com/courses/1234567/lectures/100"
        );
        assert_eq!(course.info.course_title.as_deref(), Some("C++ Programming Level 1"));
        assert_eq!(course.info.instructor.as_deref(), Some("Mohammed Abu-Hadhoud"));
        assert_eq!(course.info.platform, "teachable");
    }

    #[test]
    fn detects_completion_markers() {
        let course =
            analyze_document(&fixture("course.html"), None, None, &CourseTimerConfig::default())
                .unwrap();
        let first = &course.sections[0];

        // class on the item, then a check icon inside it
        assert!(first.lessons[0].is_complete);
        assert!(first.lessons[1].is_complete);
        assert!(!first.lessons[2].is_complete);
        assert_eq!(first.completed_lessons(), 2);
    }

    #[test]
    fn parses_lesson_details() {
        let course =
            analyze_document(&fixture("course.html"), None, None, &CourseTimerConfig::default())
                .unwrap();
        let setup = &course.sections[0].lessons[1];

        assert_eq!(setup.title, "Course Setup");
        assert_eq!(setup.full_title, "Course Setup (12:30)");
        assert_eq!(setup.duration, 12.5);
        assert_eq!(setup.id.as_deref(), Some("101"));
        assert_eq!(setup.url.as_deref(), Some("/courses/1234567/lectures/101"));

        let quiz = &course.sections[1].lessons[2];
        assert_eq!(quiz.duration, 0.0);
        assert_eq!(quiz.url, None);
        assert_eq!(course.sections[1].estimated_time, 30.0);
    }

    #[test]
    fn explicit_location_wins() {
        let course = analyze_document(
            &fixture("course.html"),
            Some("utf-8"),
            Some("https://programmingadvices.com/courses/1234567/lectures/999"),
            &CourseTimerConfig::default(),
        )
        .unwrap();

        assert!(course.page_url.ends_with("/999"));
    }

    #[test]
    fn custom_markers_from_config() {
        let html = br#"<link rel="canonical" href="https://school.example.com/learn/1">
            <section class="chapter"><h2>Chapter 1</h2>
              <div class="lesson done"><b>Part A (1:30)</b></div>
              <div class="lesson"><b>Part B (2:00)</b></div>
            </section>"#;
        let config: CourseTimerConfig = toml::from_str(
            r#"
            origin_patterns = ["school.example.com/learn"]
            section_selector = "section.chapter"
            section_title_selector = "h2"
            lesson_selector = ".lesson"
            lesson_name_selector = "b"
            completion_self_selector = ".done"
            "#,
        )
        .unwrap();

        let course = analyze_document(html, None, None, &config).unwrap();
        assert_eq!(course.sections[0].title, "Chapter 1");
        assert_eq!(course.total_time_minutes, 3.5);
        assert!(course.sections[0].lessons[0].is_complete);
        assert!(!course.sections[0].lessons[1].is_complete);
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use course_timer::core::analyze_document;
    use course_timer::{CourseTimerConfig, CourseTimerError};

    use super::super::fixture;

    #[test]
    fn page_without_sections() {
        let result =
            analyze_document(&fixture("login.html"), None, None, &CourseTimerConfig::default());

        assert_eq!(
            result,
            Err(CourseTimerError::NoSectionsFound(
                "No course sections found. Make sure you're on a Teachable course page."
                    .to_string()
            ))
        );
    }

    #[test]
    fn page_from_another_site() {
        let result = analyze_document(
            &fixture("course.html"),
            None,
            Some("https://www.udemy.com/course/cpp"),
            &CourseTimerConfig::default(),
        );

        assert!(matches!(result, Err(CourseTimerError::WrongPage(_))));
    }

    #[test]
    fn unknown_encoding() {
        let result = analyze_document(
            &fixture("course.html"),
            Some("utf-99"),
            None,
            &CourseTimerConfig::default(),
        );

        assert!(matches!(result, Err(CourseTimerError::Input(_))));
    }

    #[test]
    fn empty_document() {
        let result = analyze_document(
            b"",
            None,
            Some("https://programmingadvices.com/courses/1"),
            &CourseTimerConfig::default(),
        );

        assert!(matches!(result, Err(CourseTimerError::NoSectionsFound(_))));
    }
}
