//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use course_timer::core::check_page_location;

    fn patterns() -> Vec<String> {
        vec!["programmingadvices.com/courses".to_string()]
    }

    #[test]
    fn course_page() {
        let url = check_page_location(
            "https://programmingadvices.com/courses/1234567/lectures/100",
            &patterns(),
        )
        .unwrap();

        assert_eq!(url.host_str(), Some("programmingadvices.com"));
    }

    #[test]
    fn subdomain_and_query() {
        assert!(check_page_location(
            "https://www.programmingadvices.com/courses/enrolled/1234567?tab=curriculum",
            &patterns()
        )
        .is_ok());
    }

    #[test]
    fn any_of_several_patterns() {
        let patterns = vec![
            "school.example.com/learn".to_string(),
            "programmingadvices.com/courses".to_string(),
        ];

        assert!(check_page_location("https://school.example.com/learn/42", &patterns).is_ok());
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
    use course_timer::core::{check_page_location, WRONG_PAGE_MESSAGE};
    use course_timer::CourseTimerError;

    fn patterns() -> Vec<String> {
        vec!["programmingadvices.com/courses".to_string()]
    }

    #[test]
    fn other_host() {
        let result = check_page_location("https://example.com/courses/1", &patterns());

        assert_eq!(
            result.unwrap_err(),
            CourseTimerError::WrongPage(WRONG_PAGE_MESSAGE.to_string())
        );
    }

    #[test]
    fn same_host_other_path() {
        assert!(check_page_location("https://programmingadvices.com/p/about", &patterns()).is_err());
    }

    #[test]
    fn pattern_only_in_query() {
        assert!(check_page_location(
            "https://example.com/?next=programmingadvices.com/courses",
            &patterns()
        )
        .is_err());
    }

    #[test]
    fn not_a_url() {
        assert!(check_page_location("programmingadvices.com/courses", &patterns()).is_err());
    }
}
