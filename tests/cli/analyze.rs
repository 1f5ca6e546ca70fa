//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;
    use std::io::Write;
    use std::process::Stdio;

    use super::super::{course_timer, fixture_path};

    #[test]
    fn summary_and_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("analyze")
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "Found 3 sections with 8 lessons (2 lessons without timing) • 2 completed (18%)!\n"
        );
        assert!(stdout.starts_with("📊 C++ Programming Level 1\nInstructor: Mohammed Abu-Hadhoud\n"));
        assert!(stdout.contains("Total Time: 1h 26m\n"));
        assert!(stdout.contains("Days to Complete: 3\n"));
        assert!(stdout.contains("1. Getting Started\n   3 lessons (2 timed) • 16 min • 2/3 completed\n"));
    }

    #[test]
    fn json_export() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .args(["analyze", "--json"])
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();

        assert!(out.status.success());
        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(json["totalLessons"], 8);
        assert_eq!(json["timedLessons"], 6);
        assert_eq!(json["totalTimeMinutes"], 85.5);
        assert_eq!(json["sections"][0]["lessons"][1]["fullTitle"], "Course Setup (12:30)");
        assert_eq!(json["sections"][0]["lessons"][1]["isComplete"], true);
        assert_eq!(json["sections"][1]["estimatedTime"], 30.0);
    }

    #[test]
    fn read_from_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let mut child = course_timer(dir.path())
            .args(["analyze", "--json", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        child
            .stdin
            .take()
            .unwrap()
            .write_all(&fs::read(fixture_path("course.html")).unwrap())
            .unwrap();
        let out = child.wait_with_output().unwrap();

        assert!(out.status.success());
        let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(json["sections"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn report() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("report")
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert!(stdout.starts_with("Course Analysis Report\n========================\n\n"));
        assert!(stdout.contains("Completed Lessons: 2\n"));
        assert!(stdout.contains("Lessons Without Timing: 2\n"));
        assert!(stdout.contains("\n1. Getting Started (2/3 completed - 100%)\n"));
        assert!(stdout.contains("   ✅ 2. Course Setup (12.5 min)\n"));
        assert!(stdout.contains("\n3. Control Flow\n   Total Lessons: 2 (2 timed)\n   Total Time: 45 min\n"));
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
    use super::super::{course_timer, fixture_path};

    #[test]
    fn wrong_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .args(["analyze", "--url", "https://example.com/"])
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(2));
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "Failed to analyze course: Please navigate to a Teachable course page first\n"
        );
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn no_sections() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("analyze")
            .arg(fixture_path("login.html"))
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(3));
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "Failed to analyze course: No course sections found. Make sure you're on a Teachable course page.\n"
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .args(["analyze", "does-not-exist.html"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "Invalid input: File not found: does-not-exist.html\n"
        );
    }

    #[test]
    fn origin_pattern_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .env("COURSE_TIMER_ORIGIN_PATTERN", "school.example.com/learn")
            .arg("analyze")
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(2));
    }
}
