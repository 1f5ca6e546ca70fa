//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use super::super::{course_timer, fixture_path};

    #[test]
    fn plan_for_default_target() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("today")
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert!(stdout.starts_with("📚 Today's Study Plan - "));
        assert!(stdout.ends_with(
            "📖 Lessons to Complete: 3\n\
             \n\
             Lesson List:\n\
             -----------\n\
             \n\
             📁 Getting Started\n\
             - [ ] 1. Reading: Resources (~5 min)\n\
             \n\
             📁 Variables and Types\n\
             - [ ] 2. Variables (10 min)\n\
             - [ ] 3. Data Types (15 min)\n"
        ));
    }

    #[test]
    fn plan_uses_stored_target() {
        let dir = tempfile::tempdir().unwrap();
        let set = course_timer(dir.path()).args(["target", "3"]).output().unwrap();
        assert!(set.status.success());

        let out = course_timer(dir.path())
            .arg("today")
            .arg(fixture_path("course.html"))
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert!(stdout.contains("📖 Lessons to Complete: 1\n"));
        assert!(stdout.contains("- [ ] 1. Reading: Resources (~5 min)\n"));
    }

    #[test]
    fn lesson_longer_than_target() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .env("COURSE_TIMER_DAILY_TARGET", "4")
            .arg("today")
            .arg(fixture_path("complete_intro.html"))
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert!(stdout.contains("- [ ] 1. Variables (10 min) 🔥 Exceeds daily target\n"));
        assert!(stdout.contains("📖 Lessons to Complete: 1\n"));
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
    fn nothing_left_to_study() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("today")
            .arg(fixture_path("finished.html"))
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "No incomplete lessons found or course is already complete!\n"
        );
    }
}
