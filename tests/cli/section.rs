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
    fn section_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("section")
            .arg(fixture_path("course.html"))
            .arg("1")
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&out.stdout);

        assert!(out.status.success());
        assert!(stdout.starts_with(
            "Section: Getting Started\n==========================================\nTotal Lessons: 3\n"
        ));
        assert!(stdout.contains("Completed: 2/3\n"));
        assert!(stdout.contains("Lesson Details:\n---------------\n"));
    }

    #[test]
    fn section_titles() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .args(["section", "--titles"])
            .arg(fixture_path("course.html"))
            .arg("2")
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!(
                "Variables and Types - Lesson Titles:\n{}\n1. Variables\n2. Data Types\n3. Quiz\n",
                "=".repeat(37)
            )
        );
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
    fn section_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("section")
            .arg(fixture_path("course.html"))
            .arg("9")
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&out.stderr), "Section 9 does not exist\n");
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn section_zero() {
        let dir = tempfile::tempdir().unwrap();
        let out = course_timer(dir.path())
            .arg("section")
            .arg(fixture_path("course.html"))
            .arg("0")
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&out.stderr), "Section 0 does not exist\n");
    }
}
