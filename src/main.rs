use std::path::Path;
use std::process;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use course_timer::clipboard::SystemClipboard;
use course_timer::config::CourseTimerConfig;
use course_timer::core::{
    load_page, print_error_message, print_info_message, print_success_message, read_input,
};
use course_timer::env::{core::LogLevel, generate_env_docs, EnvVar};
use course_timer::error::{CourseTimerError, CourseTimerResult};
use course_timer::session::StudySession;
use course_timer::storage::FilePreferenceStore;

/// Course Timer CLI.
#[derive(Parser)]
#[command(name = "course-timer")]
#[command(about = "Measure progress through a saved course curriculum page")]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PageArgs {
    /// Saved course page, or "-" for stdin
    input: String,

    /// Location the page was saved from (default: read from the document)
    #[arg(short, long)]
    url: Option<String>,

    /// Character encoding of the page (default: detected)
    #[arg(short, long)]
    encoding: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a course page and show the dashboard
    Analyze {
        #[command(flatten)]
        page: PageArgs,

        /// Print the extracted course as JSON
        #[arg(long)]
        json: bool,
    },

    /// Full course report
    Report {
        #[command(flatten)]
        page: PageArgs,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// Report for a single section
    Section {
        #[command(flatten)]
        page: PageArgs,

        /// Section number as shown in the report (1-based)
        number: usize,

        /// Only list the lesson titles
        #[arg(long)]
        titles: bool,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// Lessons to study today within the daily target
    Today {
        #[command(flatten)]
        page: PageArgs,

        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },

    /// Show or set the daily study target in minutes
    Target {
        /// New target; out of range values are clamped to 1-1440
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
    },

    /// List supported environment variables
    Env,

    /// Write an example configuration file
    InitConfig {
        /// Output path
        #[arg(default_value = "course-timer.toml")]
        path: String,
    },
}

fn init_logging() {
    let level = LogLevel::get().unwrap_or_else(|e| {
        eprintln!("{e}");
        "warn".to_string()
    });
    let level: tracing::Level = level.parse().unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_session(config: &CourseTimerConfig) -> CourseTimerResult<StudySession> {
    StudySession::new(
        config,
        Box::new(FilePreferenceStore::new(&config.preferences_path)),
    )
}

fn analyze(session: &mut StudySession, page: &PageArgs) -> CourseTimerResult<()> {
    let data = read_input(&page.input)?;
    let document = load_page(&data, page.encoding.as_deref())?;

    session.analyze(&document, page.url.as_deref())?;
    Ok(())
}

fn copied() {
    print_success_message("Copied to clipboard");
}

fn run(cli: Cli) -> CourseTimerResult<()> {
    let config = CourseTimerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { page, json } => {
            let mut session = open_session(&config)?;
            analyze(&mut session, &page)?;

            if json {
                print_info_message(&session.to_json()?);
            } else {
                print_success_message(&session.summary()?);
                print!("{}", session.dashboard(today())?);
            }
        }
        Commands::Report { page, copy } => {
            let mut session = open_session(&config)?;
            analyze(&mut session, &page)?;

            if copy {
                session.copy_report(&mut SystemClipboard::new())?;
                copied();
            } else {
                print!("{}", session.report()?);
            }
        }
        Commands::Section {
            page,
            number,
            titles,
            copy,
        } => {
            let mut session = open_session(&config)?;
            analyze(&mut session, &page)?;

            match (titles, copy) {
                (true, true) => {
                    session.copy_section_titles(&mut SystemClipboard::new(), number)?;
                    copied();
                }
                (false, true) => {
                    session.copy_section(&mut SystemClipboard::new(), number)?;
                    copied();
                }
                (true, false) => print!("{}", session.section_titles(number)?),
                (false, false) => print!("{}", session.section_report(number)?),
            }
        }
        Commands::Today { page, copy } => {
            let mut session = open_session(&config)?;
            analyze(&mut session, &page)?;

            if copy {
                let message = session.copy_today_plan(&mut SystemClipboard::new(), today())?;
                print_success_message(&message);
            } else {
                print!("{}", session.today_plan_text(today())?);
            }
        }
        Commands::Target { value } => {
            let mut session = open_session(&config)?;

            match value {
                Some(value) => {
                    let target = session.update_daily_target(&value);
                    print_info_message(&format!("Daily target set to {target}"));
                }
                None => print_info_message(&format!("Daily target: {}", session.daily_target())),
            }
        }
        Commands::Env => print!("{}", generate_env_docs()),
        Commands::InitConfig { path } => {
            if Path::new(&path).exists() {
                return Err(CourseTimerError::Config(format!("{path} already exists")));
            }
            CourseTimerConfig::generate_example_config(&path)?;
            print_info_message(&format!("Wrote example configuration to {path}"));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let is_analysis = matches!(
        cli.command,
        Commands::Analyze { .. }
            | Commands::Report { .. }
            | Commands::Section { .. }
            | Commands::Today { .. }
    );

    if let Err(error) = run(cli) {
        if error.is_user_facing() {
            match &error {
                CourseTimerError::WrongPage(_)
                | CourseTimerError::NoSectionsFound(_)
                | CourseTimerError::ExtractionFailure(_)
                    if is_analysis =>
                {
                    print_error_message(&format!("Failed to analyze course: {error}"))
                }
                _ => print_error_message(&error.to_string()),
            }
        }
        process::exit(error.exit_code());
    }
}
