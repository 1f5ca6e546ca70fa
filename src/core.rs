use std::fs;
use std::io::{self, Read};
use std::path::Path;

use encoding_rs::Encoding;
use url::Url;

use crate::config::CourseTimerConfig;
use crate::error::{CourseTimerError, CourseTimerResult};
use crate::extractor::extract_course;
use crate::model::Course;
use crate::parsers::html::dom::html_to_document;
use crate::parsers::html::metadata::{discover_page_url, get_charset};
use crate::parsers::html::query::HtmlPage;

pub const WRONG_PAGE_MESSAGE: &str = "Please navigate to a Teachable course page first";

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_GREEN: &str = "\x1b[32m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";
const DEFAULT_ENCODING: &str = "utf-8";

/// Refuses page locations outside the expected course host.
///
/// The location matches when `host + path` contains any of `patterns`.
pub fn check_page_location(page_url: &str, patterns: &[String]) -> CourseTimerResult<Url> {
    let wrong_page = || CourseTimerError::WrongPage(WRONG_PAGE_MESSAGE.to_string());

    let url = Url::parse(page_url.trim()).map_err(|_| wrong_page())?;
    let host = url.host_str().ok_or_else(wrong_page)?;
    let location = format!("{}{}", host, url.path());

    if patterns
        .iter()
        .map(|pattern| pattern.trim())
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| location.contains(pattern))
    {
        Ok(url)
    } else {
        tracing::debug!("page location {} matches no origin pattern", location);
        Err(wrong_page())
    }
}

/// Reads the saved page from a file path, or from stdin when `target` is `-`.
pub fn read_input(target: &str) -> CourseTimerResult<Vec<u8>> {
    if target == "-" {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data)?;
        return Ok(data);
    }

    let path = Path::new(target);
    if !path.exists() {
        return Err(CourseTimerError::Input(format!("File not found: {target}")));
    }

    fs::read(path).map_err(|e| CourseTimerError::Input(format!("Failed to read file: {e}")))
}

/// Rejects encoding labels `encoding_rs` doesn't know.
pub fn validate_encoding(label: &str) -> CourseTimerResult<&'static Encoding> {
    Encoding::for_label_no_replacement(label.as_bytes())
        .ok_or_else(|| CourseTimerError::Input(format!("unknown encoding \"{label}\"")))
}

/// Parses raw page bytes into a queryable page.
///
/// Without an explicit `encoding` the document is parsed as UTF-8 first and
/// parsed again when its `<meta charset>` names another valid encoding.
pub fn load_page(data: &[u8], encoding: Option<&str>) -> CourseTimerResult<HtmlPage> {
    if let Some(label) = encoding {
        let encoding = validate_encoding(label)?;
        return Ok(HtmlPage::new(html_to_document(data, encoding.name())));
    }

    let mut document = html_to_document(data, DEFAULT_ENCODING);

    // 文档内声明了其他字符集时重新解析
    if let Some(html_charset) = get_charset(&document) {
        if let Some(document_charset) = Encoding::for_label_no_replacement(html_charset.as_bytes()) {
            if document_charset != encoding_rs::UTF_8 {
                tracing::debug!("re-decoding document as {}", document_charset.name());
                document = html_to_document(data, document_charset.name());
            }
        }
    }

    Ok(HtmlPage::new(document))
}

/// Picks the page location: the explicit one, else one recovered from the
/// document. A page without any location cannot be checked and is refused.
pub fn resolve_page_url(page: &HtmlPage, explicit: Option<&str>) -> CourseTimerResult<String> {
    explicit
        .map(str::to_string)
        .or_else(|| discover_page_url(page.document()))
        .ok_or_else(|| CourseTimerError::WrongPage(WRONG_PAGE_MESSAGE.to_string()))
}

/// Full analysis of raw page bytes: decode, locate, check origin, extract.
pub fn analyze_document(
    data: &[u8],
    encoding: Option<&str>,
    page_url: Option<&str>,
    config: &CourseTimerConfig,
) -> CourseTimerResult<Course> {
    let page = load_page(data, encoding)?;
    let page_url = resolve_page_url(&page, page_url)?;
    check_page_location(&page_url, &config.origin_patterns)?;

    let markers = config.page_markers()?;
    let detector = config.completion_detector()?;

    extract_course(&page, &markers, &detector, &page_url)
}

/// Whether ANSI colors should be written to stderr.
pub fn colors_enabled() -> bool {
    use crate::env::{core::NoColor, EnvVar};

    !NoColor::get_or_default(false) && atty::is(atty::Stream::Stderr)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if colors_enabled() {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints a success message to stderr
pub fn print_success_message(msg: &str) {
    if colors_enabled() {
        eprintln!("{ANSI_COLOR_GREEN}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
