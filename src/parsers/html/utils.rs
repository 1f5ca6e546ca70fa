/// ASCII 空白字符
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// 课程托管平台标识
pub const PLATFORM_NAME: &str = "teachable";

/// 折叠连续空白并去掉首尾空白
pub fn normalize_whitespace(text: &str) -> String {
    text.split(WHITESPACES)
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
