use encoding_rs::Encoding;
use scraper::{ElementRef, Html};

/// 将 HTML 字节按指定编码解码为文本
///
/// 未知的编码名称按 UTF-8（有损）处理。
pub fn decode_html(data: &[u8], document_encoding: &str) -> String {
    match Encoding::for_label(document_encoding.as_bytes()) {
        Some(encoding) => encoding.decode(data).0.into_owned(),
        None => String::from_utf8_lossy(data).into_owned(),
    }
}

/// 将 HTML 字节转换为文档
pub fn html_to_document(data: &[u8], document_encoding: &str) -> Html {
    Html::parse_document(&decode_html(data, document_encoding))
}

/// 元素的文本内容：后代文本节点按文档顺序拼接，只去掉首尾空白
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
