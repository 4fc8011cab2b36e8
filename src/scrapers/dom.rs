//! Small helpers over `scraper` shared by the search and detail parsers.

use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

/// Parse a selector literal. Only used for constants, so a failure is a
/// programming error.
pub fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|e| panic!("bad selector {selector:?}: {e}"))
}

/// Dollar amount such as `$1,200`
pub static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+").expect("price pattern"));

pub fn select_first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Each text node trimmed, empty ones dropped, the rest concatenated
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Like [`stripped_text`] but with `separator` between pieces
pub fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// All descendant text, untouched
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|value| !value.is_empty())
}

pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Machine-readable `datetime` attribute, falling back to the visible text
pub fn time_value(element: ElementRef<'_>) -> Option<String> {
    attr(element, "datetime")
        .map(str::to_string)
        .or_else(|| non_empty(stripped_text(element)))
}

pub fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn stripped_text_drops_whitespace_between_nodes() {
        let html = Html::parse_fragment("<p>  Red <b> bike </b>\n <i></i>for sale </p>");
        let p = html.select(&css("p")).next().unwrap();

        assert_eq!(stripped_text(p), "Redbikefor sale");
        assert_eq!(joined_text(p, " "), "Red bike for sale");
    }

    #[test]
    fn time_value_prefers_datetime_attribute() {
        let html = Html::parse_fragment(
            r#"<time datetime="2024-05-01 10:00">May 1</time><time datetime="">May 2</time>"#,
        );
        let times: Vec<_> = html.select(&css("time")).collect();

        assert_eq!(time_value(times[0]).as_deref(), Some("2024-05-01 10:00"));
        assert_eq!(time_value(times[1]).as_deref(), Some("May 2"));
    }
}
