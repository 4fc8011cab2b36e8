//! Single listing page parsing.
//!
//! Every field is recovered independently; a field whose markup is missing or
//! malformed is left as `None` and never fails the whole page.

use crate::models::ListingDetail;
use crate::scrapers::dom::{attr, css, has_class, joined_text, non_empty, stripped_text, time_value};
use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE_TEXT_ONLY: LazyLock<Selector> = LazyLock::new(|| css("#titletextonly"));
static POSTING_TITLE: LazyLock<Selector> =
    LazyLock::new(|| css(".postingtitletext, h1.postingtitle"));
static DOCUMENT_TITLE: LazyLock<Selector> = LazyLock::new(|| css("title"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| css(".price, .postingtitletext .price"));
static POSTING_BODY: LazyLock<Selector> = LazyLock::new(|| css("#postingbody"));
static ATTR_GROUP: LazyLock<Selector> = LazyLock::new(|| css(".attrgroup"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| css("span"));
static MAP_ADDRESS: LazyLock<Selector> =
    LazyLock::new(|| css(".mapaddress, div.mapAndAttrs small"));
static MAP: LazyLock<Selector> = LazyLock::new(|| css("#map"));
static POSTED: LazyLock<Selector> = LazyLock::new(|| css("time.date, time.timeago"));
static GALLERY_IMAGES: LazyLock<Selector> =
    LazyLock::new(|| css("a.thumb, .gallery img, .swipe img"));
static THUMBS: LazyLock<Selector> = LazyLock::new(|| css("#thumbs"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| css("a"));

/// Trailing ` - $1,200 (Covington)` on composite posting titles
static TITLE_PRICE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*-?\s*\$[\d,]+\s*(\([^)]*\))?\s*$").expect("title suffix pattern")
});

const UNKNOWN_TITLE: &str = "Unknown";
const PRINT_INFORMATION: &str = "print-information";

fn first<'a>(document: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    document.select(selector).next()
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    first(document, selector)
        .map(stripped_text)
        .and_then(non_empty)
}

/// Parse a listing page. `url` is echoed into the result.
pub fn parse_listing_detail(html: &str, url: &str) -> ListingDetail {
    let document = Html::parse_document(html);
    let (latitude, longitude) = parse_coordinates(&document).unzip();
    let attributes = parse_attributes(&document);
    let images = parse_images(&document);

    ListingDetail {
        url: url.to_string(),
        title: parse_title(&document),
        price: first_text(&document, &PRICE),
        description: first(&document, &POSTING_BODY)
            .map(body_text)
            .and_then(non_empty),
        attributes: (!attributes.is_empty()).then_some(attributes),
        location: first_text(&document, &MAP_ADDRESS),
        latitude,
        longitude,
        posted: first(&document, &POSTED).and_then(time_value),
        images: (!images.is_empty()).then_some(images),
        fetched_at: Utc::now(),
    }
}

fn parse_title(document: &Html) -> String {
    if let Some(title) = first_text(document, &TITLE_TEXT_ONLY) {
        return title;
    }
    if let Some(raw) = first_text(document, &POSTING_TITLE) {
        let cleaned = TITLE_PRICE_SUFFIX.replace(&raw, "").trim().to_string();
        return if cleaned.is_empty() { raw } else { cleaned };
    }
    first_text(document, &DOCUMENT_TITLE).unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Posting body text without the "QR Code Link to This Post" block
fn body_text(body: ElementRef<'_>) -> String {
    body.descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .take_while(|ancestor| ancestor.id() != body.id())
                .any(|ancestor| has_class(ancestor, PRINT_INFORMATION))
        })
        .map(|(_, text)| text.trim())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Collect attribute key/value pairs from every `.attrgroup`.
///
/// Spans are scanned as one flat list per group. A `labl` span consumes the
/// following `valu` span when there is one; unpaired `valu` spans and plain
/// spans become keys of their own. Later keys overwrite earlier ones in place.
pub fn parse_attributes(document: &Html) -> IndexMap<String, String> {
    let mut attrs = IndexMap::new();

    for group in document.select(&ATTR_GROUP) {
        let spans: Vec<ElementRef<'_>> = group.select(&SPAN).collect();
        let mut i = 0;

        while i < spans.len() {
            let span = spans[i];

            if has_class(span, "labl") {
                let label = stripped_text(span)
                    .trim_end_matches(':')
                    .trim()
                    .to_lowercase();
                if let Some(&value_span) = spans.get(i + 1).filter(|next| has_class(**next, "valu"))
                {
                    let value = stripped_text(value_span);
                    if !label.is_empty() && !value.is_empty() {
                        attrs.insert(label, value);
                    }
                    i += 2;
                    continue;
                }
                if !label.is_empty() {
                    attrs.insert(label, String::new());
                }
            } else if has_class(span, "valu") {
                let value = stripped_text(span);
                if !value.is_empty() {
                    if has_class(span, "year") {
                        attrs.insert("year".to_string(), value);
                    } else if has_class(span, "makemodel") {
                        attrs.insert("make/model".to_string(), value);
                    } else {
                        attrs.insert(value.to_lowercase(), "yes".to_string());
                    }
                }
            } else {
                let text = joined_text(span, " ");
                if let Some((key, value)) = text.split_once(':') {
                    let key = key.trim().to_lowercase();
                    let value = value.trim();
                    if !key.is_empty() && !value.is_empty() {
                        attrs.insert(key, value.to_string());
                    }
                } else if !text.is_empty() {
                    attrs.insert(text.to_lowercase(), "yes".to_string());
                }
            }

            i += 1;
        }
    }

    attrs
}

/// Latitude and longitude from the map element; both or neither
fn parse_coordinates(document: &Html) -> Option<(f64, f64)> {
    let map = first(document, &MAP)?;
    let latitude = attr(map, "data-latitude")?.trim().parse::<f64>().ok()?;
    let longitude = attr(map, "data-longitude")?.trim().parse::<f64>().ok()?;
    Some((latitude, longitude))
}

/// Gallery image URLs followed by any extra thumbnail links, first
/// occurrence of each URL kept
fn parse_images(document: &Html) -> Vec<String> {
    let mut images: IndexSet<String> = IndexSet::new();

    for element in document.select(&GALLERY_IMAGES) {
        let source = attr(element, "href")
            .or_else(|| attr(element, "src"))
            .or_else(|| attr(element, "data-src"));
        if let Some(source) = source {
            images.insert(source.to_string());
        }
    }

    if let Some(thumbs) = first(document, &THUMBS) {
        for anchor in thumbs.select(&ANCHOR) {
            if let Some(href) = attr(anchor, "href") {
                images.insert(href.to_string());
            }
        }
    }

    images.into_iter().collect()
}
