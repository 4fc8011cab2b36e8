//! Search-results page parsing.
//!
//! Listing nodes are located with an ordered cascade of layouts; the first
//! layout that matches anything wins. Each node is parsed on its own and a
//! node that cannot be parsed is skipped. When nothing usable comes out of the
//! cascade, listing links are recovered from the whole page by URL pattern.

use crate::models::ListingSummary;
use crate::scrapers::dom::{
    attr, css, non_empty, raw_text, select_first, stripped_text, time_value, PRICE_RE,
};
use crate::scrapers::url_builder::location_origin;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static STATIC_SEARCH: LazyLock<Selector> = LazyLock::new(|| css("li.cl-static-search-result"));
static RESULT_ROW: LazyLock<Selector> = LazyLock::new(|| css("div.result-row"));
static GALLERY_CARD: LazyLock<Selector> = LazyLock::new(|| css("li.cl-search-result"));
static RESULT_INFO: LazyLock<Selector> = LazyLock::new(|| css(".result-info"));

static PRIMARY_LINK: LazyLock<Selector> = LazyLock::new(|| {
    css("a.titlestring, a.result-title, a.posting-title, .title a, a[href*='/d/']")
});
static ANY_LINK: LazyLock<Selector> = LazyLock::new(|| css("a"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| css("div.title, .result-title, span.title"));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| css("div.price, .priceinfo, .result-price, span.price, .price"));
static NEIGHBORHOOD: LazyLock<Selector> = LazyLock::new(|| {
    css("div.location, .result-hood, .neighborhood, .surlabel, .meta .area")
});
static DATE: LazyLock<Selector> = LazyLock::new(|| css("time, .result-date, .date, .meta .date"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| css("img"));
static HREF_ANCHOR: LazyLock<Selector> = LazyLock::new(|| css("a[href]"));

/// Path shape of a listing page, e.g. `/mnh/mcy/d/some-title/7712345678.html`
static LISTING_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/[a-z]{3}/d/[^/]+/\d+\.html").expect("listing path pattern"));

/// Search page layouts, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// `li.cl-static-search-result`, the current static markup
    StaticSearch,
    /// `div.result-row`, the pre-2023 list view
    ResultRow,
    /// `li.cl-search-result`, the gallery card view
    GalleryCard,
    /// bare `.result-info` blocks
    ResultInfo,
}

impl ResultLayout {
    pub const CASCADE: [ResultLayout; 4] = [
        ResultLayout::StaticSearch,
        ResultLayout::ResultRow,
        ResultLayout::GalleryCard,
        ResultLayout::ResultInfo,
    ];

    fn selector(self) -> &'static Selector {
        match self {
            ResultLayout::StaticSearch => &STATIC_SEARCH,
            ResultLayout::ResultRow => &RESULT_ROW,
            ResultLayout::GalleryCard => &GALLERY_CARD,
            ResultLayout::ResultInfo => &RESULT_INFO,
        }
    }

    /// First layout in the cascade with at least one node, with its nodes
    pub fn detect(document: &Html) -> Option<(ResultLayout, Vec<ElementRef<'_>>)> {
        Self::CASCADE.into_iter().find_map(|layout| {
            let nodes: Vec<_> = document.select(layout.selector()).collect();
            (!nodes.is_empty()).then_some((layout, nodes))
        })
    }
}

/// Why a single listing node produced no summary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeSkip {
    #[error("no link in listing node")]
    MissingLink,
    #[error("listing link has no href")]
    MissingHref,
}

/// Parse a search-results page into summaries, in document order.
///
/// Never fails: unparseable nodes are dropped and an unrecognised page yields
/// whatever the link-pattern fallback can find, possibly nothing.
pub fn parse_search_results(html: &str, location: &str) -> Vec<ListingSummary> {
    let document = Html::parse_document(html);
    let origin = location_origin(location);
    let mut results = Vec::new();

    if let Some((layout, nodes)) = ResultLayout::detect(&document) {
        debug!("Matched {} nodes with {:?} layout", nodes.len(), layout);

        let mut skipped = 0usize;
        for node in nodes {
            match parse_single_result(node, &origin) {
                Ok(listing) => results.push(listing),
                Err(skip) => {
                    skipped += 1;
                    debug!("Skipping listing node: {}", skip);
                }
            }
        }
        if skipped > 0 {
            debug!("Skipped {} of {} listing nodes", skipped, skipped + results.len());
        }
    }

    if results.is_empty() {
        results = parse_results_fallback(&document, &origin);
        debug!("Link-pattern fallback found {} listings", results.len());
    }

    results
}

fn absolute_url(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{origin}{href}")
    }
}

fn trim_parens(text: &str) -> &str {
    text.trim_matches(|c| c == '(' || c == ')' || c == ' ')
}

/// Recover one summary from a listing node.
///
/// Dedicated child elements are preferred; when the title is missing the
/// anchor text is split around the first dollar amount.
pub fn parse_single_result(
    item: ElementRef<'_>,
    origin: &str,
) -> Result<ListingSummary, NodeSkip> {
    let link = select_first(item, &PRIMARY_LINK)
        .or_else(|| select_first(item, &ANY_LINK))
        .ok_or(NodeSkip::MissingLink)?;
    let href = link.value().attr("href").ok_or(NodeSkip::MissingHref)?;
    let url = absolute_url(href, origin);

    let mut title = select_first(item, &TITLE)
        .map(stripped_text)
        .and_then(non_empty);
    let mut price = select_first(item, &PRICE)
        .map(stripped_text)
        .and_then(non_empty);
    let mut neighborhood = select_first(item, &NEIGHBORHOOD)
        .map(|el| trim_parens(&stripped_text(el)).to_string())
        .and_then(non_empty);

    let anchor_text = stripped_text(link);

    if title.is_none() {
        if let Some(price_text) = &price {
            let mut clean = anchor_text.replace(price_text.as_str(), "").trim().to_string();
            if let Some(hood) = &neighborhood {
                clean = clean.replace(hood.as_str(), "").trim().to_string();
            }
            title = Some(if clean.is_empty() {
                anchor_text.clone()
            } else {
                clean
            });
        } else if let Some(m) = PRICE_RE.find(&anchor_text) {
            let before = anchor_text[..m.start()].trim();
            let after = trim_parens(anchor_text[m.end()..].trim());

            title = Some(if before.is_empty() {
                anchor_text.clone()
            } else {
                before.to_string()
            });
            if neighborhood.is_none() {
                neighborhood = non_empty(after.to_string());
            }
            price = Some(m.as_str().to_string());
        } else {
            title = Some(anchor_text.clone());
        }
    }

    let date = select_first(item, &DATE).and_then(time_value);
    let thumbnail = select_first(item, &IMAGE)
        .and_then(|img| attr(img, "src").or_else(|| attr(img, "data-src")))
        .map(str::to_string);

    Ok(ListingSummary {
        title: title.unwrap_or(anchor_text),
        url,
        price,
        neighborhood,
        date,
        thumbnail,
    })
}

/// Scan every anchor on the page for listing-shaped hrefs.
///
/// URLs are deduplicated before the text check, so a later anchor for an
/// already-seen URL is ignored even if the first one had no usable text.
fn parse_results_fallback(document: &Html, origin: &str) -> Vec<ListingSummary> {
    let mut results = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for anchor in document.select(&HREF_ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !LISTING_PATH_RE.is_match(href) {
            continue;
        }

        let url = absolute_url(href, origin);
        if !seen.insert(url.clone()) {
            continue;
        }

        let title = stripped_text(anchor);
        if title.chars().count() < 3 {
            continue;
        }

        let price = anchor.parent().and_then(ElementRef::wrap).and_then(|parent| {
            let text = raw_text(parent);
            PRICE_RE.find(&text).map(|m| m.as_str().to_string())
        });

        results.push(ListingSummary {
            title,
            url,
            price,
            neighborhood: None,
            date: None,
            thumbnail: None,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(body: &str) -> String {
        format!("<html><head><title>results</title></head><body>{body}</body></html>")
    }

    #[test]
    fn static_layout_reads_dedicated_children() {
        let html = page(
            r#"<ol>
            <li class="cl-static-search-result" title="Leather couch">
              <a href="https://newyork.craigslist.org/brk/fuo/d/brooklyn-leather-couch/7712345678.html">
                <div class="title">Leather couch</div>
                <div class="details">
                  <div class="price">$250</div>
                  <div class="location"> (Park Slope) </div>
                </div>
              </a>
            </li>
            </ol>"#,
        );

        let results = parse_search_results(&html, "newyork");
        assert_eq!(
            results,
            vec![ListingSummary {
                title: "Leather couch".to_string(),
                url: "https://newyork.craigslist.org/brk/fuo/d/brooklyn-leather-couch/7712345678.html"
                    .to_string(),
                price: Some("$250".to_string()),
                neighborhood: Some("Park Slope".to_string()),
                date: None,
                thumbnail: None,
            }]
        );
    }

    #[test]
    fn bare_anchor_is_split_on_dollar_amount() {
        let html = page(
            r#"<ul><li class="cl-static-search-result">
            <a href="/brk/bik/d/brooklyn-mountain-bike/7700000001.html">Mountain Bike $150(Brooklyn)</a>
            </li></ul>"#,
        );

        let results = parse_search_results(&html, "newyork");
        assert_eq!(results.len(), 1);
        let listing = &results[0];
        assert_eq!(listing.title, "Mountain Bike");
        assert_eq!(listing.price.as_deref(), Some("$150"));
        assert_eq!(listing.neighborhood.as_deref(), Some("Brooklyn"));
        assert_eq!(
            listing.url,
            "https://newyork.craigslist.org/brk/bik/d/brooklyn-mountain-bike/7700000001.html"
        );
    }

    #[test]
    fn anchor_without_price_becomes_title() {
        let html = page(
            r#"<ul><li class="cl-static-search-result">
            <a href="/mnh/zip/d/free-boxes/7700000002.html">Free moving boxes</a>
            </li></ul>"#,
        );

        let results = parse_search_results(&html, "newyork");
        assert_eq!(results[0].title, "Free moving boxes");
        assert_eq!(results[0].price, None);
        assert_eq!(results[0].neighborhood, None);
    }

    #[test]
    fn price_element_is_removed_from_anchor_title() {
        let html = page(
            r#"<ul><li class="cl-search-result">
              <a class="cl-app-anchor" href="/que/fuo/d/queens-desk/7700000003.html">Desk $40 Queens</a>
              <span class="priceinfo">$40</span>
              <span class="neighborhood">(Queens)</span>
              <time datetime="2024-03-02T11:15:00-0500">Mar 2</time>
              <img data-src="https://images.craigslist.org/desk_300x300.jpg">
            </li></ul>"#,
        );

        let results = parse_search_results(&html, "newyork");
        let listing = &results[0];
        assert_eq!(listing.title, "Desk");
        assert_eq!(listing.price.as_deref(), Some("$40"));
        assert_eq!(listing.neighborhood.as_deref(), Some("Queens"));
        assert_eq!(listing.date.as_deref(), Some("2024-03-02T11:15:00-0500"));
        assert_eq!(
            listing.thumbnail.as_deref(),
            Some("https://images.craigslist.org/desk_300x300.jpg")
        );
    }

    #[test]
    fn cascade_stops_at_first_matching_layout() {
        let html = page(
            r#"<ul><li class="cl-static-search-result"><a href="/a/d/static/1.html"><div class="title">Static</div></a></li></ul>
            <div class="result-row"><a class="result-title" href="/b/d/row/2.html">Row</a></div>"#,
        );

        let document = Html::parse_document(&html);
        let (layout, nodes) = ResultLayout::detect(&document).unwrap();
        assert_eq!(layout, ResultLayout::StaticSearch);
        assert_eq!(nodes.len(), 1);

        let titles: Vec<String> = parse_search_results(&html, "boston")
            .into_iter()
            .map(|l| l.title)
            .collect();
        assert_eq!(titles, vec!["Static".to_string()]);
    }

    #[test]
    fn legacy_row_layout_with_result_title_link() {
        let html = page(
            r#"<div class="result-row">
              <a class="result-image" href="/sea/bik/d/seattle-fixie/7700000004.html"><img src="https://images.craigslist.org/fixie.jpg"></a>
              <p class="result-info">
                <time class="result-date" datetime="2021-06-01 09:00">Jun 1</time>
                <a class="result-title" href="/sea/bik/d/seattle-fixie/7700000004.html">Fixie</a>
                <span class="result-meta"><span class="result-price">$180</span><span class="result-hood"> (Capitol Hill)</span></span>
              </p>
            </div>"#,
        );

        let results = parse_search_results(&html, "seattle");
        assert_eq!(results.len(), 1);
        let listing = &results[0];
        assert_eq!(listing.title, "Fixie");
        assert_eq!(listing.price.as_deref(), Some("$180"));
        assert_eq!(listing.neighborhood.as_deref(), Some("Capitol Hill"));
        assert_eq!(listing.date.as_deref(), Some("2021-06-01 09:00"));
        assert_eq!(
            listing.thumbnail.as_deref(),
            Some("https://images.craigslist.org/fixie.jpg")
        );
        assert_eq!(
            listing.url,
            "https://seattle.craigslist.org/sea/bik/d/seattle-fixie/7700000004.html"
        );
    }

    #[test]
    fn nodes_without_links_are_skipped() {
        let html = page(
            r#"<ul>
              <li class="cl-static-search-result"><div class="title">No link here</div></li>
              <li class="cl-static-search-result"><a href="/mnh/ela/d/tv/7700000005.html"><div class="title">TV</div></a></li>
              <li class="cl-static-search-result"><a name="anchor-only">Broken</a></li>
            </ul>"#,
        );

        let document = Html::parse_document(&html);
        let nodes: Vec<_> = document.select(&STATIC_SEARCH).collect();
        assert_eq!(
            parse_single_result(nodes[0], "https://newyork.craigslist.org"),
            Err(NodeSkip::MissingLink)
        );
        assert_eq!(
            parse_single_result(nodes[2], "https://newyork.craigslist.org"),
            Err(NodeSkip::MissingHref)
        );

        let results = parse_search_results(&html, "newyork");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "TV");
    }

    #[test]
    fn fallback_collects_listing_links_in_order() {
        let html = page(
            r#"<div class="content">
              <p><a href="/brk/bik/d/brooklyn-road-bike/7712345678.html">Road bike</a> <span>$300</span></p>
              <p><a href="https://newyork.craigslist.org/mnh/fuo/d/new-york-oak-table/7712345679.html">Oak table</a></p>
              <p><a href="/brk/bik/d/brooklyn-road-bike/7712345678.html">Road bike again</a> $1,000</p>
              <p><a href="/que/ele/d/queens-tv/7712345680.html">TV</a></p>
              <a href="/about/help">Help pages</a>
            </div>"#,
        );

        let results = parse_search_results(&html, "newyork");
        assert_eq!(
            results,
            vec![
                ListingSummary {
                    title: "Road bike".to_string(),
                    url: "https://newyork.craigslist.org/brk/bik/d/brooklyn-road-bike/7712345678.html"
                        .to_string(),
                    price: Some("$300".to_string()),
                    neighborhood: None,
                    date: None,
                    thumbnail: None,
                },
                ListingSummary {
                    title: "Oak table".to_string(),
                    url: "https://newyork.craigslist.org/mnh/fuo/d/new-york-oak-table/7712345679.html"
                        .to_string(),
                    price: None,
                    neighborhood: None,
                    date: None,
                    thumbnail: None,
                },
            ]
        );
    }

    #[test]
    fn fallback_runs_when_every_structured_node_is_skipped() {
        let html = page(
            r#"<div class="result-row"><span>sponsored</span></div>
            <section><a href="/chi/tls/d/chicago-drill-press/7700000006.html">Drill press</a></section>"#,
        );

        let results = parse_search_results(&html, "chicago");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Drill press");
        assert_eq!(
            results[0].url,
            "https://chicago.craigslist.org/chi/tls/d/chicago-drill-press/7700000006.html"
        );
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(parse_search_results(&page(""), "newyork").is_empty());
    }
}
