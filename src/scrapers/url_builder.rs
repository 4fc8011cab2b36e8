use crate::reference::is_sort_option;
use crate::scrapers::types::SearchParams;
use url::form_urlencoded;

pub const SITE_DOMAIN: &str = "craigslist.org";

/// Origin for a location subdomain, e.g. `https://newyork.craigslist.org`
pub fn location_origin(location: &str) -> String {
    format!("https://{location}.{SITE_DOMAIN}")
}

/// Build the search URL for one results page.
///
/// `location` and `category` are taken from `params` as-is; callers resolve
/// them against the reference tables first. The query string is omitted
/// entirely when no parameter applies.
pub fn build_search_url(params: &SearchParams, offset: usize) -> String {
    let base = format!(
        "{}/search/{}",
        location_origin(&params.location),
        params.category
    );

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    let mut push = |key: &str, value: &str| {
        query.append_pair(key, value);
        any = true;
    };

    if !params.query.is_empty() {
        push("query", &params.query);
    }
    if let Some(min) = params.min_price {
        push("min_price", &min.to_string());
    }
    if let Some(max) = params.max_price {
        push("max_price", &max.to_string());
    }
    if is_sort_option(&params.sort_by) {
        push("sort", &params.sort_by);
    }
    if params.has_image {
        push("hasPic", "1");
    }
    if params.posted_today {
        push("postedToday", "1");
    }
    if params.bundle_duplicates {
        push("bundleDuplicates", "1");
    }
    if let Some(distance) = params.search_distance {
        push("search_distance", &distance.to_string());
    }
    if let Some(postal) = params.postal_code.as_deref().filter(|p| !p.is_empty()) {
        push("postal", postal);
    }
    if offset > 0 {
        push("s", &offset.to_string());
    }

    if any {
        format!("{base}?{}", query.finish())
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use url::Url;

    fn query_map(url: &str) -> BTreeMap<String, String> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn bare(location: &str, category: &str) -> SearchParams {
        SearchParams {
            location: location.to_string(),
            category: category.to_string(),
            sort_by: String::new(),
            bundle_duplicates: false,
            ..SearchParams::default()
        }
    }

    #[test]
    fn no_parameters_means_no_query_string() {
        let url = build_search_url(&bare("seattle", "bia"), 0);
        assert_eq!(url, "https://seattle.craigslist.org/search/bia");
    }

    #[test]
    fn defaults_emit_sort_and_bundle_flag() {
        let params = SearchParams::new("dirt bike");
        let url = build_search_url(&params, 0);
        let parsed = Url::parse(&url).unwrap();

        assert_eq!(parsed.host_str(), Some("newyork.craigslist.org"));
        assert_eq!(parsed.path(), "/search/sss");
        assert_eq!(
            query_map(&url),
            BTreeMap::from([
                ("query".to_string(), "dirt bike".to_string()),
                ("sort".to_string(), "relevant".to_string()),
                ("bundleDuplicates".to_string(), "1".to_string()),
            ])
        );
        assert!(url.contains("query=dirt+bike"));
    }

    #[test]
    fn every_optional_field_maps_to_one_parameter() {
        let params = SearchParams {
            query: "couch".to_string(),
            location: "chicago".to_string(),
            category: "fua".to_string(),
            min_price: Some(50),
            max_price: Some(400),
            sort_by: "priceasc".to_string(),
            has_image: true,
            posted_today: true,
            bundle_duplicates: true,
            search_distance: Some(15),
            postal_code: Some("60601".to_string()),
            max_results: 10,
        };
        let url = build_search_url(&params, 120);

        assert_eq!(Url::parse(&url).unwrap().path(), "/search/fua");
        assert_eq!(
            query_map(&url),
            BTreeMap::from([
                ("query".to_string(), "couch".to_string()),
                ("min_price".to_string(), "50".to_string()),
                ("max_price".to_string(), "400".to_string()),
                ("sort".to_string(), "priceasc".to_string()),
                ("hasPic".to_string(), "1".to_string()),
                ("postedToday".to_string(), "1".to_string()),
                ("bundleDuplicates".to_string(), "1".to_string()),
                ("search_distance".to_string(), "15".to_string()),
                ("postal".to_string(), "60601".to_string()),
                ("s".to_string(), "120".to_string()),
            ])
        );
    }

    #[test]
    fn unknown_sort_and_empty_postal_are_dropped() {
        let mut params = bare("boston", "sss");
        params.sort_by = "cheapest".to_string();
        params.postal_code = Some(String::new());
        params.min_price = Some(0);

        let url = build_search_url(&params, 0);
        assert_eq!(url, "https://boston.craigslist.org/search/sss?min_price=0");
    }
}
