//! Static reference data: locations, categories and sort options.

mod categories;
mod locations;

pub use categories::{CATEGORIES, SORT_OPTIONS};
pub use locations::LOCATIONS;

use crate::models::{CategoryList, CodeName, LocationList};

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

pub fn location_name(code: &str) -> Option<&'static str> {
    lookup(LOCATIONS, code)
}

pub fn category_name(code: &str) -> Option<&'static str> {
    lookup(CATEGORIES, code)
}

pub fn is_sort_option(key: &str) -> bool {
    lookup(SORT_OPTIONS, key).is_some()
}

fn matches_filter(code: &str, name: &str, needle: &str) -> bool {
    code.contains(needle) || name.to_lowercase().contains(needle)
}

/// Resolve user input to a location code.
///
/// Exact code match first, then the first table entry (in table order) whose
/// code or display name contains the input. The fuzzy step is not ranked.
pub fn resolve_location(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    if let Some((code, _)) = LOCATIONS.iter().find(|(code, _)| *code == needle) {
        return Some(code);
    }
    LOCATIONS
        .iter()
        .find(|(code, name)| matches_filter(code, name, &needle))
        .map(|(code, _)| *code)
}

/// Resolve user input to a category code. Exact match only.
pub fn resolve_category(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    CATEGORIES
        .iter()
        .find(|(code, _)| *code == needle)
        .map(|(code, _)| *code)
}

fn code_name(code: &str, name: &str) -> CodeName {
    CodeName {
        code: code.to_string(),
        name: name.to_string(),
    }
}

/// Locations sorted by display name, optionally filtered by a case-insensitive
/// substring of the code or name
pub fn list_locations(filter_text: Option<&str>) -> LocationList {
    let needle = filter_text
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    let mut locations: Vec<CodeName> = LOCATIONS
        .iter()
        .filter(|(code, name)| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_filter(code, name, needle))
        })
        .map(|(code, name)| code_name(code, name))
        .collect();
    locations.sort_by(|a, b| a.name.cmp(&b.name));

    LocationList {
        total: locations.len(),
        locations,
    }
}

pub fn list_categories() -> CategoryList {
    let categories: Vec<CodeName> = CATEGORIES
        .iter()
        .map(|(code, name)| code_name(code, name))
        .collect();

    CategoryList {
        total: categories.len(),
        categories,
    }
}
