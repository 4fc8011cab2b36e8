//! Tool-call dispatch: a tool name plus JSON arguments in, a JSON value out.
//!
//! Failures are returned as error payloads rather than `Err`, so callers can
//! forward the value as-is.

use crate::config::{DEFAULT_CATEGORY, DEFAULT_LOCATION, DEFAULT_SORT};
use crate::error::{Result, ScoutError};
use crate::models::ErrorPayload;
use crate::scrapers::{CraigslistScraper, PageFetcher, SearchParams};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Usage notes published to clients alongside the tool list
pub const INSTRUCTIONS: &str = "Searches Craigslist listings across US and Canadian cities by \
keyword, location, category, price range and more. Use list_locations to find a location code \
and list_categories to see the available categories. Each location is a craigslist.org \
subdomain, e.g. 'seattle', 'losangeles', 'sfbay', 'chicago'.";

/// One argument accepted by a tool
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolArg {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [ToolArg],
}

const fn arg(
    name: &'static str,
    kind: &'static str,
    default: Option<&'static str>,
    description: &'static str,
) -> ToolArg {
    ToolArg {
        name,
        kind,
        required: false,
        default,
        description,
    }
}

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "search_craigslist",
        description: "Search listings by keyword, location and category.",
        arguments: &[
            arg("query", "string", Some(""), "Search keywords, e.g. \"mountain bike\""),
            arg(
                "location",
                "string",
                Some(DEFAULT_LOCATION),
                "Location subdomain, or text matched against location names",
            ),
            arg("category", "string", Some(DEFAULT_CATEGORY), "Category code, see list_categories"),
            arg("min_price", "integer", None, "Minimum price in dollars"),
            arg("max_price", "integer", None, "Maximum price in dollars"),
            arg(
                "sort_by",
                "string",
                Some(DEFAULT_SORT),
                "One of relevant, date, priceasc, pricedsc",
            ),
            arg("has_image", "boolean", Some("false"), "Only listings with images"),
            arg("posted_today", "boolean", Some("false"), "Only listings posted today"),
            arg("bundle_duplicates", "boolean", Some("true"), "Collapse duplicate postings"),
            arg("search_distance", "integer", None, "Radius in miles around postal_code"),
            arg("postal_code", "string", None, "ZIP/postal code to centre the radius on"),
            arg("max_results", "integer", Some("25"), "Results to return, capped at 120"),
        ],
    },
    ToolSpec {
        name: "get_listing",
        description: "Fetch full details of a single listing page.",
        arguments: &[ToolArg {
            name: "url",
            kind: "string",
            required: true,
            default: None,
            description: "Full URL of a listing page",
        }],
    },
    ToolSpec {
        name: "list_locations",
        description: "List location codes and names, sorted by name.",
        arguments: &[arg(
            "filter_text",
            "string",
            None,
            "Case-insensitive filter on code or name",
        )],
    },
    ToolSpec {
        name: "list_categories",
        description: "List category codes and names.",
        arguments: &[],
    },
];

/// One line of the stdio protocol
#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub result: Value,
}

#[derive(Debug, Deserialize)]
struct GetListingArgs {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListLocationsArgs {
    filter_text: Option<String>,
}

fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ScoutError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "error": e.to_string() }))
}

async fn dispatch<F: PageFetcher>(
    scraper: &CraigslistScraper<F>,
    tool: &str,
    arguments: Value,
) -> Result<Value> {
    match tool {
        "search_craigslist" => {
            let params: SearchParams = parse_args(tool, arguments)?;
            Ok(to_json(&scraper.search(&params).await?))
        }
        "get_listing" => {
            let args: GetListingArgs = parse_args(tool, arguments)?;
            Ok(to_json(&scraper.get_listing(&args.url).await?))
        }
        "list_locations" => {
            let args: ListLocationsArgs = parse_args(tool, arguments)?;
            Ok(to_json(&scraper.list_locations(args.filter_text.as_deref())))
        }
        "list_categories" => Ok(to_json(&scraper.list_categories())),
        other => Err(ScoutError::UnknownTool {
            name: other.to_string(),
        }),
    }
}

/// Run one tool call, mapping any failure to its error payload
pub async fn call_tool<F: PageFetcher>(
    scraper: &CraigslistScraper<F>,
    tool: &str,
    arguments: Value,
) -> Value {
    debug!("Tool call: {}", tool);
    match dispatch(scraper, tool, arguments).await {
        Ok(value) => value,
        Err(e) => to_json(&e.to_payload()),
    }
}

pub async fn handle_request<F: PageFetcher>(
    scraper: &CraigslistScraper<F>,
    request: ToolRequest,
) -> ToolResponse {
    ToolResponse {
        result: call_tool(scraper, &request.tool, request.arguments).await,
        id: request.id,
    }
}

/// Handle one line of the stdio protocol.
///
/// Blank lines produce no response. A line that is not a valid request gets
/// an error payload with no id.
pub async fn handle_line<F: PageFetcher>(
    scraper: &CraigslistScraper<F>,
    line: &str,
) -> Option<ToolResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<ToolRequest>(line) {
        Ok(request) => handle_request(scraper, request).await,
        Err(e) => {
            warn!("Rejected malformed request: {}", e);
            ToolResponse {
                id: None,
                result: to_json(&ErrorPayload {
                    error: format!("Invalid request: {e}"),
                    suggestion: None,
                    url: None,
                }),
            }
        }
    };
    Some(response)
}
