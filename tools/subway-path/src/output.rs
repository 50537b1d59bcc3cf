use anyhow::{Context, Result};
use subway_transit::PathResult;

/// Render a path result as pretty-printed JSON
pub fn to_json(result: &PathResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize path result")
}

/// Render a path result for a terminal
pub fn to_text(result: &PathResult) -> String {
    let route = result
        .stations
        .iter()
        .map(|s| s.name.as_ref())
        .collect::<Vec<_>>()
        .join(" -> ");

    format!(
        "{}\ndistance: {} km\nfare: {} won",
        route, result.distance, result.fare
    )
}
