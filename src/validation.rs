//! Validation helper functions for the habit MCP server
//!
//! Parameter normalization and parsing with user-facing error messages.

use crate::habit::SortOrder;
use mcp_attr::Result as McpResult;

/// Parse and validate a sort order parameter
///
/// # Arguments
/// * `sort_str` - Sort name to parse
///
/// # Returns
/// Result containing the parsed SortOrder or an invalid-params error
pub fn parse_sort_order(sort_str: &str) -> McpResult<SortOrder> {
    sort_str.parse::<SortOrder>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Normalize a habit ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use habit_mcp::validation::normalize_habit_id;
/// assert_eq!(normalize_habit_id("  abc "), "abc");
/// ```
pub fn normalize_habit_id(habit_id: &str) -> String {
    habit_id.trim().to_string()
}

/// Treat blank optional parameters as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Extract ID from response message
///
/// Helper function for tests to extract a habit ID from response messages.
/// Response format: "Habit created with ID: <id> (name: ...)"
#[cfg(test)]
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_order() {
        assert_eq!(parse_sort_order("today").unwrap(), SortOrder::Today);
        assert_eq!(parse_sort_order(" name ").unwrap(), SortOrder::Name);
        assert!(parse_sort_order("oldest").is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("x".to_string())), Some("x".to_string()));
    }
}
