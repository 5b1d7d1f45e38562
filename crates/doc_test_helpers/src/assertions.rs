//! JSON-RPC assertion helpers
//!
//! Predicates and parsers for checking what the server writes to stdout.

use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

/// Assert that stderr does NOT contain any of the given strings
///
/// ```rust
/// use doc_test_helpers::assertions::stderr_not_contains;
/// use predicates::prelude::*;
///
/// assert!(stderr_not_contains(&["ERROR", "WARN"]).eval("all good"));
/// ```
pub fn stderr_not_contains(values: &[&str]) -> impl Predicate<str> {
    let owned_values: Vec<String> = values.iter().map(|&s| s.to_string()).collect();
    predicate::function(move |s: &str| !owned_values.iter().any(|v| s.contains(v.as_str())))
}

/// Assert that a string looks like a JSON-RPC response
///
/// ```rust
/// use doc_test_helpers::assertions::valid_jsonrpc_response;
/// use predicates::prelude::*;
///
/// let response = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
/// assert!(valid_jsonrpc_response().eval(response));
/// ```
pub fn valid_jsonrpc_response() -> impl Predicate<str> {
    contains("\"jsonrpc\"")
        .and(contains("\"id\""))
        .and(contains("\"result\"").or(contains("\"error\"")))
}

/// Parse line-delimited JSON-RPC output into values
///
/// Panics on a line that is not JSON, since stdout must carry only protocol traffic.
pub fn parse_responses(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line)
                .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, line))
        })
        .collect()
}

/// Find the response carrying the given numeric id
pub fn response_with_id(responses: &[Value], id: i64) -> &Value {
    responses
        .iter()
        .find(|r| r["id"].as_i64() == Some(id))
        .unwrap_or_else(|| panic!("no response with id {}", id))
}

/// Text of the first content block of a `tools/call` result
pub fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("response has no text content: {}", response))
}
