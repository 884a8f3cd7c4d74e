//! Logging utilities
//!
//! Helpers that keep credentials and large bodies out of the logs

use serde_json::Value;

/// Maximum characters of a string value kept in a body summary
const MAX_LOGGED_STRING: usize = 120;

/// Maximum array entries kept in a body summary
const MAX_LOGGED_ITEMS: usize = 3;

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    let total = s.chars().count();
    if total > max_len {
        let kept: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", kept, total - max_len)
    } else {
        s.to_string()
    }
}

/// Redact a bearer token for logging, keeping only a short prefix
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", prefix)
    }
}

/// Create a truncated copy of a JSON body for logging.
///
/// Listing payloads carry base64 images, so long strings and arrays are cut.
pub fn summarize_body(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(truncate_content(s, MAX_LOGGED_STRING)),
        Value::Array(items) => {
            let mut kept: Vec<Value> = items
                .iter()
                .take(MAX_LOGGED_ITEMS)
                .map(summarize_body)
                .collect();
            if items.len() > MAX_LOGGED_ITEMS {
                kept.push(Value::String(format!(
                    "...and {} more items",
                    items.len() - MAX_LOGGED_ITEMS
                )));
            }
            Value::Array(kept)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, v)| {
                    let summarized = if key == "password" || key == "access_token" {
                        Value::String("[redacted]".to_string())
                    } else {
                        summarize_body(v)
                    };
                    (key.clone(), summarized)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redact_token() {
        assert_eq!(redact_token("tok123"), "tok1***");
        assert_eq!(redact_token("abc"), "***");
    }

    #[test]
    fn test_summarize_body() {
        let image = "a".repeat(500);
        let body = json!({
            "identifier": "a@b.com",
            "password": "secret",
            "images": [image.clone(), image.clone(), image.clone(), image],
        });

        let summary = summarize_body(&body);
        assert_eq!(summary["password"], "[redacted]");
        assert_eq!(summary["identifier"], "a@b.com");
        let images = summary["images"].as_array().unwrap();
        assert_eq!(images.len(), 4);
        assert!(images[0].as_str().unwrap().contains("380 chars truncated"));
        assert_eq!(images[3], "...and 1 more items");
    }
}
