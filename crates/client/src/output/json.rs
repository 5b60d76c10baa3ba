//! JSON output formatting.

/// Single-line JSON, suitable for piping into `jq`.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Indented JSON.
pub fn format_json_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_is_single_line() {
        let value = serde_json::json!({"volumeNumber": 1, "title": "Beginnings"});

        assert_eq!(format_json(&value), r#"{"title":"Beginnings","volumeNumber":1}"#);
    }

    #[test]
    fn test_format_json_pretty_is_indented() {
        let value = serde_json::json!({"status": "ok"});

        assert_eq!(format_json_pretty(&value), "{\n  \"status\": \"ok\"\n}");
    }
}
