//! Serde helper functions for request deserialization.
//!
//! Clients post loosely-shaped JSON: strings padded with whitespace, empty
//! strings where a field is meant to be absent, tags in mixed case. These
//! helpers normalize those inputs at the boundary so the domain types can
//! assume clean values.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Deserialize a string, trimming surrounding whitespace.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (the date part is kept).
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_flexible_date(s.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}"))),
        _ => Ok(None),
    }
}

/// Deserialize a list of tags: trimmed, lowercased, blanks and duplicates removed.
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(normalize_tags(tags.unwrap_or_default()))
}

/// Normalize tags the same way [`deserialize_tags`] does.
pub fn normalize_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_tags")]
        tags: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Trimmed {
        #[serde(deserialize_with = "deserialize_trimmed_string")]
        name: String,
    }

    #[test]
    fn test_deserialize_trimmed_string() {
        let result: Trimmed = serde_json::from_str(r#"{"name": "  Read daily \n"}"#).unwrap();
        assert_eq!(result.name, "Read daily");
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": " hello "}"#).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.string_field, None);
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_deserialize_optional_date_valid() {
        let result: TestStruct = serde_json::from_str(r#"{"date_field": "2025-01-15"}"#).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_rfc3339() {
        let result: TestStruct =
            serde_json::from_str(r#"{"date_field": "2025-01-15T10:30:00Z"}"#).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_empty() {
        let result: TestStruct = serde_json::from_str(r#"{"date_field": ""}"#).unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_date_invalid() {
        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"date_field": "not-a-date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_tags_normalizes() {
        let result: TestStruct =
            serde_json::from_str(r#"{"tags": [" Dreams", "dreams", "", "LORE "]}"#).unwrap();
        assert_eq!(result.tags, vec!["dreams", "lore"]);
    }

    #[test]
    fn test_deserialize_tags_null() {
        let result: TestStruct = serde_json::from_str(r#"{"tags": null}"#).unwrap();
        assert!(result.tags.is_empty());
    }
}
