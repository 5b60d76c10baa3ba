//! Case-insensitive substring search across volume fields.

use serde::{Deserialize, Serialize};

use super::Volume;

/// Maximum excerpt length in characters, not counting `…` markers.
pub const EXCERPT_MAX_LEN: usize = 100;

/// Which part of a volume matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "edition")]
    Edition,
    #[serde(rename = "dream")]
    Dream,
    #[serde(rename = "blessingIntro")]
    BlessingIntro,
    #[serde(rename = "blessing.item")]
    BlessingItem,
    #[serde(rename = "blessing.description")]
    BlessingDescription,
    #[serde(rename = "body")]
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub field: SearchField,
    /// Position within `blessings` or `bodyLines`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub volume: Volume,
    pub matches: Vec<SearchMatch>,
}

/// A run of snippet text, flagged when it is a query hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPart {
    pub text: String,
    pub hit: bool,
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Char index of the first case-insensitive occurrence of `needle` at or after `from`.
fn find_ignore_case(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

fn contains_ignore_case(text: &str, query: &[char]) -> bool {
    let text: Vec<char> = text.chars().collect();
    find_ignore_case(&text, query, 0).is_some()
}

/// Cuts a window of at most `max_len` chars around the first hit.
///
/// Falls back to the first `max_len` chars when there is no hit.
pub fn excerpt_around(text: &str, query: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();

    let Some(idx) = find_ignore_case(&chars, &needle, 0) else {
        return chars.iter().take(max_len).collect();
    };

    let start = idx.saturating_sub(max_len.saturating_sub(needle.len()) / 2);
    let end = (start + max_len).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push('…');
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push('…');
    }
    snippet
}

/// Searches volumes, returning those with at least one hit.
///
/// Results are ordered by number of matches (most first), then by volume
/// number. A blank query returns nothing.
pub fn search_volumes(volumes: &[Volume], query: &str) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle: Vec<char> = query.chars().collect();
    let hit = |text: &str| contains_ignore_case(text, &needle);
    let excerpt = |text: &str| excerpt_around(text, query, EXCERPT_MAX_LEN);

    let mut results: Vec<SearchResult> = Vec::new();
    for volume in volumes {
        let mut matches = Vec::new();

        let scalar_fields = [
            (SearchField::Title, &volume.title),
            (SearchField::Edition, &volume.edition),
            (SearchField::Dream, &volume.dream),
            (SearchField::BlessingIntro, &volume.blessing_intro),
        ];
        for (field, text) in scalar_fields {
            if hit(text) {
                matches.push(SearchMatch {
                    field,
                    index: None,
                    excerpt: excerpt(text),
                });
            }
        }

        for (i, blessing) in volume.blessings.iter().enumerate() {
            let found = if hit(&blessing.item) {
                Some((SearchField::BlessingItem, &blessing.item))
            } else if hit(&blessing.description) {
                Some((SearchField::BlessingDescription, &blessing.description))
            } else {
                None
            };
            if let Some((field, text)) = found {
                matches.push(SearchMatch {
                    field,
                    index: Some(i),
                    excerpt: excerpt(text),
                });
            }
        }

        for (i, line) in volume.body_lines.iter().enumerate() {
            if hit(line) {
                matches.push(SearchMatch {
                    field: SearchField::Body,
                    index: Some(i),
                    excerpt: excerpt(line),
                });
            }
        }

        if !matches.is_empty() {
            results.push(SearchResult {
                volume: volume.clone(),
                matches,
            });
        }
    }

    results.sort_by(|a, b| {
        b.matches
            .len()
            .cmp(&a.matches.len())
            .then(a.volume.volume_number.cmp(&b.volume.volume_number))
    });
    results
}

/// Splits a snippet into alternating hit / non-hit parts.
pub fn highlight_query(snippet: &str, query: &str) -> Vec<HighlightPart> {
    let chars: Vec<char> = snippet.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if chars.is_empty() || needle.is_empty() {
        return vec![HighlightPart {
            text: snippet.to_string(),
            hit: false,
        }];
    }

    let mut parts = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let Some(idx) = find_ignore_case(&chars, &needle, i) else {
            parts.push(HighlightPart {
                text: chars[i..].iter().collect(),
                hit: false,
            });
            break;
        };
        if idx > i {
            parts.push(HighlightPart {
                text: chars[i..idx].iter().collect(),
                hit: false,
            });
        }
        parts.push(HighlightPart {
            text: chars[idx..idx + needle.len()].iter().collect(),
            hit: true,
        });
        i = idx + needle.len();
    }
    parts
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::volume::{parse_greentext, VolumeStatus};

    fn volume(raw: &str) -> Volume {
        Volume::from_parsed(
            parse_greentext(raw),
            raw,
            VolumeStatus::Published,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let volumes = vec![volume("Volume 1 – Coffee")];
        assert!(search_volumes(&volumes, "   ").is_empty());
    }

    #[test]
    fn test_matches_fields_case_insensitively() {
        let volumes = vec![volume(
            "Volume 1 – Coffee Time\n>drink COFFEE\nLife is good\nCoffee (black)\nTea (not coffee)",
        )];
        let results = search_volumes(&volumes, "coffee");

        assert_eq!(results.len(), 1);
        let fields: Vec<(SearchField, Option<usize>)> = results[0]
            .matches
            .iter()
            .map(|m| (m.field, m.index))
            .collect();
        assert_eq!(
            fields,
            vec![
                (SearchField::Title, None),
                (SearchField::Edition, None),
                (SearchField::BlessingItem, Some(0)),
                (SearchField::BlessingDescription, Some(1)),
                (SearchField::Body, Some(0)),
            ]
        );
    }

    #[test]
    fn test_sorts_by_match_count_then_number() {
        let volumes = vec![
            volume("Volume 3 – Rain\n>rain again"),
            volume("Volume 2 – Sun\n>rain"),
            volume("Volume 1 – Snow\n>rain"),
        ];
        let results = search_volumes(&volumes, "rain");
        let numbers: Vec<u32> = results.iter().map(|r| r.volume.volume_number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_excerpt_short_text_is_unchanged() {
        assert_eq!(excerpt_around("hello world", "world", 100), "hello world");
    }

    #[test]
    fn test_excerpt_centers_on_hit() {
        let text = format!("{}needle{}", "a".repeat(200), "b".repeat(200));
        let excerpt = excerpt_around(&text, "NEEDLE", 100);

        assert!(excerpt.starts_with('…'));
        assert!(excerpt.ends_with('…'));
        assert!(excerpt.contains("needle"));
        assert_eq!(excerpt.chars().count(), 102);
    }

    #[test]
    fn test_excerpt_without_hit_truncates() {
        let text = "x".repeat(150);
        assert_eq!(excerpt_around(&text, "zzz", 100).chars().count(), 100);
    }

    #[test]
    fn test_highlight_query_splits_parts() {
        let parts = highlight_query("Rain, more rain", "rain");
        assert_eq!(
            parts,
            vec![
                HighlightPart {
                    text: "Rain".to_string(),
                    hit: true
                },
                HighlightPart {
                    text: ", more ".to_string(),
                    hit: false
                },
                HighlightPart {
                    text: "rain".to_string(),
                    hit: true
                },
            ]
        );
    }

    #[test]
    fn test_highlight_empty_query() {
        let parts = highlight_query("text", "");
        assert_eq!(
            parts,
            vec![HighlightPart {
                text: "text".to_string(),
                hit: false
            }]
        );
    }

    #[test]
    fn test_search_field_serialization() {
        let json = serde_json::to_string(&SearchField::BlessingItem).unwrap();
        assert_eq!(json, "\"blessing.item\"");
    }
}
