//! Single-pass line classifier for pasted greentext.
//!
//! Expected shape:
//!
//! ```text
//! Volume 12 – The Title
//! >body line
//! >body line
//!
//! Life is good
//! Item (description)
//! Item – description
//! The dream of ...
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Blessing, VolumeError};

const BLESSING_INTRO_KEYWORD: &str = "life is";
const DREAM_KEYWORD: &str = "the dream of";

/// Structured fields extracted from raw greentext.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVolume {
    pub volume_number: Option<u32>,
    pub title: String,
    pub body_lines: Vec<String>,
    pub blessing_intro: String,
    pub blessings: Vec<Blessing>,
    pub dream: String,
    pub edition: String,
}

fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"(?i)Volume\s+(\d+)\s*[–—-]\s*(.*)").expect("header regex is valid")
    })
}

/// `item (description)` or `item – description`, split at the earliest
/// separator. Only the en dash separates; a plain hyphen stays in the item.
fn blessing_regex() -> &'static Regex {
    static BLESSING: OnceLock<Regex> = OnceLock::new();
    BLESSING.get_or_init(|| {
        Regex::new(r"^(.*?)(?:\s*\((.*)\)|\s*–\s*(.*))?$").expect("blessing regex is valid")
    })
}

/// Parses raw pasted greentext into its structured fields.
///
/// Never fails: lines that do not fit a section are left out and missing
/// sections stay empty. Use [`validate_parsed`] before persisting.
pub fn parse_greentext(raw: &str) -> ParsedVolume {
    let mut parsed = ParsedVolume::default();
    if raw.trim().is_empty() {
        return parsed;
    }

    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if let Some(caps) = header_regex().captures(lines[0].trim()) {
        parsed.volume_number = caps[1].parse().ok();
        parsed.title = caps[2].trim().to_string();
        parsed.edition = format!("{} Edition", parsed.title);
    }

    let starts_with = |keyword: &str| {
        lines
            .iter()
            .position(|line| line.trim().to_lowercase().starts_with(keyword))
    };
    let intro_index = starts_with(BLESSING_INTRO_KEYWORD);
    let dream_index = starts_with(DREAM_KEYWORD);

    let body_end = [intro_index, dream_index]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(lines.len());
    if body_end > 1 {
        parsed.body_lines = lines[1..body_end]
            .iter()
            .map(|line| line.trim_end().to_string())
            .collect();
    }

    if let Some(intro) = intro_index {
        parsed.blessing_intro = lines[intro].trim().to_string();
        let end = match dream_index {
            Some(dream) if dream > intro => dream,
            _ => lines.len(),
        };
        parsed.blessings = lines[intro + 1..end]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_blessing(line))
            .collect();
    }

    if let Some(dream) = dream_index {
        parsed.dream = lines[dream].trim().to_string();
    }

    parsed
}

/// Splits one blessing line into item and description.
///
/// Accepts `item (description)`, `item – description` or a bare `item`.
pub fn parse_blessing(line: &str) -> Blessing {
    let line = line.trim();
    match blessing_regex().captures(line) {
        Some(caps) => {
            let description = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            Blessing::new(caps[1].trim(), description)
        }
        None => Blessing::new(line, ""),
    }
}

/// Rejects parser output that cannot become a volume.
pub fn validate_parsed(parsed: &ParsedVolume) -> Result<(), VolumeError> {
    if parsed.volume_number.is_none() || parsed.title.is_empty() {
        return Err(VolumeError::MissingHeader);
    }
    Ok(())
}
