//! Pretty output formatting.

use lifequest_core::volume::{
    Blessing, CatalogueEntry, ParsedVolume, SearchMatch, SearchResult, Volume,
};
use lifequest_core::workout::WorkoutLog;

fn format_blessing(blessing: &Blessing) -> String {
    let mut output = format!("  - {}", blessing.item);
    if !blessing.description.is_empty() {
        output.push_str(&format!(": {}", blessing.description));
    }
    output
}

/// Format a locally parsed volume for display.
pub fn format_parsed(parsed: &ParsedVolume) -> String {
    let number = parsed
        .volume_number
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let mut output = format!("Volume {} - {}", number, parsed.title);
    output.push_str(&format!("\n  Body lines: {}", parsed.body_lines.len()));
    if !parsed.blessing_intro.is_empty() {
        output.push_str(&format!("\n  Intro: {}", parsed.blessing_intro));
    }
    output.push_str(&format!("\n  Blessings ({})", parsed.blessings.len()));
    for blessing in &parsed.blessings {
        output.push_str(&format!("\n{}", format_blessing(blessing)));
    }
    if !parsed.dream.is_empty() {
        output.push_str(&format!("\n  Dream: {}", parsed.dream));
    }
    if !parsed.edition.is_empty() {
        output.push_str(&format!("\n  Edition: {}", parsed.edition));
    }
    output
}

/// Format a volume for display.
pub fn format_volume(volume: &Volume) -> String {
    format!(
        "Volume {} - {} [{}]\n  ID: {}\n  Blessings: {}\n  Ratings: {}",
        volume.volume_number,
        volume.title,
        volume.status.as_str(),
        volume.id,
        volume.blessings.len(),
        volume.ratings.len()
    )
}

/// Format volumes for display.
pub fn format_volumes(volumes: &[Volume]) -> String {
    if volumes.is_empty() {
        return "No volumes found.".to_string();
    }
    let mut output = format!("VOLUMES ({})\n", volumes.len());
    output.push_str(&"-".repeat(40));
    for volume in volumes {
        output.push_str(&format!("\n{}", format_volume(volume)));
        output.push('\n');
    }
    output
}

/// Format the public catalogue as one line per volume.
pub fn format_catalogue(entries: &[CatalogueEntry]) -> String {
    if entries.is_empty() {
        return "No published volumes.".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{:>4}  {}", entry.volume_number, entry.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_match(found: &SearchMatch) -> String {
    let field = serde_json::to_value(found.field)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    match found.index {
        Some(index) => format!("    {}[{}]: {}", field, index, found.excerpt),
        None => format!("    {}: {}", field, found.excerpt),
    }
}

/// Format search results grouped by volume.
pub fn format_search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No matches.".to_string();
    }
    let mut output = format!("MATCHES ({})\n", results.len());
    output.push_str(&"-".repeat(40));
    for result in results {
        output.push_str(&format!(
            "\nVolume {} - {}",
            result.volume.volume_number, result.volume.title
        ));
        for found in &result.matches {
            output.push_str(&format!("\n{}", format_match(found)));
        }
        output.push('\n');
    }
    output
}

/// One line per session: date, name and exercise names.
pub fn format_workouts(workouts: &[WorkoutLog]) -> String {
    if workouts.is_empty() {
        return "No workouts logged.".to_string();
    }
    workouts
        .iter()
        .map(|log| {
            let exercises: Vec<&str> = log
                .exercises
                .iter()
                .map(|e| e.exercise_name.as_str())
                .collect();
            format!("{}  {} ({})", log.date, log.workout_name, exercises.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
