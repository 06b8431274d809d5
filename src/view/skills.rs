// src/view/skills.rs
// =============================================================================
// Language distribution for the skills section.
//
// For every language declared by at least one repository we count how many
// repositories use it, then express that count as a whole-number percentage
// of all repositories that declare a language.
//
// Percentages are rounded one by one (half rounds up) and are NOT
// normalized, so three languages with one repository each show 33/33/33.
// A total of 99 or 101 is expected, not a bug.
//
// Rust concepts:
// - Stable sorting: sort_by keeps equal elements in their original order
// - Integer arithmetic: Exact rounding without floating point surprises
// =============================================================================

use serde::Serialize;

use crate::github::Repository;

/// The skills view shows this many languages at most.
pub const TOP_LANGUAGES: usize = 6;

/// Colour used for languages missing from the palette.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#667eea";

/// One row of the language distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStat {
    pub name: String,
    pub count: usize,
    pub percentage: u32,
}

// Counts repositories per declared language.
//
// Returns entries sorted by count, highest first. Ties keep the order in
// which the languages first appear in `repositories`. Repositories without a
// language are ignored; if none declare one the result is empty.
pub fn language_stats(repositories: &[Repository]) -> Vec<LanguageStat> {
    // (language, count) in first-seen order. A handful of languages at most,
    // so a linear scan beats hashing and keeps the order for free.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        match counts.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language, 1)),
        }
    }

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<LanguageStat> = counts
        .into_iter()
        .map(|(name, count)| LanguageStat {
            name: name.to_string(),
            count,
            percentage: rounded_percentage(count, total),
        })
        .collect();

    // Stable: equal counts stay in first-seen order
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

// round(100 * count / total), halves rounding up, in integers.
//
// (200c + t) / 2t == floor(100c/t + 1/2)
fn rounded_percentage(count: usize, total: usize) -> u32 {
    ((200 * count + total) / (2 * total)) as u32
}

// Badge colour for a language name; unknown languages share one colour.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "TypeScript" => "#3178c6",
        "JavaScript" => "#f7df1e",
        "Python" => "#3776ab",
        "Dart" => "#0175c2",
        "PHP" => "#777bb4",
        "C#" => "#239120",
        "C++" => "#00599C",
        "HTML" => "#e34c26",
        "CSS" => "#1572b6",
        "Jupyter Notebook" => "#f37626",
        "Batchfile" => "#c1f12e",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}
