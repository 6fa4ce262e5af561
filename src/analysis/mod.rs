//! Surface-level content signals.
//!
//! A deterministic scan for sensationalist phrasing (English and Nepali), shouting
//! and exclamation abuse. The signals are reported alongside the verdict and feed
//! the heuristic scorer; they never enter the hybrid blend directly.


use serde::Serialize;

/// English clickbait and sensationalist phrases (matched case-insensitively).
pub const CLICKBAIT_PHRASES: &[&str] = &[
    "shocking",
    "you won't believe",
    "exposed",
    "secret revealed",
    "government hiding",
    "doctors hate",
    "one weird trick",
    "breaking:",
    "urgent:",
    "share before deleted",
    "mainstream media won't tell you",
    "what they don't want you to know",
    "miracle cure",
    "exposed truth",
    "shocking revelation",
];

/// Nepali sensationalist phrases (matched verbatim).
pub const NEPALI_SENSATIONAL_PHRASES: &[&str] = &[
    "सनसनी",
    "खुलासा",
    "गोप्य",
    "चौंकाउने",
    "शेयर गर्नुहोस्",
    "भाइरल",
    "सत्य यस्तो",
];

const CAPS_RATIO_LIMIT: f64 = 0.2;
const EXCLAMATION_LIMIT: usize = 3;

const POINTS_PER_PHRASE: u32 = 5;
const POINTS_FOR_CAPS: u32 = 10;
const POINTS_FOR_EXCLAMATION: u32 = 5;
const MAX_PENALTY_POINTS: u32 = 40;

/// Signals extracted from a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSignals {
    pub clickbait_phrases: Vec<String>,
    pub sensational_phrases: Vec<String>,
    /// Share of characters that are uppercase, rounded to three decimals.
    pub caps_ratio: f64,
    pub exclamation_count: usize,
    /// Human-readable descriptions of the signals that fired.
    pub flags: Vec<String>,
    /// Credibility penalty in `0.0..=0.4`.
    pub penalty: f64,
}

impl ContentSignals {
    /// Signals for content that was not inspected.
    pub fn empty() -> Self {
        Self {
            clickbait_phrases: Vec::new(),
            sensational_phrases: Vec::new(),
            caps_ratio: 0.0,
            exclamation_count: 0,
            flags: Vec::new(),
            penalty: 0.0,
        }
    }

    #[inline]
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Scans `text` for sensationalism markers.
pub fn analyze_content(text: &str) -> ContentSignals {
    let lowered = text.to_lowercase();

    let clickbait_phrases: Vec<String> = CLICKBAIT_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    let sensational_phrases: Vec<String> = NEPALI_SENSATIONAL_PHRASES
        .iter()
        .filter(|phrase| text.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    let total_chars = text.chars().count();
    let caps_ratio = if total_chars == 0 {
        0.0
    } else {
        let upper = text.chars().filter(|c| c.is_uppercase()).count();
        ((upper as f64 / total_chars as f64) * 1000.0).round() / 1000.0
    };

    let exclamation_count = text.matches('!').count();
    let excessive_caps = caps_ratio > CAPS_RATIO_LIMIT;
    let excessive_exclamation = exclamation_count > EXCLAMATION_LIMIT;

    let mut flags = Vec::new();
    if !clickbait_phrases.is_empty() {
        flags.push(format!(
            "Contains {} clickbait/sensational phrase(s)",
            clickbait_phrases.len()
        ));
    }
    if !sensational_phrases.is_empty() {
        flags.push(format!(
            "Contains {} Nepali sensational phrase(s)",
            sensational_phrases.len()
        ));
    }
    if excessive_caps {
        flags.push("Excessive use of capital letters".to_string());
    }
    if excessive_exclamation {
        flags.push("Excessive exclamation marks".to_string());
    }

    let mut points = (clickbait_phrases.len() + sensational_phrases.len()) as u32 * POINTS_PER_PHRASE;
    if excessive_caps {
        points += POINTS_FOR_CAPS;
    }
    if excessive_exclamation {
        points += POINTS_FOR_EXCLAMATION;
    }
    let penalty = f64::from(points.min(MAX_PENALTY_POINTS)) / 100.0;

    ContentSignals {
        clickbait_phrases,
        sensational_phrases,
        caps_ratio,
        exclamation_count,
        flags,
        penalty,
    }
}
