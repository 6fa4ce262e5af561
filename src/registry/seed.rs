//! Built-in registry contents.
//!
//! Scores are on the `0..=100` scale. Insertion order matters: subdomain matching
//! walks records in the order listed here.

use super::types::{SourceCategory, SourceRecord};

use SourceCategory::*;

const NEPAL_SOURCES: &[(&str, &str, u8, SourceCategory)] = &[
    ("kathmandupost.com", "The Kathmandu Post", 85, Mainstream),
    ("ekantipur.com", "Kantipur", 85, Mainstream),
    ("onlinekhabar.com", "Online Khabar", 80, Mainstream),
    ("setopati.com", "Setopati", 80, Mainstream),
    ("ratopati.com", "Ratopati", 75, Mainstream),
    ("nepalnews.com", "Nepal News", 75, Mainstream),
    ("thehimalayantimes.com", "The Himalayan Times", 85, Mainstream),
    ("myrepublica.nagariknetwork.com", "Republica", 85, Mainstream),
    ("risingnepaldaily.com", "The Rising Nepal", 80, State),
    ("gorkhapatraonline.com", "Gorkhapatra", 80, State),
    ("nepalitimes.com", "Nepali Times", 85, Mainstream),
    ("techlekh.com", "TechLekh", 70, Mainstream),
    ("nagariknews.nagariknetwork.com", "Nagarik News", 80, Mainstream),
    ("annapurnapost.com", "Annapurna Post", 80, Mainstream),
    ("nayapatrikadaily.com", "Naya Patrika", 80, Mainstream),
    ("himalpress.com", "Himal Press", 75, Mainstream),
    ("nepalsamaya.com", "Nepal Samaya", 75, Mainstream),
    ("dainiknepal.com", "Dainik Nepal", 70, Mainstream),
];

const INTERNATIONAL_SOURCES: &[(&str, &str, u8, SourceCategory)] = &[
    ("reuters.com", "Reuters", 95, Wire),
    ("apnews.com", "Associated Press", 95, Wire),
    ("afp.com", "AFP", 90, Wire),
    ("bbc.com", "BBC", 90, International),
    ("theguardian.com", "The Guardian", 85, International),
    ("nytimes.com", "New York Times", 85, International),
    ("washingtonpost.com", "Washington Post", 85, International),
    ("aljazeera.com", "Al Jazeera", 80, International),
    ("cnn.com", "CNN", 75, International),
    ("ndtv.com", "NDTV", 75, International),
    ("hindustantimes.com", "Hindustan Times", 75, International),
    ("timesofindia.indiatimes.com", "Times of India", 70, International),
    ("snopes.com", "Snopes", 95, FactCheck),
    ("factcheck.org", "FactCheck.org", 95, FactCheck),
    ("politifact.com", "PolitiFact", 90, FactCheck),
    ("boomlive.in", "BOOM", 90, FactCheck),
    ("altnews.in", "Alt News", 90, FactCheck),
    ("vishvasnews.com", "Vishvas News", 85, FactCheck),
    ("southasiacheck.org", "South Asia Check", 90, FactCheck),
];

const UNRELIABLE_SOURCES: &[(&str, &str, u8, SourceCategory)] = &[
    ("infowars.com", "InfoWars", 10, Conspiracy),
    ("naturalnews.com", "Natural News", 15, Conspiracy),
    ("beforeitsnews.com", "Before It's News", 10, Conspiracy),
    ("worldnewsdailyreport.com", "World News Daily Report", 5, Satire),
    ("theonion.com", "The Onion", 5, Satire),
    ("babylonbee.com", "Babylon Bee", 5, Satire),
    ("dailybuzzlive.com", "Daily Buzz Live", 15, Misinformation),
    ("yournewswire.com", "Your News Wire", 10, Misinformation),
    ("newspunch.com", "News Punch", 10, Misinformation),
];

/// Fragments that show up in throwaway or imitation news domains.
pub const SUSPICIOUS_DOMAIN_PATTERNS: &[&str] = &[
    "breaking-news",
    "viral-news",
    "truth-revealed",
    "exposed-news",
    "real-truth",
    "insider-info",
    ".blogspot.",
    ".wordpress.com",
    "-news24",
    "-times24",
    "-today24",
];

/// Outlets suggested to readers for cross-checking a story.
pub const RECOMMENDED_OUTLETS: &[&str] = &[
    "https://kathmandupost.com",
    "https://www.nepalitimes.com",
    "https://thehimalayantimes.com",
    "https://www.bbc.com/nepali",
    "https://southasiacheck.org",
];

/// Returns the built-in records in registry order.
pub fn builtin_records() -> Vec<SourceRecord> {
    NEPAL_SOURCES
        .iter()
        .chain(INTERNATIONAL_SOURCES)
        .chain(UNRELIABLE_SOURCES)
        .map(|&(domain, name, score, category)| SourceRecord::new(domain, name, score, category))
        .collect()
}

/// Returns `true` if `domain` contains any [`SUSPICIOUS_DOMAIN_PATTERNS`] fragment.
pub fn is_suspicious_domain(domain: &str) -> bool {
    SUSPICIOUS_DOMAIN_PATTERNS
        .iter()
        .any(|pattern| domain.contains(pattern))
}
