//! Source credibility registry.
//!
//! A single immutable table of [`SourceRecord`]s keyed by normalized domain. Each
//! record carries a `reliable` flag, so the trusted and unreliable partitions live
//! in one structure and lookup is one pass over one map.
//!
//! # Lookup order
//!
//! 1. No domain: neutral "Unknown" assessment.
//! 2. Exact domain match.
//! 3. Subdomain match against reliable records, then against unreliable ones.
//!    Matching is by DNS suffix (`domain == key` or `domain` ends with `".{key}"`),
//!    so `evilbbc.com` does not inherit the reputation of `bbc.com`.
//! 4. No match: neutral assessment named after the domain.
//!
//! Records are kept in insertion order, so repeated lookups are stable.

pub mod error;
pub mod seed;
pub mod types;


pub use error::RegistryError;
pub use seed::{RECOMMENDED_OUTLETS, SUSPICIOUS_DOMAIN_PATTERNS, is_suspicious_domain};
pub use types::{
    MatchKind, SourceAssessment, SourceCategory, SourceRecord, SourceTier, SourceTiers,
    source_advice,
};

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::MAX_SCORE;
use crate::domain::normalize_domain;

/// Immutable domain → [`SourceRecord`] table.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    records: IndexMap<String, SourceRecord>,
}

/// On-disk record shape; `reliable` is derived when omitted.
#[derive(Debug, Deserialize)]
struct RegistryEntry {
    domain: String,
    name: String,
    score: u8,
    category: SourceCategory,
    #[serde(default)]
    reliable: Option<bool>,
}

impl From<RegistryEntry> for SourceRecord {
    fn from(entry: RegistryEntry) -> Self {
        let record = SourceRecord::new(entry.domain, entry.name, entry.score, entry.category);
        match entry.reliable {
            Some(reliable) => record.with_reliable(reliable),
            None => record,
        }
    }
}

impl SourceRegistry {
    /// Builds a registry, normalizing domains and validating every record.
    pub fn new(records: impl IntoIterator<Item = SourceRecord>) -> Result<Self, RegistryError> {
        let mut map = IndexMap::new();

        for mut record in records {
            record.domain = normalize_domain(&record.domain);
            Self::validate_record(&record)?;

            match map.entry(record.domain.clone()) {
                Entry::Occupied(entry) => {
                    return Err(RegistryError::DuplicateDomain {
                        domain: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }

        Ok(Self { records: map })
    }

    /// The built-in Nepali and international source table.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(seed::builtin_records())
    }

    /// Parses a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(json)?;
        Self::new(entries.into_iter().map(SourceRecord::from))
    }

    /// Reads and parses a JSON registry file.
    pub fn from_json_file(path: &Path) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let registry = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            records = registry.len(),
            "Loaded source registry from file"
        );

        Ok(registry)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record stored under exactly `domain` (after normalization).
    pub fn get(&self, domain: &str) -> Option<&SourceRecord> {
        self.records.get(&normalize_domain(domain))
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceRecord> {
        self.records.values()
    }

    /// Resolves a domain to a [`SourceAssessment`]. Never fails.
    pub fn lookup(&self, domain: Option<&str>) -> SourceAssessment {
        let Some(raw) = domain else {
            return SourceAssessment::unresolved();
        };

        let domain = normalize_domain(raw);
        if domain.is_empty() {
            return SourceAssessment::unresolved();
        }

        if let Some(record) = self.records.get(&domain) {
            debug!(domain = %domain, source = %record.name, "Exact registry match");
            return SourceAssessment::matched(domain, record, MatchKind::Exact);
        }

        let parent = self
            .find_parent(&domain, true)
            .or_else(|| self.find_parent(&domain, false));

        if let Some(record) = parent {
            debug!(
                domain = %domain,
                parent = %record.domain,
                reliable = record.reliable,
                "Subdomain registry match"
            );
            return SourceAssessment::matched(domain, record, MatchKind::Subdomain);
        }

        let suspicious = is_suspicious_domain(&domain);
        debug!(domain = %domain, suspicious, "No registry match");
        SourceAssessment::unknown(domain, suspicious)
    }

    /// Groups records into reliability tiers, highest score first within each tier.
    pub fn tiers(&self) -> SourceTiers<'_> {
        let mut reliable = Vec::new();
        let mut mixed = Vec::new();
        let mut unreliable = Vec::new();

        for record in self.records.values() {
            match SourceTier::for_score(record.score) {
                SourceTier::Reliable => reliable.push(record),
                SourceTier::Mixed => mixed.push(record),
                SourceTier::Unreliable => unreliable.push(record),
            }
        }

        for tier in [&mut reliable, &mut mixed, &mut unreliable] {
            tier.sort_by(|a, b| b.score.cmp(&a.score));
        }

        SourceTiers {
            reliable,
            mixed,
            unreliable,
            total: self.records.len(),
        }
    }

    fn find_parent(&self, domain: &str, reliable: bool) -> Option<&SourceRecord> {
        self.records
            .values()
            .find(|record| record.reliable == reliable && is_subdomain_of(domain, &record.domain))
    }

    fn validate_record(record: &SourceRecord) -> Result<(), RegistryError> {
        if record.domain.is_empty() {
            return Err(RegistryError::EmptyDomain);
        }

        if record.score > MAX_SCORE {
            return Err(RegistryError::ScoreOutOfRange {
                domain: record.domain.clone(),
                score: record.score,
            });
        }

        if record.reliable && !SourceRecord::default_reliability(record.score, record.category) {
            return Err(RegistryError::InconsistentReliability {
                domain: record.domain.clone(),
                category: record.category,
                score: record.score,
            });
        }

        Ok(())
    }
}

/// `true` when `domain` is a strict subdomain of `parent`.
fn is_subdomain_of(domain: &str, parent: &str) -> bool {
    domain
        .strip_suffix(parent)
        .is_some_and(|prefix| prefix.ends_with('.'))
}
