//! Match result types.

use serde::Serialize;
use std::fmt;

/// Summary shown when a company was resolved by exact key.
pub const CONFIRMED_SPONSOR_PREFIX: &str = "✅ Sponsor";

/// Summary shown for containment and token-overlap matches.
pub const LIKELY_SPONSOR_PREFIX: &str = "⚠️ Sponsor (likely match)";

/// Summary shown when no registry entry matched.
pub const NOT_FOUND_SUMMARY: &str = "❌ Not found in sponsor list (may be name mismatch)";

/// Summary shown when there was no company name to look up.
pub const NO_COMPANY_SUMMARY: &str = "—";

/// Confidence tier of a match.
///
/// Variants are declared weakest first so that the derived ordering ranks
/// `Exact > ContainsSubstring > TokenOverlap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    TokenOverlap,
    ContainsSubstring,
    Exact,
}

impl MatchConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::ContainsSubstring => "contains_substring",
            Self::TokenOverlap => "token_overlap",
        }
    }
}

/// A registry entry resolved for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SponsorMatch {
    pub confidence: MatchConfidence,

    /// Display name stored in the index for the matched key.
    pub sponsor_name: String,

    /// Canonical key that matched.
    pub index_key: String,

    /// Number of shared significant tokens; only set for token-overlap matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_score: Option<usize>,
}

impl SponsorMatch {
    pub fn exact(index_key: &str, sponsor_name: &str) -> Self {
        Self {
            confidence: MatchConfidence::Exact,
            sponsor_name: sponsor_name.to_string(),
            index_key: index_key.to_string(),
            overlap_score: None,
        }
    }

    pub fn contains_substring(index_key: &str, sponsor_name: &str) -> Self {
        Self {
            confidence: MatchConfidence::ContainsSubstring,
            sponsor_name: sponsor_name.to_string(),
            index_key: index_key.to_string(),
            overlap_score: None,
        }
    }

    pub fn token_overlap(index_key: &str, sponsor_name: &str, overlap_score: usize) -> Self {
        Self {
            confidence: MatchConfidence::TokenOverlap,
            sponsor_name: sponsor_name.to_string(),
            index_key: index_key.to_string(),
            overlap_score: Some(overlap_score),
        }
    }
}

/// Outcome of resolving a company name against the sponsor index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    NoMatch,
    Match(SponsorMatch),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    pub fn sponsor_match(&self) -> Option<&SponsorMatch> {
        match self {
            Self::Match(m) => Some(m),
            Self::NoMatch => None,
        }
    }

    pub fn confidence(&self) -> Option<MatchConfidence> {
        self.sponsor_match().map(|m| m.confidence)
    }
}

impl From<Option<SponsorMatch>> for MatchResult {
    fn from(value: Option<SponsorMatch>) -> Self {
        value.map_or(Self::NoMatch, Self::Match)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "{}", NOT_FOUND_SUMMARY),
            Self::Match(m) if m.confidence == MatchConfidence::Exact => {
                write!(f, "{}: {}", CONFIRMED_SPONSOR_PREFIX, m.sponsor_name)
            }
            Self::Match(m) => write!(f, "{}: {}", LIKELY_SPONSOR_PREFIX, m.sponsor_name),
        }
    }
}
