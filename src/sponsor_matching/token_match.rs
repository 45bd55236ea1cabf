//! Token overlap matching, the lowest-confidence tier.

use std::collections::HashSet;

use crate::sponsor_matching::index::SponsorIndex;
use crate::sponsor_matching::models::SponsorMatch;
use crate::sponsor_matching::normalize::significant_tokens;

/// Minimum number of shared significant tokens for a candidate to qualify.
///
/// A single shared word is too often coincidental ("services", "care").
pub const MIN_TOKEN_OVERLAP: usize = 2;

/// Count how many distinct query tokens appear in `key`'s significant tokens.
pub fn token_overlap(query_tokens: &HashSet<&str>, key: &str) -> usize {
    let key_tokens: HashSet<&str> = significant_tokens(key).collect();
    query_tokens
        .iter()
        .filter(|token| key_tokens.contains(*token))
        .count()
}

/// Find the index key sharing the most significant tokens with the query.
///
/// Every key is scanned. Candidates below [`MIN_TOKEN_OVERLAP`] are ignored and
/// on equal overlap the key seen first in index order is kept.
pub fn token_match(index: &SponsorIndex, query_key: &str) -> Option<SponsorMatch> {
    let query_tokens: HashSet<&str> = significant_tokens(query_key).collect();
    if query_tokens.len() < MIN_TOKEN_OVERLAP {
        return None;
    }

    let mut best: Option<(&str, &str, usize)> = None;

    for (key, name) in index.iter() {
        let overlap = token_overlap(&query_tokens, key);
        if overlap < MIN_TOKEN_OVERLAP {
            continue;
        }
        if best.is_none_or(|(_, _, best_overlap)| overlap > best_overlap) {
            best = Some((key, name, overlap));
        }
    }

    best.map(|(key, name, overlap)| SponsorMatch::token_overlap(key, name, overlap))
}
