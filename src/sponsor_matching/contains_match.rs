//! Substring containment matching.
//!
//! Catches truncated or expanded names, such as a division name against its
//! parent entity. The scan is greedy: the first key in index order that contains
//! the query, or is contained by it, wins.

use crate::sponsor_matching::index::SponsorIndex;
use crate::sponsor_matching::models::SponsorMatch;

/// Find the first index key that contains `query_key` or is contained in it.
///
/// Empty keys never match; an empty query would otherwise hit every key.
pub fn contains_match(index: &SponsorIndex, query_key: &str) -> Option<SponsorMatch> {
    if query_key.is_empty() {
        return None;
    }

    index
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .find(|(key, _)| key.contains(query_key) || query_key.contains(*key))
        .map(|(key, name)| SponsorMatch::contains_substring(key, name))
}
