//! Exact key matching, the highest-confidence tier.

use crate::sponsor_matching::index::SponsorIndex;
use crate::sponsor_matching::models::SponsorMatch;

/// Look the canonical query key up verbatim.
pub fn exact_match(index: &SponsorIndex, query_key: &str) -> Option<SponsorMatch> {
    index
        .get(query_key)
        .map(|name| SponsorMatch::exact(query_key, name))
}
