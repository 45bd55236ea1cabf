//! Sponsor Matching Engine
//!
//! Resolves noisy organisation names against the register of licensed sponsors.
//! The register is compressed into a [`SponsorIndex`] keyed by canonical name;
//! queries are normalized the same way and resolved through three tiers of
//! decreasing confidence: exact key, substring containment, token overlap.

pub mod cache;
pub mod contains_match;
pub mod exact_match;
pub mod index;
pub mod models;
pub mod normalize;
#[cfg(test)]
mod test_utils;
pub mod token_match;

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

pub use cache::SponsorIndexCache;
pub use contains_match::contains_match;
pub use exact_match::exact_match;
pub use index::{
    BuildMetadata, ConfigurationError, RegistryRow, SponsorIndex, build_index,
    build_index_with_source, detect_organisation_name_column, read_registry_csv,
};
pub use models::{MatchConfidence, MatchResult, SponsorMatch};
pub use normalize::normalize_company_name;
pub use token_match::token_match;

/// Resolve a raw company name against `index`.
///
/// 1. Normalize the name; an empty key short-circuits to `NoMatch`
/// 2. Exact key lookup
/// 3. Containment scan over every key, first hit in index order wins
/// 4. Token overlap scan over every key, best overlap of at least two wins
///
/// Never fails: the absence of a sponsor is reported as [`MatchResult::NoMatch`].
pub fn find_sponsor_match(company: &str, index: &SponsorIndex) -> MatchResult {
    let query_key = normalize_company_name(company);
    if query_key.is_empty() {
        return MatchResult::NoMatch;
    }

    let found = exact_match(index, &query_key)
        .or_else(|| contains_match(index, &query_key))
        .or_else(|| token_match(index, &query_key));

    if let Some(m) = &found {
        debug!(
            "Matched {:?} to {:?} ({})",
            company,
            m.sponsor_name,
            m.confidence.as_str()
        );
    }

    found.into()
}

/// Sponsor lookups over a shared, read-only index.
#[derive(Debug, Clone)]
pub struct SponsorMatchEngine {
    index: Arc<SponsorIndex>,
}

impl SponsorMatchEngine {
    pub fn new(index: Arc<SponsorIndex>) -> Self {
        Self { index }
    }

    /// Create an engine over the index held by `cache`, loading it if needed.
    pub fn from_cache(cache: &SponsorIndexCache) -> anyhow::Result<Self> {
        Ok(Self::new(cache.get_or_load()?))
    }

    pub fn index(&self) -> &SponsorIndex {
        &self.index
    }

    /// Resolve a single company name.
    pub fn match_company(&self, company: &str) -> MatchResult {
        find_sponsor_match(company, &self.index)
    }

    /// Resolve many company names in parallel, keeping input order.
    pub fn match_companies<S: AsRef<str> + Sync>(&self, companies: &[S]) -> Vec<MatchResult> {
        companies
            .par_iter()
            .map(|company| self.match_company(company.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sponsor_matching::test_utils::index_of;

    #[test]
    fn test_empty_query_is_no_match() {
        let index = index_of(&["Acme Ltd", "Beta Foods"]);
        assert_eq!(find_sponsor_match("", &index), MatchResult::NoMatch);
        assert_eq!(find_sponsor_match("   ", &index), MatchResult::NoMatch);
        assert_eq!(find_sponsor_match("Ltd Ltd", &index), MatchResult::NoMatch);
    }

    #[test]
    fn test_exact_beats_containment() {
        let index = index_of(&["Barclays Bank International", "Barclays Bank"]);
        let result = find_sponsor_match("Barclays Bank PLC", &index);
        let m = result.sponsor_match().unwrap();
        assert_eq!(m.confidence, MatchConfidence::Exact);
        assert_eq!(m.sponsor_name, "Barclays Bank");
    }

    #[test]
    fn test_containment_beats_overlap() {
        let index = index_of(&["Northwest Regional Health Trust", "Northwest Health"]);
        let result = find_sponsor_match("Northwest Health Services", &index);
        let m = result.sponsor_match().unwrap();
        assert_eq!(m.confidence, MatchConfidence::ContainsSubstring);
        assert_eq!(m.index_key, "northwest health");
    }

    #[test]
    fn test_tesco_exact_scenario() {
        let index = index_of(&["Tesco Stores Limited"]);
        let result = find_sponsor_match("Tesco Stores Ltd", &index);
        assert_eq!(result.confidence(), Some(MatchConfidence::Exact));
        assert_eq!(result.sponsor_match().unwrap().sponsor_name, "Tesco Stores Limited");
    }

    #[test]
    fn test_barclays_containment_scenario() {
        let index = SponsorIndex::from_entries([("barclays bank", "Barclays Bank PLC")]);
        let result = find_sponsor_match("Barclays Bank UK PLC International Division", &index);
        assert_eq!(result.confidence(), Some(MatchConfidence::ContainsSubstring));
    }

    #[test]
    fn test_northwest_overlap_scenario() {
        let index = SponsorIndex::from_entries([(
            "northwest regional health trust",
            "Northwest Regional Health Trust",
        )]);

        let result = find_sponsor_match("Northwest Health Services", &index);
        let m = result.sponsor_match().unwrap();
        assert_eq!(m.confidence, MatchConfidence::TokenOverlap);
        assert_eq!(m.overlap_score, Some(2));

        assert_eq!(
            find_sponsor_match("Northwest Bakery Services", &index),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_engine_batch_keeps_input_order() {
        let engine = SponsorMatchEngine::new(Arc::new(index_of(&[
            "Tesco Stores Limited",
            "Barclays Bank PLC",
        ])));
        let results = engine.match_companies(&["Barclays Bank", "Unknown Widgets", "TESCO STORES"]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].confidence(), Some(MatchConfidence::Exact));
        assert_eq!(results[1], MatchResult::NoMatch);
        assert_eq!(
            results[2].sponsor_match().unwrap().sponsor_name,
            "Tesco Stores Limited"
        );
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = SponsorMatchEngine::new(Arc::new(index_of(&["Acme Widgets Ltd"])));
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.match_company("Acme Widgets")))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_match());
            }
        });
    }
}
