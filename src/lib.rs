pub mod cli;
pub mod models;
pub mod page_text;
pub mod phrases;
pub mod sponsor_matching;

pub use phrases::{PhraseMatchSet, scan_phrases};
pub use sponsor_matching::{
    BuildMetadata, ConfigurationError, MatchConfidence, MatchResult, SponsorIndex,
    SponsorIndexCache, SponsorMatch, SponsorMatchEngine, build_index, find_sponsor_match,
    normalize_company_name,
};
