use serde::Serialize;

use crate::phrases::PhraseMatchSet;
use crate::sponsor_matching::MatchResult;

pub const REPORT_FORMAT_VERSION: &str = "1.0.0";

/// JSON report written by the `sponsorcheck` command.
#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub company: Option<String>,
    pub sponsor: Option<MatchResult>,
    pub sponsor_summary: String,
    pub phrases: PhraseMatchSet,
    pub phrase_summary: String,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub index_path: String,
    pub index_entries: usize,
    pub errors: Vec<String>,
    pub output_format_version: String,
}
