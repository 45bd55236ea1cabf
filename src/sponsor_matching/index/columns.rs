//! Organisation-name column detection.
//!
//! Registry exports have named the organisation column differently over time,
//! so detection walks a fixed list of rules from strictest to loosest and takes
//! the first header matching the first rule that matches anything.

use regex::Regex;
use std::sync::LazyLock;

static ORGANISATION_NAME_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)organi[sz]ation.*name").unwrap());

type ColumnRule = fn(&str) -> bool;

fn is_organisation_name_phrase(header: &str) -> bool {
    ORGANISATION_NAME_PHRASE.is_match(header)
}

fn has_organisation_and_name(header: &str) -> bool {
    let lower = header.to_lowercase();
    lower.contains("organisation") && lower.contains("name")
}

fn has_organization_and_name(header: &str) -> bool {
    let lower = header.to_lowercase();
    lower.contains("organization") && lower.contains("name")
}

fn is_exactly_name(header: &str) -> bool {
    header.eq_ignore_ascii_case("name")
}

fn contains_name(header: &str) -> bool {
    header.to_lowercase().contains("name")
}

/// Detection rules in priority order.
const COLUMN_RULES: &[ColumnRule] = &[
    is_organisation_name_phrase,
    has_organisation_and_name,
    has_organization_and_name,
    is_exactly_name,
    contains_name,
];

/// Pick the organisation-name column from a header row.
///
/// Returns `None` when no header matches any rule.
pub fn detect_organisation_name_column<S: AsRef<str>>(headers: &[S]) -> Option<&str> {
    COLUMN_RULES.iter().find_map(|rule| {
        headers
            .iter()
            .map(|header| header.as_ref())
            .find(|header: &&str| rule(header))
    })
}
