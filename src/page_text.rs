//! Helpers for turning scraped job-page text into lookup inputs.
//!
//! These sit at the boundary with page extraction: they work on plain text and
//! candidate strings already pulled from a page, never on markup.

use regex::Regex;

/// Maximum number of characters of page text passed to phrase scanning.
pub const TEXT_SAMPLE_CHARS: usize = 6000;

const MIN_CANDIDATE_CHARS: usize = 2;
const MAX_CANDIDATE_CHARS: usize = 120;
const SHORT_NAME_MAX_WORDS: usize = 6;

/// Substrings that make a candidate unlikely to be an employer name.
const CANDIDATE_PENALTIES: &[(&str, i32)] = &[
    ("http", 5),
    ("search", 3),
    ("results", 3),
    ("paypal", 2),
    ("glossary", 2),
];

/// Words that suggest a candidate is an organisation name.
const COMPANY_WORDS: &[&str] = &[
    "ltd", "limited", "plc", "llp", "inc", "company", "group", "services",
];
const COMPANY_WORD_BONUS: i32 = 2;
const SHORT_NAME_BONUS: i32 = 1;

/// Replace non-breaking spaces, collapse whitespace runs and trim.
pub fn clean_text(value: &str) -> String {
    // U+00A0 counts as whitespace here
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The leading part of a page text used for phrase scanning.
pub fn text_sample(text: &str) -> &str {
    match text.char_indices().nth(TEXT_SAMPLE_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Value following `label` either on the next line or after a colon.
///
/// Matching is case-insensitive; returns `None` when the label is absent or
/// the value is blank.
pub fn labelled_value(label: &str, text: &str) -> Option<String> {
    let label = regex::escape(label);
    let next_line = Regex::new(&format!(r"(?i){}[ \t]*\r?\n\s*([^\n]+)", label)).ok()?;
    let after_colon = Regex::new(&format!(r"(?i){}\s*:\s*([^\n]+)", label)).ok()?;

    next_line
        .captures(text)
        .or_else(|| after_colon.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|value| clean_text(value.as_str()))
        .filter(|value| !value.is_empty())
}

/// Employer name read from labelled page text ("Employer name", then "Employer").
pub fn employer_from_text(text: &str) -> Option<String> {
    labelled_value("Employer name", text).or_else(|| labelled_value("Employer", text))
}

fn candidate_score(candidate: &str) -> i32 {
    let lower = candidate.to_lowercase();

    let penalty: i32 = CANDIDATE_PENALTIES
        .iter()
        .filter(|(needle, _)| lower.contains(*needle))
        .map(|(_, weight)| weight)
        .sum();

    let has_company_word = lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| COMPANY_WORDS.contains(&word));

    let mut bonus = 0;
    if has_company_word {
        bonus += COMPANY_WORD_BONUS;
    }
    if candidate.split(' ').count() <= SHORT_NAME_MAX_WORDS {
        bonus += SHORT_NAME_BONUS;
    }

    bonus - penalty
}

/// Pick the most plausible employer name among scraped candidates.
///
/// Candidates are cleaned and kept when 2 to 120 characters long. The highest
/// scoring one wins; on equal scores the earliest candidate is kept.
pub fn pick_best_company_name<S: AsRef<str>>(candidates: &[S]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| clean_text(candidate.as_ref()))
        .filter(|candidate| {
            let len = candidate.chars().count();
            (MIN_CANDIDATE_CHARS..=MAX_CANDIDATE_CHARS).contains(&len)
        })
        .map(|candidate| (candidate_score(&candidate), candidate))
        .fold(None, |best: Option<(i32, String)>, (score, candidate)| match best {
            Some((best_score, _)) if best_score >= score => best,
            _ => Some((score, candidate)),
        })
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace_and_nbsp() {
        assert_eq!(clean_text("  Acme\u{00A0}\u{00A0}Ltd \n\t Leeds "), "Acme Ltd Leeds");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_text_sample_truncates_on_char_boundary() {
        let long = "é".repeat(TEXT_SAMPLE_CHARS + 10);
        assert_eq!(text_sample(&long).chars().count(), TEXT_SAMPLE_CHARS);
        assert_eq!(text_sample("short"), "short");
    }

    #[test]
    fn test_labelled_value_next_line() {
        let text = "Job title\nStaff Nurse\nEmployer name\n  Leeds Teaching Hospitals NHS Trust \nSalary\n£28,407";
        assert_eq!(
            labelled_value("Employer name", text).as_deref(),
            Some("Leeds Teaching Hospitals NHS Trust")
        );
        assert_eq!(labelled_value("salary", text).as_deref(), Some("£28,407"));
    }

    #[test]
    fn test_labelled_value_after_colon() {
        let text = "Employer: Acme Widgets Ltd\nLocation: Leeds";
        assert_eq!(labelled_value("Employer", text).as_deref(), Some("Acme Widgets Ltd"));
        assert_eq!(labelled_value("Pay", text), None);
    }

    #[test]
    fn test_employer_from_text_prefers_employer_name() {
        let text = "Employer: Parent Group\nEmployer name\nChild Trust";
        assert_eq!(employer_from_text(text).as_deref(), Some("Child Trust"));
        assert_eq!(employer_from_text("Nothing useful here"), None);
    }

    #[test]
    fn test_pick_best_prefers_company_like_names() {
        let candidates = [
            "Search results for nurse jobs",
            "https://example.com/jobs",
            "Acme Widgets Ltd",
            "A",
        ];
        assert_eq!(
            pick_best_company_name(&candidates).as_deref(),
            Some("Acme Widgets Ltd")
        );
    }

    #[test]
    fn test_pick_best_keeps_first_on_tie() {
        let candidates = ["Northwind", "Contoso"];
        assert_eq!(pick_best_company_name(&candidates).as_deref(), Some("Northwind"));
    }

    #[test]
    fn test_pick_best_with_no_usable_candidates() {
        let candidates = ["", "  ", "x"];
        assert_eq!(pick_best_company_name(&candidates), None);
        let empty: [&str; 0] = [];
        assert_eq!(pick_best_company_name(&empty), None);
    }
}
