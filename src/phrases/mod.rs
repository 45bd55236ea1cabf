//! Sponsorship refusal and requirement phrase scanning.
//!
//! Scans job text against the fixed table in [`patterns`] and reports every
//! label whose pattern matches anywhere in the text.

pub mod patterns;

use serde::Serialize;
use std::fmt;

pub use patterns::{PHRASE_SPECS, PhraseKind, PhraseSpec};

use patterns::COMPILED_PHRASES;

/// Summary shown when no pattern matched.
pub const NO_REFUSAL_FOUND: &str = "No obvious refusal language found";

/// A matched phrase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PhraseLabel {
    pub label: &'static str,
    pub kind: PhraseKind,
}

impl PhraseLabel {
    pub fn is_refusal(&self) -> bool {
        self.kind == PhraseKind::Refusal
    }
}

/// Labels matched in a text, or the explicit "nothing found" state.
///
/// `Matched` always holds at least one label, in phrase table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhraseMatchSet {
    NoneFound,
    Matched { labels: Vec<PhraseLabel> },
}

impl PhraseMatchSet {
    pub fn labels(&self) -> &[PhraseLabel] {
        match self {
            Self::NoneFound => &[],
            Self::Matched { labels } => labels,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l.label == label)
    }

    /// Whether any matched label is an outright refusal rather than a warning.
    pub fn has_refusal(&self) -> bool {
        self.labels().iter().any(PhraseLabel::is_refusal)
    }
}

impl fmt::Display for PhraseMatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneFound => write!(f, "{}", NO_REFUSAL_FOUND),
            Self::Matched { labels } => {
                let joined: Vec<&str> = labels.iter().map(|l| l.label).collect();
                write!(f, "{}", joined.join(" | "))
            }
        }
    }
}

/// Scan `text` for refusal and requirement phrases.
pub fn scan_phrases(text: &str) -> PhraseMatchSet {
    let labels: Vec<PhraseLabel> = COMPILED_PHRASES
        .iter()
        .filter(|phrase| phrase.regex.is_match(text))
        .map(|phrase| PhraseLabel {
            label: phrase.spec.label,
            kind: phrase.spec.kind,
        })
        .collect();

    if labels.is_empty() {
        PhraseMatchSet::NoneFound
    } else {
        PhraseMatchSet::Matched { labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::patterns::{EXPLICIT_NO_SPONSORSHIP, NO_COS, RIGHT_TO_WORK_REQUIRED};

    #[test]
    fn test_explicit_refusal() {
        let result = scan_phrases("Please note we do not sponsor work visas for this role.");
        assert!(result.contains(EXPLICIT_NO_SPONSORSHIP));
        assert!(result.has_refusal());
    }

    #[test]
    fn test_refusal_variants() {
        for text in [
            "This employer does not offer visa sponsorship.",
            "No work sponsorship is available",
            "We cannot sponsor applicants",
            "We don't sponsor",
            "We don\u{2019}t sponsor",
            "WE DO NOT SPONSOR",
        ] {
            assert!(
                scan_phrases(text).contains(EXPLICIT_NO_SPONSORSHIP),
                "expected refusal in {text:?}"
            );
        }
    }

    #[test]
    fn test_no_cos_variants() {
        for text in [
            "There is no Certificate of Sponsorship for this post",
            "No CoS available.",
            "We will not provide a CoS",
            "The trust cannot provide certificate of sponsorship",
        ] {
            assert!(scan_phrases(text).contains(NO_COS), "expected No CoS in {text:?}");
        }
    }

    #[test]
    fn test_cos_requires_word_boundary() {
        assert_eq!(scan_phrases("There are no costs to apply"), PhraseMatchSet::NoneFound);
    }

    #[test]
    fn test_right_to_work_is_a_warning_only() {
        let result = scan_phrases("Applicants must have the right to work in the UK.");
        assert!(result.contains(RIGHT_TO_WORK_REQUIRED));
        assert!(!result.has_refusal());
    }

    #[test]
    fn test_multiple_labels_in_table_order() {
        let result = scan_phrases(
            "Right to work in the UK required. We cannot provide a CoS and we do not sponsor.",
        );
        let labels: Vec<&str> = result.labels().iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![EXPLICIT_NO_SPONSORSHIP, NO_COS, RIGHT_TO_WORK_REQUIRED]
        );
        assert_eq!(
            result.to_string(),
            "Explicit no sponsorship | No CoS | Right to work required (warning)"
        );
    }

    #[test]
    fn test_no_match_returns_sentinel() {
        let result = scan_phrases("A friendly team in Leeds with great benefits.");
        assert_eq!(result, PhraseMatchSet::NoneFound);
        assert!(result.labels().is_empty());
        assert_eq!(result.to_string(), NO_REFUSAL_FOUND);
        assert_eq!(scan_phrases("").to_string(), NO_REFUSAL_FOUND);
    }
}
