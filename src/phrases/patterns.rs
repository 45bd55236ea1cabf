//! Fixed refusal and requirement phrase patterns.
//!
//! Patterns are plain data: adding a phrase means adding an entry here, the
//! scanner itself does not change.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Whether a phrase rules sponsorship out or only states a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKind {
    Refusal,
    Warning,
}

/// Declarative definition of a labelled phrase pattern.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSpec {
    pub label: &'static str,
    pub kind: PhraseKind,
    /// Case-insensitive regular expression source.
    pub pattern: &'static str,
}

pub const EXPLICIT_NO_SPONSORSHIP: &str = "Explicit no sponsorship";
pub const NO_COS: &str = "No CoS";
pub const RIGHT_TO_WORK_REQUIRED: &str = "Right to work required (warning)";

/// Phrase table in reporting order.
pub const PHRASE_SPECS: &[PhraseSpec] = &[
    PhraseSpec {
        label: EXPLICIT_NO_SPONSORSHIP,
        kind: PhraseKind::Refusal,
        pattern: r"does not offer (visa|work)\s*sponsorship|no (visa|work)\s*sponsorship|cannot sponsor|we (do not|don['’]t) sponsor",
    },
    PhraseSpec {
        label: NO_COS,
        kind: PhraseKind::Refusal,
        pattern: r"no\s*(certificate of sponsorship|cos)\b|not provide\s*(a\s*)?cos|cannot provide\s*(a\s*)?(certificate of sponsorship|cos)",
    },
    PhraseSpec {
        label: RIGHT_TO_WORK_REQUIRED,
        kind: PhraseKind::Warning,
        pattern: r"must have (the )?right to work|right to work in the uk required|must already have the right to work",
    },
];

/// A phrase spec with its compiled expression.
#[derive(Debug)]
pub struct CompiledPhrase {
    pub spec: PhraseSpec,
    pub regex: Regex,
}

pub(super) static COMPILED_PHRASES: LazyLock<Vec<CompiledPhrase>> = LazyLock::new(|| {
    PHRASE_SPECS
        .iter()
        .map(|spec| CompiledPhrase {
            spec: *spec,
            regex: Regex::new(&format!("(?i){}", spec.pattern)).unwrap(),
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(COMPILED_PHRASES.len(), PHRASE_SPECS.len());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = PHRASE_SPECS.iter().map(|spec| spec.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), PHRASE_SPECS.len());
    }

    #[test]
    fn test_only_right_to_work_is_a_warning() {
        let warnings: Vec<&str> = PHRASE_SPECS
            .iter()
            .filter(|spec| spec.kind == PhraseKind::Warning)
            .map(|spec| spec.label)
            .collect();
        assert_eq!(warnings, vec![RIGHT_TO_WORK_REQUIRED]);
    }
}
