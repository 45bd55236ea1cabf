//! Organisation name normalization.
//!
//! Maps arbitrary organisation-name strings to the canonical comparison key
//! shared by the index builder and the matcher. Both sides must call
//! [`normalize_company_name`] so that keys compare byte for byte.

/// Legal-entity suffix tokens removed as whole words.
pub const LEGAL_SUFFIXES: &[&str] = &[
    "limited", "ltd", "llp", "plc", "inc", "co", "company", "group", "holdings", "holding",
];

/// Apostrophe variants dropped without leaving a gap ("O'Brien's" -> "obriens").
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Minimum token length (in characters) considered by token overlap.
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Normalize an organisation name into its canonical key.
///
/// The pipeline is:
/// 1. Lower-case everything
/// 2. Replace `&` with the word `and`
/// 3. Strip apostrophes (ASCII and U+2019) without inserting a space
/// 4. Replace anything that is not `a-z`, `0-9` or whitespace with a space
/// 5. Drop legal-entity suffix tokens matched as whole words
/// 6. Collapse whitespace runs and trim
///
/// Total and idempotent: any input, including the empty string, produces a key,
/// and normalizing a key again yields the same key. Names made only of suffix
/// tokens normalize to the empty string.
pub fn normalize_company_name(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());

    for c in raw.to_lowercase().chars() {
        match c {
            '&' => cleaned.push_str(" and "),
            c if APOSTROPHES.contains(&c) => {}
            'a'..='z' | '0'..='9' => cleaned.push(c),
            // whitespace and every other character become a separator
            _ => cleaned.push(' '),
        }
    }

    cleaned
        .split_whitespace()
        .filter(|token| !is_legal_suffix(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `token` is one of the [`LEGAL_SUFFIXES`].
pub fn is_legal_suffix(token: &str) -> bool {
    LEGAL_SUFFIXES.contains(&token)
}

/// Split a canonical key into the tokens that count towards overlap.
pub fn significant_tokens(key: &str) -> impl Iterator<Item = &str> {
    key.split(' ')
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
}
