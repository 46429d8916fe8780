/// Fixed fallback list used when no other word source yields anything.
pub const FALLBACK_WORDS: [&str; 5] = ["CASA", "GATO", "PERRO", "MESA", "SILLA"];

/// Split raw word-list text into uppercased words.
///
/// Tokens are separated by commas, semicolons, or newlines; each token is
/// trimmed and empty tokens are discarded.
pub fn parse_words(raw: &str) -> Vec<String> {
    raw.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
        .collect()
}

pub fn fallback_words() -> Vec<String> {
    FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
}
