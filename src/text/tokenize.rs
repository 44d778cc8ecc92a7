// Word tokenization: whitespace split, punctuation strip, lower-case.
//
// There are two paths. `tokenize` also breaks hyphenated compounds apart
// ("well-known" -> "well", "known") and is the one every histogram comparison
// goes through, so counts stay comparable between any two texts. `tokenize_lines`
// keeps hyphens intact and is only used for line-oriented word lists.

/// Characters stripped from both ends of a word: ASCII punctuation plus
/// ASCII whitespace (including vertical tab, which `is_ascii_whitespace` omits).
fn is_strippable(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_whitespace() || c == '\x0b'
}

/// Strip leading/trailing punctuation and whitespace, then lower-case.
///
/// An all-punctuation word normalizes to the empty string. That empty token
/// is kept, not filtered, so it shows up in histograms as its own key.
pub fn normalize(word: &str) -> String {
    word.trim_matches(is_strippable).to_lowercase()
}

/// Split text into normalized tokens, treating hyphens as word separators.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let dehyphenated = word.replace('-', " ");
        for piece in dehyphenated.split_whitespace() {
            tokens.push(normalize(piece));
        }
    }
    tokens
}

/// Split text line by line into normalized tokens without hyphen splitting.
pub fn tokenize_lines(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(str::split_whitespace)
        .map(normalize)
        .collect()
}
