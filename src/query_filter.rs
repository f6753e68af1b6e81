//! Heuristics for deciding whether a chat message is a search query.
//!
//! In group deployments the bot sees every message; these rules keep it
//! from searching on chatter. Transports call [`is_probable_query`] before
//! handing text to the pipeline. Private-chat deployments can skip this
//! entirely.

/// Common chat abbreviations that mark a message as conversation, not a title.
const CHAT_ABBREVIATIONS: &[&str] = &[
    "plz", "gimme", "haven't", "wanna", "gonna", "lemme", "y'all", "ain't", "idk", "tbh", "brb",
    "omg", "btw", "lmk", "ikr", "fyi", "thx", "b/c", "np", "asap",
];

/// Maximum word count for a plausible title query.
const MAX_QUERY_WORDS: usize = 7;

/// Whether `text` looks like a title search rather than chat noise.
///
/// Rejects:
/// - empty/whitespace-only text
/// - more than 7 words
/// - anything containing a URL or an @-handle
/// - text starting with a digit or punctuation
/// - text containing common chat abbreviations
pub fn is_probable_query(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    if trimmed.split_whitespace().count() > MAX_QUERY_WORDS {
        return false;
    }

    if trimmed.contains("http://") || trimmed.contains("https://") {
        return false;
    }

    if trimmed.contains('@') {
        return false;
    }

    let first = match trimmed.chars().next() {
        Some(c) => c,
        None => return false,
    };
    if first.is_ascii_digit() || first.is_ascii_punctuation() {
        return false;
    }

    let lowered = trimmed.to_lowercase();
    if CHAT_ABBREVIATIONS
        .iter()
        .any(|abbr| lowered.contains(abbr))
    {
        return false;
    }

    true
}
