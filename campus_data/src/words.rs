//! Words the engine's input normalizer throws away.
//!
//! Item ids and exit labels are typed by the player, so they have to survive
//! normalization unchanged.

/// Filler words removed from player input ("go to the east" -> "go east").
pub const FILLER_WORDS: &[&str] = &[
    "a", "about", "all", "an", "another", "any", "around", "at", "bad", "beautiful", "been", "better", "big", "can",
    "every", "for", "from", "good", "have", "her", "here", "hers", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "large", "later", "like", "little", "main", "me", "mine", "more", "my", "now", "of", "off", "oh", "on",
    "please", "small", "some", "soon", "that", "the", "then", "this", "those", "through", "till", "to", "towards",
    "until", "us", "want", "we", "what", "when", "why", "wish", "with", "would",
];

/// True if `word` comes out of normalization as exactly itself: a single
/// lowercase token with no punctuation that isn't a filler word.
pub fn is_command_word(word: &str) -> bool {
    !word.is_empty()
        && !word
            .chars()
            .any(|c| c.is_whitespace() || c.is_ascii_punctuation() || c.is_uppercase())
        && !FILLER_WORDS.contains(&word)
}
