//! Keyword extraction for analysis responses.
//!
//! Straight frequency counting over a normalized word stream. This is the
//! "current keywords" half of an analysis; the recommended/missing halves
//! come from the model.

use std::collections::HashMap;

/// Filler words never reported as keywords.
const STOPWORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at",
];

/// Words shorter than this are too generic to count.
const MIN_WORD_LEN: usize = 4;
/// Number of keywords reported.
const TOP_KEYWORDS: usize = 15;

/// Returns the most frequent words of `text`, lowercased, with punctuation
/// treated as separators and stopwords and short words removed. The sort is
/// stable over first appearance, so ties resolve deterministically.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for word in lowered
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| w.len() >= MIN_WORD_LEN && !STOPWORDS.contains(w))
    {
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word, 1);
                first_seen.push(word);
            }
        }
    }

    let mut ranked = first_seen;
    ranked.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    ranked.truncate(TOP_KEYWORDS);
    ranked.into_iter().map(str::to_string).collect()
}
