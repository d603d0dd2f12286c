//! Offline keyword-frequency summarizer.
//!
//! The guaranteed path of the hybrid policy: pure, deterministic,
//! network-free, and incapable of failing. Sentences are ranked by the
//! summed frequency of their non-stopword terms and the top sentences
//! are re-emitted in document order.

use std::collections::HashMap;

use recap_core::defaults::{FALLBACK_SENTENCE_COUNT, SUMMARY_MAX_CHARS};

/// English stopwords excluded from term-frequency ranking.
///
/// Intentionally small: the goal is to stop function words from
/// dominating the ranking, not linguistic completeness.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "because",
    "been", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have",
    "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more",
    "most", "my", "no", "not", "of", "on", "one", "only", "or", "other", "our", "out", "over",
    "she", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "to", "under", "up", "was", "we", "were", "what", "when", "which", "while",
    "who", "will", "with", "would", "you", "your",
];

/// Deterministic extractive summarizer.
#[derive(Debug, Clone)]
pub struct KeywordSummarizer {
    max_sentences: usize,
    max_chars: usize,
}

impl Default for KeywordSummarizer {
    fn default() -> Self {
        Self {
            max_sentences: FALLBACK_SENTENCE_COUNT,
            max_chars: SUMMARY_MAX_CHARS,
        }
    }
}

impl KeywordSummarizer {
    /// Create a summarizer with the default sentence and length caps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of top-ranked sentences to emit.
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.max_sentences = n.max(1);
        self
    }

    /// Set the maximum summary length in characters.
    pub fn with_max_chars(mut self, n: usize) -> Self {
        self.max_chars = n.max(1);
        self
    }

    /// Summarize `text` extractively.
    ///
    /// Returns an empty string for empty or whitespace-only input;
    /// callers map that to the canned empty-content outcome. For any
    /// non-empty input the result is non-empty.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return String::new();
        }

        let frequencies = term_frequencies(text);

        let mut scored: Vec<(usize, u64)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx, sentence_score(s, &frequencies)))
            .collect();

        // Highest score first; earlier sentence wins ties.
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut selected: Vec<usize> = scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(idx, _)| idx)
            .collect();
        selected.sort_unstable();

        let summary = selected
            .into_iter()
            .map(|idx| sentences[idx].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        truncate_chars(&summary, self.max_chars)
    }
}

/// Split text into trimmed, non-empty sentences.
///
/// A sentence ends at `.`, `!`, or `?`, or at a line break. Terminators
/// are kept with their sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch == '\n' {
            push_sentence(&mut sentences, &mut current);
            continue;
        }
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Lowercase word tokens (alphanumeric runs, apostrophes kept inside).
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Count non-stopword term frequencies across the whole document.
fn term_frequencies(text: &str) -> HashMap<String, u64> {
    let mut frequencies = HashMap::new();
    for word in tokenize(text) {
        if !is_stopword(&word) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Score a sentence as the sum of its non-stopword term frequencies.
fn sentence_score(sentence: &str, frequencies: &HashMap<String, u64>) -> u64 {
    tokenize(sentence)
        .filter_map(|w| frequencies.get(&w))
        .sum()
}

/// Truncate to `max_chars` on a character boundary, appending an
/// ellipsis marker when content was dropped. The output never exceeds
/// `max_chars`, so caps too small to hold the marker truncate bare.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut truncated: String = text.chars().take(max_chars - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_empty() {
        let summarizer = KeywordSummarizer::new();
        assert_eq!(summarizer.summarize(""), "");
        assert_eq!(summarizer.summarize("   \n\t  "), "");
    }

    #[test]
    fn test_single_sentence_returned_verbatim() {
        let summarizer = KeywordSummarizer::new();
        let text = "Rust guarantees memory safety without garbage collection.";
        assert_eq!(summarizer.summarize(text), text);
    }

    #[test]
    fn test_nonempty_input_yields_nonempty_summary() {
        let summarizer = KeywordSummarizer::new();
        for text in ["x", "the", "Hello!", "word\nword\nword"] {
            assert!(
                !summarizer.summarize(text).is_empty(),
                "empty summary for input {:?}",
                text
            );
        }
    }

    #[test]
    fn test_ranks_keyword_dense_sentences() {
        let summarizer = KeywordSummarizer::new().with_max_sentences(1);
        let text = "The weather was mild. \
                    Databases store data, and databases index data for queries. \
                    He went home early.";
        let summary = summarizer.summarize(text);
        assert!(summary.contains("databases index data"), "got: {}", summary);
    }

    #[test]
    fn test_selected_sentences_keep_document_order() {
        let summarizer = KeywordSummarizer::new().with_max_sentences(2);
        let text = "Alpha systems process alpha signals first. \
                    Unrelated filler sentence here. \
                    Alpha processing repeats alpha signals again.";
        let summary = summarizer.summarize(text);
        let first = summary.find("first").expect("first sentence missing");
        let second = summary.find("again").expect("second sentence missing");
        assert!(first < second);
    }

    #[test]
    fn test_deterministic() {
        let summarizer = KeywordSummarizer::new();
        let text = "Cache invalidation is hard. Naming things is hard. \
                    Off-by-one errors are the third hard problem. \
                    Hard problems attract hard people.";
        let a = summarizer.summarize(text);
        let b = summarizer.summarize(text);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stopword_only_input_still_summarizes() {
        // Every token is a stopword, so all scores are zero; the leading
        // sentences win on position.
        let summarizer = KeywordSummarizer::new().with_max_sentences(1);
        let summary = summarizer.summarize("And so it was. But then not.");
        assert_eq!(summary, "And so it was.");
    }

    #[test]
    fn test_truncation_on_char_boundary() {
        let summarizer = KeywordSummarizer::new().with_max_chars(20);
        let text = "Ünïcödé chäräctérs éverywhere in this very long single sentence";
        let summary = summarizer.summarize(text);
        assert!(summary.chars().count() <= 20);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_tiny_max_chars_never_exceeded() {
        let text = "A sentence far longer than any of these caps";
        for cap in 1..=5 {
            let summary = KeywordSummarizer::new().with_max_chars(cap).summarize(text);
            assert!(
                summary.chars().count() <= cap,
                "cap {cap} produced {:?}",
                summary
            );
        }
        assert_eq!(truncate_chars("abcdef", 2), "ab");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abcdef", 4), "a...");
    }

    #[test]
    fn test_newlines_split_sentences() {
        let sentences = split_sentences("first line\nsecond line\nthird");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "second line");
    }

    #[test]
    fn test_tokenize_normalizes_case_and_punctuation() {
        let tokens: Vec<String> = tokenize("Don't SHOUT, please!").collect();
        assert_eq!(tokens, vec!["don't", "shout", "please"]);
    }

    #[test]
    fn test_term_frequencies_skip_stopwords() {
        let frequencies = term_frequencies("the cat and the cat");
        assert_eq!(frequencies.get("cat"), Some(&2));
        assert!(frequencies.get("the").is_none());
        assert!(frequencies.get("and").is_none());
    }
}
