//! Text normalization, sentence segmentation and word tokenization
//!
//! Sentence boundaries follow the usual English rules: a word ending in `.`,
//! `!` or `?` (optionally followed by closing quotes or brackets) ends a
//! sentence unless it is a known abbreviation, an initial inside a name, or a
//! period followed by a lowercase word. Decimal numbers never split because
//! the period is not followed by whitespace.
//!
//! Word tokenization is Treebank-like: surrounding punctuation becomes
//! separate tokens and English contractions are split (`don't` → `do`,
//! `n't`).

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Lowercased abbreviations (without the final period) that do not end a
/// sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "inc", "ltd", "co", "corp", "dept", "univ", "fig", "figs", "no", "nos", "vol", "vols",
    "pp", "approx", "ca", "gen", "col", "lt", "sgt", "capt", "rev", "hon", "ave", "blvd", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "a.m",
    "p.m", "ph.d",
];

/// Characters that may trail a sentence terminator and still belong to the
/// sentence, e.g. `He said "stop."`.
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '»'];

/// Contraction suffixes split off after an apostrophe.
const CONTRACTION_SUFFIXES: &[&str] = &["s", "re", "ll", "ve", "d", "m"];

/// Number of whitespace-delimited words in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Collapse every run of whitespace (including newlines) into one space and
/// trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Rule-based sentence splitter and word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    abbreviations: FxHashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split whitespace-normalized text into sentences and the lowercase
    /// word tokens of each sentence.
    ///
    /// `tokens[i]` belongs to `sentences[i]`.
    pub fn tokenize(&self, text: &str) -> (Vec<Sentence>, Vec<Vec<String>>) {
        let sentences = self.split_sentences(text);
        let tokens = sentences.iter().map(|s| self.words(&s.text)).collect();
        (sentences, tokens)
    }

    /// Split text into sentences.
    ///
    /// Input is expected to be whitespace-normalized (see
    /// [`normalize_whitespace`]); offsets in the returned [`Sentence`]s refer
    /// to `text`.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let words = word_spans(text);
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        // Index of the first word of the current sentence
        let mut first_word = 0;

        for (i, &(word_start, word_end)) in words.iter().enumerate() {
            let sentence_start = *start.get_or_insert_with(|| {
                first_word = i;
                word_start
            });
            let word = &text[word_start..word_end];
            let next = words.get(i + 1).map(|&(s, e)| &text[s..e]);
            let prev = (i > first_word).then(|| {
                let (s, e) = words[i - 1];
                (&text[s..e], i - 1 == first_word)
            });

            if self.ends_sentence(word, prev, next) {
                sentences.push(Sentence::new(
                    &text[sentence_start..word_end],
                    sentences.len(),
                    sentence_start,
                    word_end,
                ));
                start = None;
            }
        }

        if let (Some(sentence_start), Some(&(_, last_end))) = (start, words.last()) {
            sentences.push(Sentence::new(
                &text[sentence_start..last_end],
                sentences.len(),
                sentence_start,
                last_end,
            ));
        }

        sentences
    }

    /// Tokenize text into lowercase word and punctuation tokens.
    pub fn words(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let core_start = chunk
                .char_indices()
                .find(|(_, c)| c.is_alphanumeric())
                .map(|(i, _)| i);

            let Some(core_start) = core_start else {
                // Pure punctuation: one token per character
                tokens.extend(chunk.chars().map(|c| c.to_string()));
                continue;
            };

            let core_end = chunk
                .char_indices()
                .rev()
                .find(|(_, c)| c.is_alphanumeric())
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(chunk.len());

            tokens.extend(chunk[..core_start].chars().map(|c| c.to_string()));
            split_contraction(&chunk[core_start..core_end].to_lowercase(), &mut tokens);
            tokens.extend(chunk[core_end..].chars().map(|c| c.to_string()));
        }

        tokens
    }

    /// Whether `word` ends its sentence.
    ///
    /// `prev` is the preceding word of the same sentence, paired with whether
    /// that word opened the sentence.
    fn ends_sentence(&self, word: &str, prev: Option<(&str, bool)>, next: Option<&str>) -> bool {
        let core = word.trim_end_matches(CLOSERS);

        if core.ends_with('!') || core.ends_with('?') {
            return true;
        }
        if !core.ends_with('.') {
            return false;
        }

        let Some(next) = next else {
            return true;
        };
        let next_lowercase = next
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .chars()
            .next()
            .is_some_and(char::is_lowercase);

        if next_lowercase {
            return false;
        }

        // Ellipsis before a capitalized word ends the sentence
        if core.ends_with("..") {
            return true;
        }

        let stem = core
            .trim_end_matches('.')
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if self.abbreviations.contains(stem.to_lowercase().as_str()) {
            return false;
        }

        !(is_initial(core) && (follows_name(prev) || is_initial(next)))
    }
}

/// Whether a token consists only of alphabetic characters.
#[inline]
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Byte spans of space-separated words.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    spans
}

/// A single capital letter with one period, e.g. `G.` or `(J.`.
fn is_initial(word: &str) -> bool {
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}

/// An initial continues a name when it opens the sentence, follows another
/// initial, or follows a capitalized word that is not the sentence opener.
/// `Roy G. Biv` keeps going; `Vitamin A. The` splits. An initial followed by
/// another initial (`J. K.`) never ends a sentence either.
fn follows_name(prev: Option<(&str, bool)>) -> bool {
    let Some((prev, prev_opens_sentence)) = prev else {
        return true;
    };
    if is_initial(prev) {
        return true;
    }
    let capitalized = prev
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .next()
        .is_some_and(char::is_uppercase);

    capitalized && !prev_opens_sentence
}

fn split_contraction(core: &str, tokens: &mut Vec<String>) {
    let core = core.replace('’', "'");

    if core.len() > 3 && core.ends_with("n't") {
        tokens.push(core[..core.len() - 3].to_string());
        tokens.push("n't".to_string());
        return;
    }

    if let Some(apos) = core.rfind('\'') {
        let suffix = &core[apos + 1..];
        if apos > 0 && CONTRACTION_SUFFIXES.contains(&suffix) {
            tokens.push(core[..apos].to_string());
            tokens.push(core[apos..].to_string());
            return;
        }
    }

    tokens.push(core);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        Tokenizer::new()
            .split_sentences(text)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    fn tokenize_words(text: &str) -> Vec<String> {
        Tokenizer::new().words(text)
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  one\ntwo\n\n three\t four  "),
            "one two three four"
        );
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one\ntwo   three"), 3);
    }

    #[test]
    fn test_basic_sentences() {
        assert_eq!(
            texts("This is first. Is this second? Yes it is!"),
            vec!["This is first.", "Is this second?", "Yes it is!"]
        );
    }

    #[test]
    fn test_sentence_offsets() {
        let text = "Cells divide. Plants grow.";
        let sentences = Tokenizer::new().split_sentences(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(&text[sentences[1].start..sentences[1].end], "Plants grow.");
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            texts("Dr. Smith met Mr. Jones at noon. They talked."),
            vec!["Dr. Smith met Mr. Jones at noon.", "They talked."]
        );
        assert_eq!(
            texts("Use a mnemonic, e.g. Roy G. Biv, for colors. It helps."),
            vec!["Use a mnemonic, e.g. Roy G. Biv, for colors.", "It helps."]
        );
    }

    #[test]
    fn test_initials_inside_names_do_not_split() {
        assert_eq!(
            texts("The books of J. K. Rowling sold well. Critics agreed."),
            vec!["The books of J. K. Rowling sold well.", "Critics agreed."]
        );
        assert_eq!(
            texts("Ask Harry S. Truman about it. He knew."),
            vec!["Ask Harry S. Truman about it.", "He knew."]
        );
    }

    #[test]
    fn test_capital_letter_after_common_word_splits() {
        assert_eq!(
            texts("Vitamin A. The cell grows."),
            vec!["Vitamin A.", "The cell grows."]
        );
        assert_eq!(
            texts("Cells need vitamin C. Oranges have it."),
            vec!["Cells need vitamin C.", "Oranges have it."]
        );
        assert_eq!(
            texts("Choose plan B. It is cheaper."),
            vec!["Choose plan B.", "It is cheaper."]
        );
    }

    #[test]
    fn test_decimals_do_not_split() {
        assert_eq!(
            texts("Pi is roughly 3.14 in value. It is irrational."),
            vec!["Pi is roughly 3.14 in value.", "It is irrational."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_split() {
        assert_eq!(texts("The ratio is approx. two to one."), vec!["The ratio is approx. two to one."]);
        assert_eq!(texts("See section 4. then continue."), vec!["See section 4. then continue."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            texts("She said \"stop.\" Then she left."),
            vec!["She said \"stop.\"", "Then she left."]
        );
    }

    #[test]
    fn test_trailing_fragment_is_a_sentence() {
        assert_eq!(
            texts("Complete sentence. trailing words without end"),
            vec!["Complete sentence. trailing words without end"]
        );
        assert_eq!(texts("Done. And no period"), vec!["Done.", "And no period"]);
    }

    #[test]
    fn test_empty_text() {
        let (sentences, tokens) = Tokenizer::new().tokenize("");
        assert!(sentences.is_empty());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_pairs_sentences_with_tokens() {
        let (sentences, tokens) = Tokenizer::new().tokenize("Cells divide. Don't stop!");

        assert_eq!(sentences.len(), 2);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], vec!["cells", "divide", "."]);
        assert_eq!(tokens[1], vec!["do", "n't", "stop", "!"]);
    }

    #[test]
    fn test_tokenize_words() {
        assert_eq!(
            tokenize_words("Hello, World! (Really)"),
            vec!["hello", ",", "world", "!", "(", "really", ")"]
        );
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize_words("Don't"), vec!["do", "n't"]);
        assert_eq!(tokenize_words("cell's"), vec!["cell", "'s"]);
        assert_eq!(tokenize_words("they’re"), vec!["they", "'re"]);
        assert_eq!(tokenize_words("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_punctuation() {
        assert_eq!(tokenize_words("3.14"), vec!["3.14"]);
        assert_eq!(tokenize_words("state-of-the-art."), vec!["state-of-the-art", "."]);
        assert_eq!(tokenize_words("..."), vec![".", ".", "."]);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("apple"));
        assert!(is_alphabetic("café"));
        assert!(!is_alphabetic("n't"));
        assert!(!is_alphabetic("42"));
        assert!(!is_alphabetic(""));
    }
}
