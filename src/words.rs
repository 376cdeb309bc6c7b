use crate::frequency::FrequencyTable;

/// Characters stripped from both ends of every token.
pub const DEFAULT_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

pub const DECODE_FAILURE_MESSAGE: &str = "File encoding error: could not read as UTF-8.";
pub const NO_TOKENS_MESSAGE: &str = "Warning: file contained no readable tokens.";

/// Lowercases tokens after stripping a fixed set of edge punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNormalizer {
    punctuation: Vec<char>,
}

impl WordNormalizer {
    pub fn new(punctuation: &[char]) -> Self {
        Self {
            punctuation: punctuation.to_vec(),
        }
    }

    /// Normalized form of `token`, or `None` if nothing is left after
    /// stripping.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let stripped = token.trim_matches(|c: char| self.punctuation.contains(&c));
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_lowercase())
        }
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

/// Normalized words in input order plus any source-level messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordScan {
    pub words: Vec<String>,
    pub messages: Vec<String>,
}

/// Decode `bytes` as UTF-8 and split them into normalized words.
///
/// A decode failure or a source without any tokens produces a single
/// message and no words; it is never an error. Tokens made only of
/// punctuation are dropped silently.
pub fn scan_words(bytes: &[u8], normalizer: &WordNormalizer) -> WordScan {
    let Ok(text) = std::str::from_utf8(bytes) else {
        log::warn!("Word source is not valid UTF-8");
        return WordScan {
            words: Vec::new(),
            messages: vec![DECODE_FAILURE_MESSAGE.to_owned()],
        };
    };
    scan_text(text, normalizer)
}

/// Split already-decoded text on whitespace runs and normalize each token.
pub fn scan_text(text: &str, normalizer: &WordNormalizer) -> WordScan {
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return WordScan {
            words: Vec::new(),
            messages: vec![NO_TOKENS_MESSAGE.to_owned()],
        };
    }

    WordScan {
        words: tokens.filter_map(|token| normalizer.normalize(token)).collect(),
        messages: Vec::new(),
    }
}

/// Count each normalized word once per occurrence.
pub fn count_frequencies(words: &[String]) -> FrequencyTable<String> {
    words.iter().cloned().collect()
}
