//! Reserved word table.
//!
//! The lexer never owns the list of reserved words; it is handed a
//! [`KeywordSet`] and asks it one question: is this exact text reserved?
//! The set is immutable after construction, so a single instance can be
//! shared across threads behind an `Arc`.

use rustc_hash::FxHashSet;

use crate::error::{KeywordError, KeywordResult};

/// Reserved words of the Uit language, used when no other list is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "let", "print", "if", "then", "else", "end", "while", "do", "and", "or", "not", "true",
    "false",
];

/// An immutable set of reserved words queried by exact, case-sensitive match.
///
/// # Examples
///
/// ```
/// use uitc_util::KeywordSet;
///
/// let keywords = KeywordSet::default();
/// assert!(keywords.contains("let"));
/// assert!(!keywords.contains("Let"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<Box<str>>,
}

impl KeywordSet {
    /// Builds a set from arbitrary words without validating them.
    ///
    /// Words that the identifier scanner can never produce (for example
    /// `"9x"`) are accepted but will simply never match.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| Box::from(w.as_ref())).collect(),
        }
    }

    /// Builds a set from user-supplied words, rejecting entries that could
    /// never be scanned as a single identifier-shaped run.
    ///
    /// ```
    /// use uitc_util::KeywordSet;
    ///
    /// assert!(KeywordSet::try_from_words(["var", "print"]).is_ok());
    /// assert!(KeywordSet::try_from_words(["_hidden"]).is_err());
    /// ```
    pub fn try_from_words<I, S>(words: I) -> KeywordResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(KeywordError::Empty { index });
            }
            if !is_keyword_shaped(word) {
                return Err(KeywordError::Malformed {
                    word: word.to_string(),
                });
            }
            set.insert(Box::from(word));
        }
        Ok(Self { words: set })
    }

    /// Returns true if `word` is reserved.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word is reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the reserved words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

// Mirrors what the lexer's identifier sub-scan accepts.
fn is_keyword_shaped(word: &str) -> bool {
    let mut bytes = word.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_all_builtin_words() {
        let keywords = KeywordSet::default();
        assert_eq!(keywords.len(), DEFAULT_KEYWORDS.len());
        for word in DEFAULT_KEYWORDS {
            assert!(keywords.contains(word), "missing {}", word);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let keywords = KeywordSet::new(["let"]);
        assert!(keywords.contains("let"));
        assert!(!keywords.contains("LET"));
        assert!(!keywords.contains("le"));
        assert!(!keywords.contains("lets"));
    }

    #[test]
    fn test_empty_set() {
        let keywords = KeywordSet::new(Vec::<String>::new());
        assert!(keywords.is_empty());
        assert!(!keywords.contains("let"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let keywords = KeywordSet::new(["let", "let", "print"]);
        assert_eq!(keywords.len(), 2);
    }

    #[test]
    fn test_try_from_words_accepts_identifier_shapes() {
        let keywords = KeywordSet::try_from_words(["var", "x2", "end_if"]).unwrap();
        assert!(keywords.contains("end_if"));
        assert_eq!(keywords.iter().count(), 3);
    }

    #[test]
    fn test_try_from_words_rejects_empty() {
        let err = KeywordSet::try_from_words(["let", ""]).unwrap_err();
        assert_eq!(err, KeywordError::Empty { index: 1 });
    }

    #[test]
    fn test_try_from_words_rejects_malformed() {
        for word in ["1st", "_x", "a-b", "café"] {
            assert!(
                matches!(
                    KeywordSet::try_from_words([word]),
                    Err(KeywordError::Malformed { .. })
                ),
                "{} should be rejected",
                word
            );
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let keywords = std::sync::Arc::new(KeywordSet::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let keywords = keywords.clone();
                std::thread::spawn(move || keywords.contains("print"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_property_valid_words_round_trip() {
        use proptest::prelude::*;

        proptest!(|(word in "[a-zA-Z][a-zA-Z0-9_]{0,20}")| {
            let keywords = KeywordSet::try_from_words([word.as_str()]).unwrap();
            assert!(keywords.contains(&word));
        });
    }
}
