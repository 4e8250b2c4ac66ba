//! Sorted keyword tables with binary-search lookup.

use thiserror::Error;

/// Errors produced when building a [`KeywordSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordSetError {
    #[error("keyword table is not sorted: '{previous}' must come after '{next}'")]
    /// Two neighbours are out of ordinal order.
    Unsorted {
        /// The earlier entry.
        previous: &'static str,
        /// The entry that should have come first.
        next: &'static str,
    },

    #[error("duplicate keyword '{0}'")]
    /// The same keyword appears twice.
    Duplicate(&'static str),

    #[error("empty keyword at index {0}")]
    /// A keyword is the empty string.
    Empty(usize),
}

/// A fixed, ordinally sorted, case-sensitive keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    /// Build a keyword set, checking that `words` is sorted and free of duplicates.
    pub fn new(words: &'static [&'static str]) -> Result<Self, KeywordSetError> {
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(KeywordSetError::Empty(index));
        }
        for pair in words.windows(2) {
            match pair[0].cmp(pair[1]) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => return Err(KeywordSetError::Duplicate(pair[0])),
                std::cmp::Ordering::Greater => {
                    return Err(KeywordSetError::Unsorted {
                        previous: pair[0],
                        next: pair[1],
                    });
                }
            }
        }
        Ok(Self { words })
    }

    /// Wrap a table that is known to be sorted (built-in grammar tables).
    ///
    /// Lookup on an unsorted table silently misses entries; built-in tables are covered by
    /// tests that run them through [`KeywordSet::new`].
    pub const fn from_sorted(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// The keywords, in sorted order.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the 1-based table index of `ident` if it is a keyword.
    ///
    /// The probe compares only the first `ident.len()` characters of each keyword; a
    /// candidate whose prefix matches is accepted only when its length is exactly
    /// `ident.len()`, otherwise the search continues below the pivot for a shorter keyword.
    pub fn position(&self, ident: &str) -> Option<usize> {
        let ident = ident.as_bytes();
        let mut base = 0usize;
        let mut count = self.words.len();

        while count > 0 {
            let pivot = count / 2;
            let word = self.words[base + pivot].as_bytes();
            let probe = &word[..word.len().min(ident.len())];
            match probe.cmp(ident) {
                std::cmp::Ordering::Greater => count = pivot,
                std::cmp::Ordering::Less => {
                    base += pivot + 1;
                    count -= pivot + 1;
                }
                std::cmp::Ordering::Equal if word.len() == ident.len() => {
                    return Some(base + pivot + 1);
                }
                // Prefix match on a longer keyword: shorter candidates sort below it.
                std::cmp::Ordering::Equal => count = pivot,
            }
        }
        None
    }

    /// Returns `true` if `ident` is a keyword.
    pub fn contains(&self, ident: &str) -> bool {
        self.position(ident).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORDS: &[&str] = &["and", "and_eq", "int", "int8", "into", "new", "not", "not_eq"];

    #[test]
    fn test_new_accepts_sorted_table() {
        let set = KeywordSet::new(WORDS).unwrap();
        assert_eq!(set.len(), WORDS.len());
        for (i, word) in WORDS.iter().enumerate() {
            assert_eq!(set.position(word), Some(i + 1), "{word}");
        }
    }

    #[test]
    fn test_new_rejects_bad_tables() {
        static UNSORTED: &[&str] = &["while", "do"];
        static DUPLICATE: &[&str] = &["do", "do"];
        static EMPTY: &[&str] = &["", "do"];

        assert_eq!(
            KeywordSet::new(UNSORTED),
            Err(KeywordSetError::Unsorted {
                previous: "while",
                next: "do"
            })
        );
        assert_eq!(KeywordSet::new(DUPLICATE), Err(KeywordSetError::Duplicate("do")));
        assert_eq!(KeywordSet::new(EMPTY), Err(KeywordSetError::Empty(0)));
    }

    #[test]
    fn test_prefixes_are_disambiguated_by_length() {
        let set = KeywordSet::new(WORDS).unwrap();
        assert!(set.contains("int"));
        assert!(set.contains("int8"));
        assert!(!set.contains("in"));
        assert!(!set.contains("intx"));
        assert!(!set.contains("an"));
        assert!(!set.contains("and_"));
        assert!(!set.contains(""));
        assert!(!set.contains("Int"));
    }
}
