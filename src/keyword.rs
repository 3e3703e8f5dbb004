use std::collections::HashSet;

/// Characters that may trail a word without disqualifying it.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', '?', ':', ';', '!'];

/// Common words that are never indexed.
///
/// Entries are stored lowercased, so lookups are case-insensitive as long as
/// the probe is lowercased too (which [`NoiseWords::normalize`] guarantees).
#[derive(Debug, Clone, Default)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Turn a raw token into a keyword, or reject it.
    ///
    /// A keyword is the lowercased token with any trailing punctuation
    /// stripped, made only of ASCII letters, at least two letters long and
    /// not a noise word. Punctuation anywhere but the tail rejects the token.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let lowered = token.to_ascii_lowercase();
        let stem = lowered.trim_end_matches(TRAILING_PUNCTUATION);

        if !stem.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        if stem.len() <= 1 || self.words.contains(stem) {
            return None;
        }

        Some(stem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> NoiseWords {
        NoiseWords::new(["the", "Was", "and"])
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(noise().normalize("Hello,").as_deref(), Some("hello"));
        assert_eq!(noise().normalize("end?!.").as_deref(), Some("end"));
    }

    #[test]
    fn lowercases_plain_words() {
        assert_eq!(noise().normalize("RaBBit").as_deref(), Some("rabbit"));
    }

    #[test]
    fn rejects_embedded_apostrophe() {
        assert_eq!(noise().normalize("it's"), None);
    }

    #[test]
    fn rejects_punctuation_mid_word() {
        assert_eq!(noise().normalize("wait,what"), None);
        assert_eq!(noise().normalize("e.g."), None);
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert_eq!(noise().normalize("abc1"), None);
        assert_eq!(noise().normalize("(alice)"), None);
        assert_eq!(noise().normalize("-dash"), None);
    }

    #[test]
    fn rejects_single_letters() {
        assert_eq!(noise().normalize("a"), None);
        assert_eq!(noise().normalize("I."), None);
    }

    #[test]
    fn rejects_pure_punctuation() {
        assert_eq!(noise().normalize("..."), None);
        assert_eq!(noise().normalize(""), None);
    }

    #[test]
    fn rejects_noise_words_case_insensitively() {
        assert_eq!(noise().normalize("THE"), None);
        assert_eq!(noise().normalize("was."), None);
        assert!(noise().contains("AND"));
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert_eq!(noise().normalize("café"), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let noise = noise();
        let first = noise.normalize("Rabbit;");
        for _ in 0..3 {
            assert_eq!(noise.normalize("Rabbit;"), first);
        }
    }

    proptest::proptest! {
        #[test]
        fn foreign_characters_always_reject(
            word in "[a-zA-Z]{0,5}[0-9'\\-_@#()]{1,2}[a-zA-Z.,?:;!]{0,5}"
        ) {
            proptest::prop_assert_eq!(NoiseWords::default().normalize(&word), None);
        }

        #[test]
        fn accepted_keywords_are_lowercase_letters(word in "[a-zA-Z]{2,10}[.,?:;!]{0,3}") {
            let keyword = NoiseWords::default().normalize(&word);
            proptest::prop_assert!(keyword.is_some());
            let keyword = keyword.unwrap();
            proptest::prop_assert!(keyword.chars().all(|c| c.is_ascii_lowercase()));
            proptest::prop_assert!(word.to_lowercase().starts_with(&keyword));
        }
    }
}
