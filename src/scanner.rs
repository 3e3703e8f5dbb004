use std::collections::BTreeMap;

use crate::{keyword::NoiseWords, occurrence::Occurrence};

/// Keywords found in a single document, each with its in-document count.
pub type KeywordTable = BTreeMap<String, Occurrence>;

/// Build the keyword table for `document` from its raw tokens.
///
/// Tokens that do not normalize are skipped; frequencies count keywords,
/// not raw tokens, so `Rabbit` and `rabbit.` land on the same entry.
pub fn scan<'a, I>(document: &str, tokens: I, noise: &NoiseWords) -> KeywordTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = KeywordTable::new();

    for token in tokens {
        let Some(keyword) = noise.normalize(token) else {
            continue;
        };
        table
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }

    table
}

/// Split raw document text into whitespace-delimited tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
