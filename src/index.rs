use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
    occurrence::Occurrence,
    query::{self, TOP_RESULTS},
    ranked,
    scanner::KeywordTable,
};

/// Keyword → occurrences, each list kept in descending frequency order.
#[derive(Debug, Clone, Default)]
pub struct MasterIndex {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl MasterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document's keyword table into the index.
    ///
    /// The table must come from a document that has not been merged yet;
    /// merging the same document twice would list it twice under a keyword.
    pub fn merge(&mut self, table: KeywordTable) {
        for (keyword, occurrence) in table {
            match self.entries.get_mut(&keyword) {
                Some(list) => {
                    list.push(occurrence);
                    ranked::insert_last(list);
                }
                None => {
                    self.entries.insert(keyword, vec![occurrence]);
                }
            }
        }
    }

    /// Occurrences of `keyword`, most frequent first. Unknown keywords
    /// yield an empty slice.
    pub fn get(&self, keyword: &str) -> &[Occurrence] {
        self.entries
            .get(keyword)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries ordered by keyword, for display and serialization.
    pub fn sorted(&self) -> BTreeMap<&str, &[Occurrence]> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect()
    }

    /// Documents containing `kw1` or `kw2`, best first, at most `limit`.
    pub fn top_k(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
        query::merge_top(self.get(kw1), self.get(kw2), limit)
    }

    /// The five best documents for `kw1 OR kw2`.
    pub fn top5(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.top_k(kw1, kw2, TOP_RESULTS)
    }
}

impl Serialize for MasterIndex {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}
