use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    corpus::Corpus,
    error::Result,
    index::MasterIndex,
    keyword::NoiseWords,
    occurrence::Occurrence,
    query::{self, TOP_RESULTS},
    scanner::{self, KeywordTable},
};

/// Counts reported after an index build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: usize,
    pub keywords: usize,
}

/// Owns the noise words and the master index built from a corpus.
#[derive(Debug, Default)]
pub struct SearchEngine {
    noise: NoiseWords,
    index: MasterIndex,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_noise_words(noise: NoiseWords) -> Self {
        Self {
            noise,
            index: MasterIndex::new(),
        }
    }

    pub fn noise_words(&self) -> &NoiseWords {
        &self.noise
    }

    pub fn index(&self) -> &MasterIndex {
        &self.index
    }

    /// Replace the noise words with the corpus's noise word list.
    pub fn load_noise_words(&mut self, corpus: &Corpus) -> Result<()> {
        self.noise = corpus.noise_words()?;
        debug!(count = self.noise.len(), "loaded noise words");
        Ok(())
    }

    /// Normalize a single word against the loaded noise words.
    pub fn keyword(&self, word: &str) -> Option<String> {
        self.noise.normalize(word)
    }

    /// Read and scan one document from the corpus.
    pub fn scan_document(
        &self,
        corpus: &Corpus,
        name: &str,
    ) -> Result<KeywordTable> {
        let text = corpus.read_document(name)?;
        Ok(scanner::scan(name, scanner::tokenize(&text), &self.noise))
    }

    /// Build the index from every document in the corpus's document list.
    ///
    /// Noise words are loaded first. Documents are read and scanned in
    /// parallel, then merged one at a time in list order. If anything
    /// cannot be read the error is returned and the engine keeps its
    /// previous noise words and index.
    pub fn make_index(&mut self, corpus: &Corpus) -> Result<BuildStats> {
        let noise = corpus.noise_words()?;
        let names = unique_names(corpus.document_names()?);

        let tables = names
            .par_iter()
            .map(|name| -> Result<KeywordTable> {
                let text = corpus.read_document(name)?;
                let table = scanner::scan(name, scanner::tokenize(&text), &noise);
                debug!(document = %name, keywords = table.len(), "scanned");
                Ok(table)
            })
            .collect::<Result<Vec<_>>>()?;

        self.noise = noise;
        Ok(self.commit(tables))
    }

    /// Build the index from in-memory `(name, text)` pairs using the current
    /// noise words.
    pub fn index_texts<'a, I>(&mut self, documents: I) -> BuildStats
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut seen = HashSet::new();
        let tables: Vec<_> = documents
            .into_iter()
            .filter(|(name, _)| keep_first(&mut seen, name))
            .map(|(name, text)| {
                scanner::scan(name, scanner::tokenize(text), &self.noise)
            })
            .collect();

        self.commit(tables)
    }

    fn commit(&mut self, tables: Vec<KeywordTable>) -> BuildStats {
        let mut index = MasterIndex::new();
        let documents = tables.len();
        for table in tables {
            index.merge(table);
        }
        self.index = index;

        let stats = BuildStats {
            documents,
            keywords: self.index.len(),
        };
        info!(
            documents = stats.documents,
            keywords = stats.keywords,
            "index built"
        );
        stats
    }

    /// Documents matching `kw1 OR kw2`, best first, at most `limit`.
    ///
    /// Query words go through the same normalization as document text; a
    /// word that does not normalize matches nothing.
    pub fn search(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
        query::merge_top(self.lookup(kw1), self.lookup(kw2), limit)
    }

    /// The five best documents for `kw1 OR kw2`.
    pub fn top5(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.search(kw1, kw2, TOP_RESULTS)
    }

    fn lookup(&self, word: &str) -> &[Occurrence] {
        match self.noise.normalize(word) {
            Some(keyword) => self.index.get(&keyword),
            None => &[],
        }
    }
}

fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| keep_first(&mut seen, name))
        .collect()
}

fn keep_first(seen: &mut HashSet<String>, name: &str) -> bool {
    if seen.insert(name.to_string()) {
        true
    } else {
        warn!(document = %name, "document listed more than once, skipping");
        false
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::error::Error;

    fn write_corpus(root: &Path, docs: &[(&str, &str)], noise: &str) {
        let names: Vec<_> = docs.iter().map(|(n, _)| *n).collect();
        std::fs::write(root.join("docs.txt"), names.join("\n")).unwrap();
        std::fs::write(root.join("noisewords.txt"), noise).unwrap();
        for (name, text) in docs {
            std::fs::write(root.join(name), text).unwrap();
        }
    }

    #[test]
    fn builds_from_corpus_and_answers_queries() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(
            tmp.path(),
            &[
                ("d1.txt", "Alice was beginning."),
                ("d2.txt", "Alice was tired."),
            ],
            "was\n",
        );

        let corpus = Corpus::resolve(Some(tmp.path())).unwrap();
        let mut engine = SearchEngine::new();
        let stats = engine.make_index(&corpus).unwrap();

        assert_eq!(stats, BuildStats { documents: 2, keywords: 3 });
        assert!(!engine.index().contains("was"));
        assert_eq!(engine.top5("alice", "tired"), vec!["d1.txt", "d2.txt"]);
        assert_eq!(engine.top5("tired", "alice"), vec!["d2.txt", "d1.txt"]);
    }

    #[test]
    fn query_words_are_normalized() {
        let mut engine = SearchEngine::with_noise_words(NoiseWords::new(["the"]));
        engine.index_texts([("a", "Rabbit rabbit hole"), ("b", "hole")]);

        assert_eq!(engine.top5("RABBIT!", "the"), vec!["a"]);
        assert!(engine.top5("it's", "the").is_empty());
    }

    #[test]
    fn missing_document_aborts_without_touching_the_index() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path(), &[("d1.txt", "queen hearts")], "the\n");

        let corpus = Corpus::resolve(Some(tmp.path())).unwrap();
        let mut engine = SearchEngine::new();
        engine.make_index(&corpus).unwrap();

        std::fs::write(tmp.path().join("docs.txt"), "d1.txt\nmissing.txt\n")
            .unwrap();
        let err = engine.make_index(&corpus).unwrap_err();

        assert!(matches!(err, Error::NotFound { kind: "document", .. }));
        assert_eq!(engine.index().len(), 2);
        assert_eq!(engine.top5("queen", "hearts"), vec!["d1.txt"]);
    }

    #[test]
    fn missing_noise_words_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("docs.txt"), "").unwrap();

        let corpus = Corpus::resolve(Some(tmp.path())).unwrap();
        let err = SearchEngine::new().make_index(&corpus).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "noise word list", .. }));
    }

    #[test]
    fn duplicate_document_names_are_indexed_once() {
        let mut engine = SearchEngine::new();
        let stats = engine.index_texts([
            ("a", "mock turtle"),
            ("a", "mock turtle"),
            ("b", "turtle"),
        ]);

        assert_eq!(stats.documents, 2);
        assert_eq!(engine.index().get("turtle").len(), 2);
    }

    #[test]
    fn merge_order_follows_document_list() {
        let tmp = tempfile::tempdir().unwrap();
        let docs: Vec<(String, String)> = (0..20)
            .map(|i| (format!("doc{i:02}.txt"), "cheshire cat".to_string()))
            .collect();
        let borrowed: Vec<(&str, &str)> =
            docs.iter().map(|(n, t)| (n.as_str(), t.as_str())).collect();
        write_corpus(tmp.path(), &borrowed, "");

        let corpus = Corpus::resolve(Some(tmp.path())).unwrap();
        let mut engine = SearchEngine::new();
        engine.make_index(&corpus).unwrap();

        let listed: Vec<_> = engine
            .index()
            .get("cheshire")
            .iter()
            .map(|o| o.document.clone())
            .collect();
        let expected: Vec<_> = docs.into_iter().map(|(n, _)| n).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn scan_document_uses_loaded_noise_words() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path(), &[("d.txt", "The queen, the KING.")], "the\n");

        let corpus = Corpus::resolve(Some(tmp.path())).unwrap();
        let mut engine = SearchEngine::new();
        engine.load_noise_words(&corpus).unwrap();

        let table = engine.scan_document(&corpus, "d.txt").unwrap();
        let keywords: Vec<_> = table.keys().map(String::as_str).collect();
        assert_eq!(keywords, vec!["king", "queen"]);
        assert_eq!(engine.keyword("The"), None);
    }
}
