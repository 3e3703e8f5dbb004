use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    keyword::NoiseWords,
};

pub const DEFAULT_DOCS_FILE: &str = "docs.txt";
pub const DEFAULT_NOISE_WORDS_FILE: &str = "noisewords.txt";

/// Where the document list, noise words and documents live on disk.
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    docs_file: PathBuf,
    noise_words_file: PathBuf,
}

impl Corpus {
    /// Resolve the corpus directory from, in order of priority:
    /// 1. An explicit path (from --dir)
    /// 2. The LITTLESEARCH_DIR environment variable
    /// 3. The current working directory
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var("LITTLESEARCH_DIR") {
            PathBuf::from(val)
        } else {
            std::env::current_dir()?
        };

        if !root.is_dir() {
            return Err(Error::Config(format!(
                "corpus directory does not exist: {}",
                root.display()
            )));
        }

        Ok(Self {
            docs_file: root.join(DEFAULT_DOCS_FILE),
            noise_words_file: root.join(DEFAULT_NOISE_WORDS_FILE),
            root,
        })
    }

    /// Use a different document list, relative to the corpus root.
    pub fn with_docs_file(mut self, path: &Path) -> Self {
        self.docs_file = self.root.join(path);
        self
    }

    /// Use a different noise word list, relative to the corpus root.
    pub fn with_noise_words_file(mut self, path: &Path) -> Self {
        self.noise_words_file = self.root.join(path);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn docs_file(&self) -> &Path {
        &self.docs_file
    }

    pub fn noise_words_file(&self) -> &Path {
        &self.noise_words_file
    }

    /// Document names from the document list, in listed order.
    pub fn document_names(&self) -> Result<Vec<String>> {
        let text = read(&self.docs_file, "document list")?;
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    pub fn noise_words(&self) -> Result<NoiseWords> {
        let text = read(&self.noise_words_file, "noise word list")?;
        Ok(NoiseWords::new(text.split_whitespace()))
    }

    /// Raw contents of the named document.
    pub fn read_document(&self, name: &str) -> Result<String> {
        read(&self.root.join(name), "document")
    }
}

fn read(path: &Path, kind: &'static str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::from_read(e, kind, path))
}
