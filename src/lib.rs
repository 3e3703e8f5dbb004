//! littlesearch - a small keyword index with frequency-ranked "OR" search.
//!
//! Documents are split on whitespace, each word is normalized into a
//! keyword (lowercase, trailing punctuation stripped, noise words dropped),
//! and every keyword maps to the documents it occurs in, most frequent
//! first. A query over two keywords returns the top five documents.
//!
//! # Quick start
//!
//! ```
//! use littlesearch::{NoiseWords, SearchEngine};
//!
//! let mut engine = SearchEngine::with_noise_words(NoiseWords::new(["was"]));
//! engine.index_texts([
//!     ("d1.txt", "Alice was beginning."),
//!     ("d2.txt", "Alice was tired."),
//! ]);
//!
//! assert_eq!(engine.top5("alice", "tired"), vec!["d1.txt", "d2.txt"]);
//! ```

pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod keyword;
pub mod occurrence;
pub mod query;
pub mod ranked;
pub mod scanner;

pub use corpus::Corpus;
pub use engine::{BuildStats, SearchEngine};
pub use error::{Error, Result};
pub use index::MasterIndex;
pub use keyword::NoiseWords;
pub use occurrence::Occurrence;
pub use scanner::KeywordTable;
