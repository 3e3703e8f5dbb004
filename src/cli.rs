use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use littlesearch::query::TOP_RESULTS;

#[derive(Debug, Parser)]
#[command(
    name = "littlesearch",
    about = "Index documents by keyword and search two keywords at a time"
)]
pub struct Cli {
    /// Corpus directory holding the document and noise word lists
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Document list, relative to the corpus directory
    #[arg(long, global = true)]
    pub docs: Option<PathBuf>,

    /// Noise word list, relative to the corpus directory
    #[arg(long, global = true)]
    pub noise_words: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the keyword each word normalizes to
    Keyword(KeywordArgs),
    /// Show the keywords found in one document
    Scan(ScanArgs),
    /// Show where the last frequency lands in a ranked list
    Insert(InsertArgs),
    /// Build the index and print it
    Index(IndexArgs),
    /// Build the index and find documents containing either keyword
    Search(SearchArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

#[derive(Debug, Parser)]
pub struct KeywordArgs {
    /// Words to normalize
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Document name, relative to the corpus directory
    pub document: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct InsertArgs {
    /// Frequencies in descending order, followed by the one to insert
    #[arg(required = true)]
    pub frequencies: Vec<u32>,
}

#[derive(Debug, Parser)]
pub struct IndexArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// First keyword; wins ties
    pub first: String,

    /// Second keyword
    pub second: String,

    /// Number of documents to return
    #[arg(short = 'n', long, default_value_t = TOP_RESULTS)]
    pub count: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "littlesearch",
            &mut std::io::stdout(),
        );
    }
}
