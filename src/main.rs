use clap::Parser;
use littlesearch::{
    Corpus,
    Occurrence,
    SearchEngine,
    error::{self, Error},
    ranked,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("LITTLESEARCH_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Keyword(args) => cmd_keyword(&corpus(&cli)?, &args.words)?,
        Command::Scan(args) => {
            cmd_scan(&corpus(&cli)?, &args.document, args.json)?;
        }
        Command::Insert(args) => cmd_insert(&args.frequencies)?,
        Command::Index(args) => cmd_index(&corpus(&cli)?, args.json)?,
        Command::Search(args) => cmd_search(&corpus(&cli)?, args)?,
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

fn corpus(cli: &Cli) -> error::Result<Corpus> {
    let mut corpus = Corpus::resolve(cli.dir.as_deref())?;
    if let Some(ref docs) = cli.docs {
        corpus = corpus.with_docs_file(docs);
    }
    if let Some(ref noise) = cli.noise_words {
        corpus = corpus.with_noise_words_file(noise);
    }
    Ok(corpus)
}

fn cmd_keyword(corpus: &Corpus, words: &[String]) -> error::Result<()> {
    let mut engine = SearchEngine::new();
    engine.load_noise_words(corpus)?;

    for word in words {
        let keyword = engine.keyword(word);
        println!("{word}\t{}", keyword.as_deref().unwrap_or("-"));
    }
    Ok(())
}

fn cmd_scan(corpus: &Corpus, document: &str, json: bool) -> error::Result<()> {
    let mut engine = SearchEngine::new();
    engine.load_noise_words(corpus)?;
    let table = engine.scan_document(corpus, document)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else if table.is_empty() {
        println!("No keywords in '{document}'.");
    } else {
        for (keyword, occurrence) in &table {
            println!("{keyword}\t{occurrence}");
        }
    }
    Ok(())
}

fn cmd_insert(frequencies: &[u32]) -> error::Result<()> {
    let sorted_len = frequencies.len().saturating_sub(1);
    if frequencies[..sorted_len].windows(2).any(|w| w[0] < w[1]) {
        return Err(Error::Config(
            "all frequencies but the last must be in descending order".into(),
        ));
    }

    let mut list: Vec<Occurrence> = frequencies
        .iter()
        .enumerate()
        .map(|(i, &f)| Occurrence::new(format!("#{i}"), f))
        .collect();
    let probes = ranked::insert_last(&mut list);

    println!("probes: {probes:?}");
    let rendered: Vec<String> = list.iter().map(ToString::to_string).collect();
    println!("result: {}", rendered.join(" "));
    Ok(())
}

fn cmd_index(corpus: &Corpus, json: bool) -> error::Result<()> {
    let mut engine = SearchEngine::new();
    engine.make_index(corpus)?;
    let index = engine.index();

    if json {
        println!("{}", serde_json::to_string_pretty(index)?);
    } else if index.is_empty() {
        println!("Index is empty.");
    } else {
        for (keyword, occurrences) in index.sorted() {
            let rendered: Vec<String> =
                occurrences.iter().map(ToString::to_string).collect();
            println!("{keyword}: {}", rendered.join(" "));
        }
    }
    Ok(())
}

fn cmd_search(corpus: &Corpus, args: &cli::SearchArgs) -> error::Result<()> {
    let mut engine = SearchEngine::new();
    engine.make_index(corpus)?;
    let results = engine.search(&args.first, &args.second, args.count);

    if args.json {
        let body = json!({
            "first": args.first,
            "second": args.second,
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else if results.is_empty() {
        println!("No results found.");
    } else {
        for (rank, document) in results.iter().enumerate() {
            println!("{:>3}. {document}", rank + 1);
        }
        println!("\n{} result(s)", results.len());
    }
    Ok(())
}
