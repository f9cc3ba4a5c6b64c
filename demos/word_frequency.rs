//! Word-frequency example
//!
//! Loads a word list, prints the most frequent entries under a prefix and
//! optionally writes a snapshot.
//!
//! Run with: `cargo run --example word_frequency -- --words words.txt --prefix ca`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tallytrie::{DumpFormat, LoadOptions, Trie};

#[derive(Parser)]
#[command(name = "word_frequency")]
#[command(about = "Count words from a word list and query them by prefix", long_about = None)]
struct Cli {
    /// Newline-delimited word list to load.
    #[arg(short, long)]
    words: PathBuf,

    /// Only report entries starting with this prefix.
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Number of entries to print.
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Trim surrounding whitespace from every line.
    #[arg(long, default_value_t = false)]
    trim: bool,

    /// Write a snapshot of the loaded trie here.
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Snapshot encoding: binary or json.
    #[arg(long, default_value_t = DumpFormat::Binary)]
    format: DumpFormat,

    /// Print the tree structure (small inputs only).
    #[arg(long, default_value_t = false)]
    tree: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let options = LoadOptions {
        trim_whitespace: cli.trim,
        ..LoadOptions::default()
    };
    let trie = Trie::load_word_list(&cli.words, &options)
        .with_context(|| format!("Failed to load word list {}", cli.words.display()))?;

    let mut members = trie.prefix_members(&cli.prefix);
    members.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    println!(
        "{} distinct entries, {} under prefix {:?}",
        trie.len(),
        members.len(),
        cli.prefix
    );
    for member in members.iter().take(cli.top) {
        println!("{:>8}  {}", member.count, member.value);
    }

    if cli.tree {
        trie.print_dump();
    }

    if let Some(path) = &cli.dump {
        trie.dump_to_file(path, cli.format)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}
