use std::collections::HashMap;
use std::io::Read;

use anyhow::Result;
use clap::Parser;

use keyrank::logging::configure_logging;
use keyrank::textrank::{
    extract_keywords, regenerate_keyphrases, ExtractionConfig, KeyphraseConfig,
};

/// Extract ranked keywords (optionally merged into keyphrases) from text
/// and print them as JSON.
#[derive(Parser)]
#[command(name = "extract_keywords")]
struct Args {
    /// Text to analyze; reads stdin when omitted.
    text: Option<String>,

    /// Maximum number of keywords to keep (default: one third of the
    /// filtered tokens).
    #[arg(short, long)]
    count: Option<usize>,

    /// Co-occurrence window: preceding positions each token links to.
    #[arg(short, long, default_value_t = 2)]
    window: usize,

    /// Merge adjacent keywords back into phrases over the original text.
    #[arg(short, long)]
    phrases: bool,

    /// Keep stop-words in the token stream.
    #[arg(long)]
    keep_stopwords: bool,
}

fn main() -> Result<()> {
    configure_logging();
    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut config = ExtractionConfig::default()
        .with_window(args.window)
        .with_remove_stopwords(!args.keep_stopwords);
    if let Some(count) = args.count {
        config = config.with_count(count);
    }

    let keywords = extract_keywords(&text, &config)?;

    if args.phrases {
        let scores: HashMap<String, f64> = keywords
            .iter()
            .map(|keyword| (keyword.token.clone(), keyword.score))
            .collect();
        let phrases = regenerate_keyphrases(&scores, &text, &KeyphraseConfig::default());
        println!("{}", serde_json::to_string_pretty(&phrases)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    }

    Ok(())
}
