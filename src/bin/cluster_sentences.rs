use std::io::Read;

use anyhow::Result;
use clap::Parser;

use keyrank::clustering::cluster_sentences;
use keyrank::logging::configure_logging;
use keyrank::nlp::analyzer;
use keyrank::ranking::RankConfig;
use keyrank::textrank::{extract_sentences, SentenceInput};

/// Split text into sentences and either cluster them by similarity or rank
/// them, printing the result as JSON.
#[derive(Parser)]
#[command(name = "cluster_sentences")]
struct Args {
    /// Text to analyze; reads stdin when omitted.
    text: Option<String>,

    /// Rank sentences instead of clustering them.
    #[arg(short, long)]
    rank: bool,
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

    if args.rank {
        let ranked = extract_sentences(SentenceInput::Text(text), &RankConfig::default())?;
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        let sentences = analyzer().split_sentences(&text);
        let clusters = cluster_sentences(&sentences);
        println!("{}", serde_json::to_string_pretty(&clusters)?);
    }

    Ok(())
}
