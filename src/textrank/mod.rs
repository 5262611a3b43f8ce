// Module declarations
pub mod keyphrases;
pub mod keywords;
pub mod sentences;

pub use keyphrases::{regenerate_keyphrases, KeyphraseConfig};
pub use keywords::{default_tag_filter, extract_keywords, ExtractionConfig, Keyword};
pub use sentences::{extract_sentences, RankedSentence, SentenceInput};

pub const TARGET_TEXTRANK: &str = "textrank";

/// Preceding positions each token is linked to by default (the paper's
/// co-occurrence window of 2).
pub const DEFAULT_PRECEDING_WINDOW: usize = 2;

/// Following positions each token is linked to. Fixed by the co-occurrence
/// relation, not configurable.
pub const FOLLOWING_WINDOW: usize = 2;

/// Divisor for the default keyword count: keep one third of the filtered
/// tokens when the caller does not cap the result.
pub const DEFAULT_KEEP_DIVISOR: usize = 3;
