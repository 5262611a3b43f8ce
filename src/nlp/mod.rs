use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

// Module declarations
pub mod heuristic;
pub mod stopwords;
#[cfg(test)]
mod tests;

pub use heuristic::HeuristicAnalyzer;
pub use stopwords::is_stopword;

pub const TARGET_NLP: &str = "nlp";

/// Grammatical word class reported by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Particle,
    Punctuation,
    Other,
}

/// Linguistic services consumed by the extraction pipeline.
///
/// Implementations must be deterministic: identical text must yield
/// identical output across calls, or the idempotence guarantee of the
/// ranking pipeline no longer holds. Implementations are shared read-only
/// across concurrent extraction calls and must be `Send + Sync`.
pub trait LanguageAnalyzer: Send + Sync {
    /// Split text into an ordered token sequence.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Tag each token with its word class, in text order.
    fn tag_parts_of_speech(&self, text: &str) -> Vec<(String, PosTag)>;

    /// Return the text with stop-words removed.
    fn remove_stopwords(&self, text: &str) -> String;

    /// Split text into an ordered sequence of sentences.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Pairwise sentence similarity in `[0, 1]`.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

// Process-wide analyzer handle. Loading a model can be expensive, so it
// happens at most once; afterwards reads are lock-free and unsynchronized.
static ANALYZER: OnceLock<Arc<dyn LanguageAnalyzer>> = OnceLock::new();

/// Install a custom analyzer for the whole process.
///
/// The first caller wins; returns false if a handle already exists
/// (including the lazily-installed default). Call this at startup, before
/// any extraction runs.
pub fn init_analyzer(analyzer: Arc<dyn LanguageAnalyzer>) -> bool {
    ANALYZER.set(analyzer).is_ok()
}

/// Shared read-only analyzer handle, installing the bundled
/// [`HeuristicAnalyzer`] on first use if nothing was injected.
pub fn analyzer() -> Arc<dyn LanguageAnalyzer> {
    ANALYZER
        .get_or_init(|| Arc::new(HeuristicAnalyzer::new()))
        .clone()
}
