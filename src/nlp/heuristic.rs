use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::{stopwords, LanguageAnalyzer, PosTag};

// Closed-class lexicons for the heuristic tagger. Open-class words fall
// through to suffix rules and the noun default.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "another", "such",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down", "out", "off",
    "over", "under", "onto", "upon", "within", "without", "across", "along", "around", "behind",
    "beside", "near", "toward", "towards",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "whose", "which",
    "what", "something", "anything", "nothing", "everything", "someone", "anyone", "everyone",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "until", "since", "when", "whenever", "where", "wherever", "whereas", "than", "as",
    "whether", "that",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "done", "have",
    "has", "had", "having", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "not",
];

lazy_static! {
    static ref DETERMINER_SET: HashSet<&'static str> = DETERMINERS.iter().copied().collect();
    static ref ADPOSITION_SET: HashSet<&'static str> = ADPOSITIONS.iter().copied().collect();
    static ref PRONOUN_SET: HashSet<&'static str> = PRONOUNS.iter().copied().collect();
    static ref CONJUNCTION_SET: HashSet<&'static str> = CONJUNCTIONS.iter().copied().collect();
    static ref AUXILIARY_SET: HashSet<&'static str> = AUXILIARIES.iter().copied().collect();
    static ref NON_ASCII: Regex = Regex::new(r"[^\x20-\x7E]+").unwrap();
}

/// Deterministic rule-based analyzer bundled as the default collaborator.
///
/// No model files and no randomness: closed-class lexicons, suffix rules,
/// unicode segmentation, and the word-overlap sentence similarity from the
/// TextRank paper. Deployments with a real tagger inject their own
/// [`LanguageAnalyzer`] instead.
#[derive(Debug, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

/// NFKC-normalize and replace non-ASCII runs with spaces, mirroring the
/// transliterate-then-strip cleanup the pipeline has always applied.
pub fn clean_text(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    NON_ASCII.replace_all(&normalized, " ").into_owned()
}

/// Strip leading and trailing punctuation, keeping interior characters
/// (hyphens, apostrophes) intact.
fn trim_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_numeral(core: &str) -> bool {
    core.replace(',', "").parse::<f64>().is_ok()
}

fn tag_word(core: &str, sentence_initial: bool) -> PosTag {
    if core.is_empty() {
        return PosTag::Punctuation;
    }

    let lower = core.to_lowercase();
    if DETERMINER_SET.contains(lower.as_str()) {
        return PosTag::Determiner;
    }
    if ADPOSITION_SET.contains(lower.as_str()) {
        return PosTag::Adposition;
    }
    if PRONOUN_SET.contains(lower.as_str()) {
        return PosTag::Pronoun;
    }
    if CONJUNCTION_SET.contains(lower.as_str()) {
        return PosTag::Conjunction;
    }
    if AUXILIARY_SET.contains(lower.as_str()) {
        return PosTag::Particle;
    }
    if is_numeral(core) {
        return PosTag::Numeral;
    }

    if lower.len() > 3 {
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if lower.ends_with("ing") || lower.ends_with("ize") || lower.ends_with("ise") {
            return PosTag::Verb;
        }
        if lower.ends_with("ous")
            || lower.ends_with("ful")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }
    }

    if !sentence_initial && core.chars().next().is_some_and(|c| c.is_uppercase()) {
        return PosTag::ProperNoun;
    }

    PosTag::Noun
}

fn ends_sentence(raw: &str) -> bool {
    raw.ends_with('.') || raw.ends_with('!') || raw.ends_with('?')
}

impl LanguageAnalyzer for HeuristicAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn tag_parts_of_speech(&self, text: &str) -> Vec<(String, PosTag)> {
        let cleaned = clean_text(text);
        let mut tagged = Vec::new();
        let mut sentence_initial = true;

        for raw in cleaned.split_whitespace() {
            let core = trim_token(raw);
            let tag = tag_word(core, sentence_initial);
            let token = if core.is_empty() { raw } else { core };
            tagged.push((token.to_string(), tag));
            sentence_initial = ends_sentence(raw);
        }
        tagged
    }

    fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|token| !stopwords::is_stopword(trim_token(token)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Word-overlap similarity from the TextRank paper:
    /// `|common words| / (ln|A| + ln|B|)`, clamped to `[0, 1]`. Sentences
    /// too short for the log denominator score 0.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let words_a: HashSet<String> = a.unicode_words().map(str::to_lowercase).collect();
        let words_b: HashSet<String> = b.unicode_words().map(str::to_lowercase).collect();

        if words_a.len() < 2 || words_b.len() < 2 {
            return 0.0;
        }

        let common = words_a.intersection(&words_b).count() as f64;
        let denominator = (words_a.len() as f64).ln() + (words_b.len() as f64).ln();
        (common / denominator).clamp(0.0, 1.0)
    }
}
