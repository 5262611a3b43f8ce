use std::collections::HashMap;

use tracing::debug;

use super::TARGET_TEXTRANK;

/// Keyphrase reconstruction policy.
#[derive(Debug, Clone)]
pub struct KeyphraseConfig {
    /// Keep keywords that never merge into a longer run as single-token
    /// phrases with their original score. When false they are dropped and
    /// only multi-token phrases survive.
    pub keep_isolated: bool,
}

impl Default for KeyphraseConfig {
    fn default() -> Self {
        Self {
            keep_isolated: true,
        }
    }
}

impl KeyphraseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_isolated(mut self, keep: bool) -> Self {
        self.keep_isolated = keep;
        self
    }
}

/// Merge adjacent ranked keywords back into phrases over the original,
/// unfiltered text.
///
/// Keyword matching is case-insensitive and ignores surrounding punctuation.
/// A run of consecutive keyword tokens becomes one phrase; a token carrying
/// a comma or full stop is included in the phrase and then closes it. Each
/// phrase scores the maximum of its constituent keyword scores. Output
/// preserves first-seen phrase order; a phrase seen again keeps its position
/// and its score is raised to the larger value.
pub fn regenerate_keyphrases(
    keyword_scores: &HashMap<String, f64>,
    original_text: &str,
    config: &KeyphraseConfig,
) -> Vec<(String, f64)> {
    let keywords: HashMap<String, f64> = keyword_scores
        .iter()
        .map(|(keyword, &score)| (keyword.to_lowercase(), score))
        .collect();

    let mut phrases: Vec<(String, f64)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let mut run: Vec<String> = Vec::new();
    let mut run_score = f64::NEG_INFINITY;

    let mut flush = |run: &mut Vec<String>, run_score: &mut f64| {
        let keep = run.len() > 1 || (run.len() == 1 && config.keep_isolated);
        if keep {
            let phrase = run.join(" ");
            match positions.get(&phrase) {
                Some(&at) => {
                    if *run_score > phrases[at].1 {
                        phrases[at].1 = *run_score;
                    }
                }
                None => {
                    positions.insert(phrase.clone(), phrases.len());
                    phrases.push((phrase, *run_score));
                }
            }
        }
        run.clear();
        *run_score = f64::NEG_INFINITY;
    };

    for raw in original_text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        match keywords.get(&word) {
            Some(&score) if !word.is_empty() => {
                run.push(word);
                if score > run_score {
                    run_score = score;
                }
                // Sentence-terminating marks close the phrase with this
                // token included.
                if raw.contains(',') || raw.contains('.') {
                    flush(&mut run, &mut run_score);
                }
            }
            _ => flush(&mut run, &mut run_score),
        }
    }
    flush(&mut run, &mut run_score);

    debug!(
        target: TARGET_TEXTRANK,
        "reconstructed {} keyphrases from {} keywords",
        phrases.len(),
        keyword_scores.len()
    );

    phrases
}
