use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{NodeId, UndirectedGraph};
use crate::nlp::{analyzer, PosTag};
use crate::ranking::{rank, RankConfig, RankScores};
use crate::Result;

use super::{DEFAULT_KEEP_DIVISOR, DEFAULT_PRECEDING_WINDOW, FOLLOWING_WINDOW, TARGET_TEXTRANK};

/// One ranked keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub token: String,
    pub score: f64,
}

/// Keyword extraction parameters.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Word classes retained after tagging; everything else is discarded
    /// before the graph is built.
    pub tag_filter: HashSet<PosTag>,
    /// Preceding positions each token is linked to.
    pub window: usize,
    /// Result cap. `None` keeps one third of the filtered tokens.
    pub count: Option<usize>,
    pub remove_stopwords: bool,
    pub rank: RankConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            tag_filter: default_tag_filter(),
            window: DEFAULT_PRECEDING_WINDOW,
            count: None,
            remove_stopwords: true,
            rank: RankConfig::default(),
        }
    }
}

impl ExtractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_filter(mut self, tag_filter: HashSet<PosTag>) -> Self {
        self.tag_filter = tag_filter;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_remove_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    pub fn with_rank(mut self, rank: RankConfig) -> Self {
        self.rank = rank;
        self
    }
}

/// Open-class tags retained by default.
pub fn default_tag_filter() -> HashSet<PosTag> {
    [
        PosTag::Noun,
        PosTag::ProperNoun,
        PosTag::Adjective,
        PosTag::Verb,
        PosTag::Adverb,
    ]
    .into_iter()
    .collect()
}

/// Extract ranked keywords from `text`.
///
/// Tags and filters the text through the shared analyzer, builds the
/// positional co-occurrence graph over the surviving tokens, ranks it, and
/// returns keywords sorted score-descending with ties broken by first
/// occurrence. Text that filters down to nothing yields an empty list;
/// that is success, not an error.
pub fn extract_keywords(text: &str, config: &ExtractionConfig) -> Result<Vec<Keyword>> {
    let nlp = analyzer();

    let tagged = nlp.tag_parts_of_speech(text);
    let retained: Vec<String> = tagged
        .into_iter()
        .filter(|(_, tag)| config.tag_filter.contains(tag))
        .map(|(token, _)| token)
        .collect();

    let joined = retained.join(" ");
    let filtered = if config.remove_stopwords {
        nlp.remove_stopwords(&joined)
    } else {
        joined
    };

    let tokens = nlp.tokenize(&filtered);
    if tokens.is_empty() {
        debug!(
            target: TARGET_TEXTRANK,
            "no tokens survived filtering, returning empty keyword list"
        );
        return Ok(Vec::new());
    }

    let graph = build_cooccurrence_graph(&tokens, config.window);
    let node_ids = graph.node_ids();
    let scores = rank(&graph, &node_ids, &config.rank)?;

    let ranked = sort_by_score_desc(node_ids, &scores);
    let keep = config
        .count
        .unwrap_or(tokens.len() / DEFAULT_KEEP_DIVISOR);

    debug!(
        target: TARGET_TEXTRANK,
        "extracted {} candidate keywords from {} tokens, keeping {}",
        ranked.len(),
        tokens.len(),
        keep.min(ranked.len())
    );

    Ok(ranked
        .into_iter()
        .take(keep)
        .map(|id| Keyword {
            token: graph.label(id).to_string(),
            score: scores[&id],
        })
        .collect())
}

/// Connect each token position to the `window` preceding and two following
/// positions of the filtered sequence. Tokens are deduplicated into one node
/// per distinct text, so repeated words accumulate parallel edges and
/// adjacent repeats become self-loops.
fn build_cooccurrence_graph(tokens: &[String], window: usize) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    let ids: Vec<NodeId> = tokens.iter().map(|token| graph.create_node(token)).collect();

    for (index, &node) in ids.iter().enumerate() {
        let start = index.saturating_sub(window);
        for &preceding in &ids[start..index] {
            graph.connect_unweighted(node, preceding);
        }
        let end = (index + 1 + FOLLOWING_WINDOW).min(ids.len());
        for &following in &ids[index + 1..end] {
            graph.connect_unweighted(node, following);
        }
    }
    graph
}

/// Sort node ids score-descending; ties fall back to id (first-occurrence)
/// order so output is reproducible.
pub(crate) fn sort_by_score_desc(mut node_ids: Vec<NodeId>, scores: &RankScores) -> Vec<NodeId> {
    node_ids.sort_by(|a, b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(b))
    });
    node_ids
}
