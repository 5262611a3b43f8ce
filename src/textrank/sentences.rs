use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::graph::UndirectedGraph;
use crate::nlp::analyzer;
use crate::ranking::{rank, RankConfig};
use crate::{KeyrankError, Result};

use super::keywords::sort_by_score_desc;
use super::TARGET_TEXTRANK;

/// Sentence extraction input: either one text to be segmented by the
/// analyzer, or an explicit sentence sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentenceInput {
    Text(String),
    Sentences(Vec<String>),
}

impl TryFrom<Value> for SentenceInput {
    type Error = KeyrankError;

    fn try_from(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|_| {
            KeyrankError::UnsupportedInput(
                "sentence input must be a single text or a sequence of texts".to_string(),
            )
        })
    }
}

/// One ranked sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSentence {
    pub sentence: String,
    pub score: f64,
}

/// Rank sentences by mutual similarity.
///
/// Builds the complete similarity graph over the sentences, scores it with
/// power iteration, and returns sentences sorted score-descending with ties
/// broken by input order. Empty input yields an empty list.
pub fn extract_sentences(input: SentenceInput, config: &RankConfig) -> Result<Vec<RankedSentence>> {
    let sentences = match input {
        SentenceInput::Text(text) => analyzer().split_sentences(&text),
        SentenceInput::Sentences(sentences) => sentences,
    };
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let graph = build_similarity_graph(&sentences);
    let node_ids = graph.node_ids();
    let scores = rank(&graph, &node_ids, config)?;

    debug!(
        target: TARGET_TEXTRANK,
        "ranked {} sentences over {} similarity edges",
        graph.node_count(),
        graph.edge_count()
    );

    let ranked = sort_by_score_desc(node_ids, &scores);
    Ok(ranked
        .into_iter()
        .map(|id| RankedSentence {
            sentence: graph.label(id).to_string(),
            score: scores[&id],
        })
        .collect())
}

/// Complete undirected graph over the sentences: one edge per unordered
/// pair, weighted by analyzer similarity. Identical sentences share a node,
/// so their self-pairs are skipped.
pub(crate) fn build_similarity_graph(sentences: &[String]) -> UndirectedGraph {
    let nlp = analyzer();
    let mut graph = UndirectedGraph::new();
    let ids: Vec<_> = sentences
        .iter()
        .map(|sentence| graph.create_node(sentence))
        .collect();

    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if ids[i] == ids[j] {
                continue;
            }
            let weight = nlp.similarity(&sentences[i], &sentences[j]).clamp(0.0, 1.0);
            graph.connect(ids[i], ids[j], weight);
        }
    }
    graph
}
