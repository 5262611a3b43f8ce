use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::graph::NodeId;
use crate::textrank::sentences::build_similarity_graph;


pub const TARGET_CLUSTERING: &str = "clustering";

/// Edge-weight percentile at and below which similarity links are discarded
/// before component detection.
pub const SPARSIFY_PERCENTILE: f64 = 75.0;

/// Group sentences into clusters of mutually reachable similar sentences.
///
/// Builds the complete similarity graph, drops every edge at or below the
/// 75th percentile of edge weights, and returns the connected components of
/// what remains, in node-id order. Every node id appears in exactly one
/// component; nodes that lose all their edges become singletons. No ranking
/// happens here.
pub fn cluster_sentences(sentences: &[String]) -> Vec<BTreeSet<NodeId>> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let graph = build_similarity_graph(sentences);
    let threshold = percentile(graph.edge_weights().collect(), SPARSIFY_PERCENTILE);

    let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); graph.node_count()];
    let mut surviving = 0usize;
    for edge in graph.edges() {
        if edge.weight > threshold {
            adjacency[edge.a].push(edge.b);
            if edge.a != edge.b {
                adjacency[edge.b].push(edge.a);
            }
            surviving += 1;
        }
    }

    let components = connected_components(graph.node_count(), &adjacency);
    debug!(
        target: TARGET_CLUSTERING,
        "clustered {} sentences into {} components ({} of {} edges above threshold {:.4})",
        graph.node_count(),
        components.len(),
        surviving,
        graph.edge_count(),
        threshold
    );
    components
}

/// Linear-interpolation percentile over the samples. An empty sample set
/// yields infinity, so no edge can survive sparsification.
fn percentile(mut samples: Vec<f64>, pct: f64) -> f64 {
    if samples.is_empty() {
        return f64::INFINITY;
    }
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let rank = pct / 100.0 * (samples.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        samples[low]
    } else {
        let fraction = rank - low as f64;
        samples[low] + fraction * (samples[high] - samples[low])
    }
}

/// Standard undirected reachability: BFS from each unvisited node in id
/// order, so component order is deterministic.
fn connected_components(node_count: usize, adjacency: &[Vec<NodeId>]) -> Vec<BTreeSet<NodeId>> {
    let mut seen = vec![false; node_count];
    let mut components = Vec::new();

    for start in 0..node_count {
        if seen[start] {
            continue;
        }
        let mut component = BTreeSet::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;

        while let Some(node) = queue.pop_front() {
            component.insert(node);
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    components
}
