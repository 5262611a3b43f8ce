use std::collections::HashMap;

use tracing::debug;

use crate::graph::{NodeId, UndirectedGraph};
use crate::{KeyrankError, Result};

use super::{
    DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, TARGET_RANKING,
};

/// Per-invocation score mapping. Produced fresh by every `rank` call and
/// never shared across runs.
pub type RankScores = HashMap<NodeId, f64>;

/// Power-iteration parameters.
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

impl RankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(KeyrankError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(KeyrankError::InvalidArgument(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold < 0.0 {
            return Err(KeyrankError::InvalidArgument(format!(
                "convergence_threshold must be finite and non-negative, got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }
}

/// Build the adjacency matrix for `nodes` in caller-supplied order.
///
/// `matrix[row][col]` holds the summed weight of all edges between
/// `nodes[col]` and `nodes[row]`; self-loops land on the diagonal, once per
/// loop edge. Both row and column indexing follow `nodes` exactly, so
/// repeated calls over the same slice index identically.
pub fn build_matrix(graph: &UndirectedGraph, nodes: &[NodeId]) -> Vec<Vec<f64>> {
    let n = nodes.len();
    let position: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(index, &id)| (id, index))
        .collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for &node in nodes {
        let col = position[&node];
        for (other, weight) in graph.neighbors_of(node) {
            // Edges reaching outside the supplied node set contribute nothing.
            if let Some(&row) = position.get(&other) {
                matrix[row][col] += weight;
            }
        }
    }
    matrix
}

/// Score `nodes` with damped power iteration over the column-normalized
/// adjacency matrix.
///
/// An edgeless node set degenerates to a uniform score of 1.0 per node with
/// no iteration at all. Otherwise the iterate starts uniform at `1/N` and
/// updates as `x' = damping * (M * x) + (1 - damping) * teleport` until the
/// L1 distance between successive iterates drops below the convergence
/// threshold or the iteration cap is hit, whichever comes first. Returned
/// scores are the raw final iterate; they are not normalized to sum to 1.
pub fn rank(graph: &UndirectedGraph, nodes: &[NodeId], config: &RankConfig) -> Result<RankScores> {
    config.validate()?;

    if nodes.is_empty() {
        return Ok(RankScores::new());
    }

    // Degenerate graph: nothing is connected, every node scores 1.0.
    if nodes
        .iter()
        .all(|&node| graph.neighbors_of(node).is_empty())
    {
        return Ok(nodes.iter().map(|&node| (node, 1.0)).collect());
    }

    let mut matrix = build_matrix(graph, nodes);
    normalize_columns(&mut matrix);

    let n = nodes.len();
    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];
    let teleport = vec![uniform; n];

    let mut iterations = 0;
    let mut delta = f64::MAX;

    while iterations < config.max_iterations && delta >= config.convergence_threshold {
        iterations += 1;

        let mut next = vec![0.0; n];
        for (row, next_score) in next.iter_mut().enumerate() {
            let propagated: f64 = (0..n).map(|col| matrix[row][col] * scores[col]).sum();
            *next_score = config.damping * propagated + (1.0 - config.damping) * teleport[row];
        }

        delta = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        scores = next;
    }

    debug!(
        target: TARGET_RANKING,
        "power iteration finished: nodes={}, iterations={}, delta={:.8}",
        n, iterations, delta
    );

    Ok(nodes.iter().copied().zip(scores).collect())
}

/// Divide each column by its sum. A column summing to zero is left
/// unnormalized: a dangling node contributes nothing to others.
fn normalize_columns(matrix: &mut [Vec<f64>]) {
    let n = matrix.len();
    for col in 0..n {
        let sum: f64 = (0..n).map(|row| matrix[row][col]).sum();
        if sum > 0.0 {
            for row in matrix.iter_mut() {
                row[col] /= sum;
            }
        }
    }
}
