// Module declarations
pub mod power_iteration;
#[cfg(test)]
mod tests;

pub use power_iteration::{build_matrix, rank, RankConfig, RankScores};

pub const TARGET_RANKING: &str = "ranking";

/// Fraction of score propagated through edges rather than teleported.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Hard ceiling on power-iteration rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// L1 distance between successive iterates below which iteration stops.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-4;
