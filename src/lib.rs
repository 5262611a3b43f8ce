pub mod clustering;
pub mod error;
pub mod graph;
pub mod logging;
pub mod nlp;
pub mod ranking;
pub mod textrank;

pub use error::KeyrankError;

/// Crate-wide result type; all fallible entry points return this.
pub type Result<T> = std::result::Result<T, KeyrankError>;
