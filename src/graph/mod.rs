// Module declarations
pub mod core;

// Re-export the graph types at the module root
pub use self::core::{Edge, EdgeId, Node, NodeId, UndirectedGraph};
