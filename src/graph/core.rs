use std::collections::HashMap;

/// Index of a node in the graph arena. Stable, allocated in assignment order.
pub type NodeId = usize;

/// Index of an edge in the graph arena.
pub type EdgeId = usize;

/// A graph vertex representing one distinct token or sentence.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// Indices into the owning graph's edge arena. Back-references only;
    /// the graph owns the edges.
    incident: Vec<EdgeId>,
}

/// A weighted undirected connection between two nodes.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub weight: f64,
}

impl Edge {
    /// Given one endpoint, return the other. A self-loop returns the same
    /// node.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.a == node {
            self.b
        } else {
            self.a
        }
    }
}

/// Arena-backed undirected multigraph.
///
/// Nodes and edges live in vectors owned by the container and are addressed
/// by index, so node/edge cross-references never form an ownership cycle.
/// Nodes are deduplicated by label within one graph; edges are not — every
/// `connect` call records an independent contribution, even between the same
/// pair of nodes.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    label_to_id: HashMap<String, NodeId>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `label`, returning its id.
    ///
    /// Ids are handed out in assignment order and remain stable for the life
    /// of the graph; a label seen before yields the id it was first given.
    pub fn create_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len();
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            incident: Vec::new(),
        });
        id
    }

    /// Add one weighted edge between `a` and `b`.
    ///
    /// Order-independent; `a == b` creates a self-loop. Panics on an
    /// out-of-range id or a weight that is negative or not finite: both are
    /// programmer errors, not runtime conditions.
    pub fn connect(&mut self, a: NodeId, b: NodeId, weight: f64) {
        assert!(
            a < self.nodes.len() && b < self.nodes.len(),
            "node id out of range"
        );
        assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weight must be finite and non-negative"
        );

        let edge_id = self.edges.len();
        self.edges.push(Edge { a, b, weight });
        self.nodes[a].incident.push(edge_id);
        if a != b {
            self.nodes[b].incident.push(edge_id);
        }
    }

    /// Add an edge with the default weight of 1.
    pub fn connect_unweighted(&mut self, a: NodeId, b: NodeId) {
        self.connect(a, b, 1.0);
    }

    /// Derived view of a node's neighborhood as `(other endpoint, weight)`
    /// pairs. A self-loop reports the node itself, once per loop edge.
    pub fn neighbors_of(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        assert!(node < self.nodes.len(), "node id out of range");
        self.nodes[node]
            .incident
            .iter()
            .map(|&edge_id| {
                let edge = self.edges[edge_id];
                (edge.other(node), edge.weight)
            })
            .collect()
    }

    /// Look up the id a label was assigned, if any.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.label_to_id.get(label).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.nodes[node].label
    }

    /// All node ids in assignment order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        (0..self.nodes.len()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, counting parallel edges and self-loops
    /// individually.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_any_edge(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|edge| edge.weight)
    }
}
