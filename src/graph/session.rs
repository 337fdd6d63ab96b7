use std::collections::{HashMap, HashSet};

use crate::graph::{Edge, Node, NodeId};

/// All mutable state accumulated across incremental builds: the node and
/// edge collections handed to the renderer, the three deduplication
/// registries, and the id/label counters. One session is one diagram;
/// independent sessions are fully isolated.
#[derive(Debug, Default)]
pub struct Session {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    course_ids: HashMap<String, NodeId>,
    branch_ids: HashMap<String, NodeId>,
    edge_keys: HashSet<(NodeId, NodeId)>,
    next_node_id: NodeId,
    and_counter: u64,
    or_counter: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh node id. Ids only ever increase within a session.
    fn next_id(&mut self) -> NodeId {
        let id = self.next_node_id;
        self.next_node_id += 1;
        id
    }

    /// Next sequential AND label, 1-based. The counter advances even when
    /// the label ends up unused because the branch deduplicates; only the
    /// first label bound to a fingerprint is ever displayed.
    pub fn next_and_label(&mut self) -> String {
        self.and_counter += 1;
        format!("AND{}", self.and_counter)
    }

    /// Next sequential OR label, 1-based, independent of the AND counter.
    pub fn next_or_label(&mut self) -> String {
        self.or_counter += 1;
        format!("OR{}", self.or_counter)
    }

    pub fn is_known_course(&self, name: &str) -> bool {
        self.course_ids.contains_key(name)
    }

    /// Resolves a course name to its node, creating the node on first
    /// sight. A name maps to exactly one node for the session's lifetime.
    pub fn get_or_create_course(&mut self, name: &str, color: Option<&str>) -> (NodeId, bool) {
        if let Some(&id) = self.course_ids.get(name) {
            return (id, false);
        }

        let id = self.next_id();
        self.course_ids.insert(name.to_string(), id);
        self.nodes.push(Node {
            id,
            label: name.to_string(),
            color: color.map(str::to_string),
        });
        (id, true)
    }

    /// Resolves a fingerprint to its logic node, creating the node with the
    /// given label on first sight. The label is not part of the key: shape
    /// alone determines identity, and on reuse the supplied label is
    /// discarded.
    pub fn get_or_create_branch(&mut self, fingerprint: &str, label: String) -> (NodeId, bool) {
        if let Some(&id) = self.branch_ids.get(fingerprint) {
            return (id, false);
        }

        let id = self.next_id();
        self.branch_ids.insert(fingerprint.to_string(), id);
        self.nodes.push(Node {
            id,
            label,
            color: None,
        });
        (id, true)
    }

    /// Records a directed edge unless the same (from, to) pair is already
    /// present. Direction matters: (to, from) is a different edge.
    pub fn add_edge_if_absent(&mut self, from: NodeId, to: NodeId) -> bool {
        if !self.edge_keys.insert((from, to)) {
            return false;
        }
        self.edges.push(Edge { from, to });
        true
    }

    /// Records a directed edge with no duplicate check. Used only on the
    /// course-leaf path, whose incoming edges are intentionally not
    /// deduplicated (a preserved asymmetry of the build algorithm).
    pub fn push_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push(Edge { from, to });
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Clears every collection, registry, and counter back to the initial
    /// state. The first id issued after a reset equals the first id ever
    /// issued.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.course_ids.clear();
        self.branch_ids.clear();
        self.edge_keys.clear();
        self.next_node_id = 0;
        self.and_counter = 0;
        self.or_counter = 0;
    }
}
