use serde::Serialize;

pub mod builder;
pub mod fingerprint;
pub mod session;
pub mod viz;

pub use builder::GraphBuilder;
pub use fingerprint::FingerprintMode;
pub use session::Session;

pub type NodeId = u64;

/// A rendered graph node. Course nodes carry the course code as label;
/// logic nodes carry a synthetic "AND1"/"OR2" label and no color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A directed edge from a parent node to one of its prerequisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}
