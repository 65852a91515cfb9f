use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_COLOR: &str = "#000000";

/// The node/edge document shape consumed by sigma-style renderers. The
/// three document-level flags are always serialized; this tool never
/// varies them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub directed: bool,
    pub graph: Vec<Value>,
    pub multigraph: bool,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub size: u64,
    pub color: String,
    #[serde(flatten)]
    pub attrs: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    pub label: String,
    pub source: String,
    pub target: String,
    pub weight: String,
    pub color: String,
    pub size: u64,
    #[serde(flatten)]
    pub attrs: IndexMap<String, Value>,
}
