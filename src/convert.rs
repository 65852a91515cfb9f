use indexmap::IndexMap;
use serde_json::Value;

use crate::graph_doc::{DEFAULT_COLOR, EdgeRecord, GraphDocument, NodeRecord};
use crate::gxl_ast::{GxlGraph, GxlNode};
use crate::gxl_parser::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid number for {field}: {value}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Prepended to explicit node labels taken from the markup.
    pub label_prefix: String,
}

/// Build the structured document from a parsed graph.
///
/// Nodes and edges keep their source order. Edge ids are renumbered as
/// `e0, e1, ...` regardless of what the markup carried.
pub fn to_document(graph: &GxlGraph, options: &ConvertOptions) -> Result<GraphDocument, ConvertError> {
    let mut doc = GraphDocument::default();

    for node in &graph.nodes {
        doc.nodes.push(node_record(node, options)?);
    }

    for (i, edge) in graph.edges.iter().enumerate() {
        let id = format!("e{i}");
        let mut attrs = IndexMap::new();
        for attr in &edge.attrs {
            attrs.insert(attr.name.clone(), Value::String(attr.value.clone()));
        }
        doc.edges.push(EdgeRecord {
            label: id.clone(),
            id,
            source: edge.from.clone(),
            target: edge.to.clone(),
            weight: "1".to_string(),
            color: DEFAULT_COLOR.to_string(),
            size: 1,
            attrs,
        });
    }

    Ok(doc)
}

fn node_record(node: &GxlNode, options: &ConvertOptions) -> Result<NodeRecord, ConvertError> {
    let mut x = None;
    let mut y = None;
    let mut pieces: Vec<String> = Vec::new();
    let mut attrs = IndexMap::new();

    for attr in &node.attrs {
        match attr.name.as_str() {
            "x" => x = Some(parse_coordinate("x", &attr.value)?),
            "y" => y = Some(parse_coordinate("y", &attr.value)?),
            _ => {
                pieces.push(format!("{} = {}", attr.name, attr.value));
                attrs.insert(attr.name.clone(), Value::String(attr.value.clone()));
            }
        }
    }

    // An explicit label from the markup wins over the synthesized one.
    let label = match &node.label {
        Some(explicit) => format!("{}{}", options.label_prefix, explicit),
        None => pieces.join(" | "),
    };

    Ok(NodeRecord {
        id: node.id.clone(),
        label,
        x: x.unwrap_or_else(random_coordinate),
        y: y.unwrap_or_else(random_coordinate),
        size: 1,
        color: DEFAULT_COLOR.to_string(),
        attrs,
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, ConvertError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

// Unseeded: converting the same input twice gives different positions
// for nodes that carry none.
fn random_coordinate() -> f64 {
    rand::random::<f64>() * 50.0
}
