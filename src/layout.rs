use std::collections::HashMap;

use crate::graph_doc::GraphDocument;

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub iterations: u32,
    pub cooling_rate: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: 1000,
            cooling_rate: 0.95,
        }
    }
}

/// Fruchterman-Reingold force-directed layout over the document's node
/// positions. Works in place; ids, labels and attributes are untouched.
///
/// The working area is the bounding box of the current positions, never
/// smaller than the 50x50 square that seeds missing coordinates on import.
/// Edges whose endpoints do not resolve to node ids are skipped.
pub fn fruchterman_reingold(doc: &mut GraphDocument, options: &LayoutOptions) {
    let node_count = doc.nodes.len();
    if node_count == 0 {
        return;
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for node in &doc.nodes {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x);
        max_y = max_y.max(node.y);
    }
    let width = (max_x - min_x).max(50.0);
    let height = (max_y - min_y).max(50.0);

    let k = (width * height / node_count as f64).sqrt();
    let k_squared = k * k;

    let index: HashMap<&str, usize> = doc
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();
    let endpoints: Vec<(usize, usize)> = doc
        .edges
        .iter()
        .filter_map(|edge| {
            Some((
                *index.get(edge.source.as_str())?,
                *index.get(edge.target.as_str())?,
            ))
        })
        .collect();

    let mut pos: Vec<(f64, f64)> = doc.nodes.iter().map(|n| (n.x, n.y)).collect();
    let mut temperature = width / 10.0;

    for _ in 0..options.iterations {
        let mut disp = vec![(0.0f64, 0.0f64); node_count];

        // Repulsion between every pair.
        for i in 0..node_count {
            for j in 0..node_count {
                if i == j {
                    continue;
                }
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let distance = (dx * dx + dy * dy).sqrt().max(0.01);
                let repulsive = k_squared / distance;
                disp[i].0 += dx / distance * repulsive;
                disp[i].1 += dy / distance * repulsive;
            }
        }

        // Attraction along edges.
        for &(a, b) in &endpoints {
            if a == b {
                continue;
            }
            let dx = pos[b].0 - pos[a].0;
            let dy = pos[b].1 - pos[a].1;
            let distance = (dx * dx + dy * dy).sqrt().max(0.01);
            let attractive = distance * distance / k;
            let fx = dx / distance * attractive;
            let fy = dy / distance * attractive;
            disp[a].0 += fx;
            disp[a].1 += fy;
            disp[b].0 -= fx;
            disp[b].1 -= fy;
        }

        // Move, capped by the temperature, clamped to the area.
        for i in 0..node_count {
            let (dx, dy) = disp[i];
            let length = (dx * dx + dy * dy).sqrt();
            if length > 0.0 {
                let capped = length.min(temperature);
                pos[i].0 = (pos[i].0 + dx / length * capped).clamp(min_x, min_x + width);
                pos[i].1 = (pos[i].1 + dy / length * capped).clamp(min_y, min_y + height);
            }
        }

        temperature *= options.cooling_rate;
        if temperature < 0.01 {
            break;
        }
    }

    for (node, (x, y)) in doc.nodes.iter_mut().zip(pos) {
        node.x = x;
        node.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_doc::{DEFAULT_COLOR, EdgeRecord, NodeRecord};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn node(id: &str, x: f64, y: f64) -> NodeRecord {
        NodeRecord {
            id: id.to_string(),
            label: String::new(),
            x,
            y,
            size: 1,
            color: DEFAULT_COLOR.to_string(),
            attrs: IndexMap::new(),
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> EdgeRecord {
        EdgeRecord {
            id: id.to_string(),
            label: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            weight: "1".to_string(),
            color: DEFAULT_COLOR.to_string(),
            size: 1,
            attrs: IndexMap::new(),
        }
    }

    #[test]
    fn empty_document_is_a_no_op() {
        let mut doc = GraphDocument::default();
        fruchterman_reingold(&mut doc, &LayoutOptions::default());
        assert!(doc.nodes.is_empty());
    }

    #[test]
    fn positions_move_but_stay_in_the_area() {
        let mut doc = GraphDocument {
            nodes: vec![node("a", 10.0, 10.0), node("b", 12.0, 10.0), node("c", 11.0, 12.0)],
            edges: vec![edge("e0", "a", "b"), edge("e1", "b", "c")],
            ..GraphDocument::default()
        };
        let before: Vec<(f64, f64)> = doc.nodes.iter().map(|n| (n.x, n.y)).collect();
        fruchterman_reingold(&mut doc, &LayoutOptions::default());

        let moved = doc
            .nodes
            .iter()
            .zip(&before)
            .any(|(n, &(x, y))| n.x != x || n.y != y);
        assert!(moved, "layout should displace a cramped graph");

        for n in &doc.nodes {
            assert!((10.0..=60.0).contains(&n.x), "x within area, got {}", n.x);
            assert!((10.0..=60.0).contains(&n.y), "y within area, got {}", n.y);
        }
    }

    #[test]
    fn identity_fields_are_untouched() {
        let mut doc = GraphDocument {
            nodes: vec![node("a", 1.0, 2.0), node("b", 3.0, 4.0)],
            edges: vec![edge("e0", "a", "b")],
            ..GraphDocument::default()
        };
        fruchterman_reingold(&mut doc, &LayoutOptions::default());
        let ids: Vec<&str> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(doc.edges[0].source, "a");
        assert_eq!(doc.edges[0].target, "b");
    }

    #[test]
    fn dangling_edge_endpoints_are_skipped() {
        let mut doc = GraphDocument {
            nodes: vec![node("a", 1.0, 2.0)],
            edges: vec![edge("e0", "a", "ghost")],
            ..GraphDocument::default()
        };
        // Must not panic.
        fruchterman_reingold(&mut doc, &LayoutOptions::default());
        assert_eq!(doc.nodes.len(), 1);
    }

    #[test]
    fn single_node_stays_put() {
        let mut doc = GraphDocument {
            nodes: vec![node("a", 5.0, 5.0)],
            ..GraphDocument::default()
        };
        fruchterman_reingold(&mut doc, &LayoutOptions::default());
        assert_eq!(doc.nodes[0].x, 5.0);
        assert_eq!(doc.nodes[0].y, 5.0);
    }
}
