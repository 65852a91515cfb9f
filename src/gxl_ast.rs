#[derive(Debug, Clone, PartialEq)]
pub struct GxlGraph {
    pub nodes: Vec<GxlNode>,
    pub edges: Vec<GxlEdge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GxlNode {
    pub id: String,
    pub label: Option<String>,
    pub attrs: Vec<GxlAttr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GxlEdge {
    pub from: String,
    pub to: String,
    pub attrs: Vec<GxlAttr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GxlAttr {
    pub name: String,
    pub value: String,
}
