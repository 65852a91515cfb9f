use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

use crate::graph_doc::{EdgeRecord, GraphDocument, NodeRecord};

const DOCTYPE: &str = "gxl SYSTEM \"http://www.gupro.de/GXL/gxl-1.0.dtd\"";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("utf8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize a document back to GXL markup.
///
/// Positions, labels and copied attributes survive the trip. The fixed
/// style defaults and the synthesized `e<N>` edge ids are not written;
/// the forward conversion regenerates them.
pub fn to_gxl(doc: &GraphDocument) -> Result<String, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer.write_event(Event::Start(BytesStart::new("gxl")))?;
    writer.write_event(Event::Start(BytesStart::new("graph")))?;

    for node in &doc.nodes {
        write_node(&mut writer, node)?;
    }
    for edge in &doc.edges {
        write_edge(&mut writer, edge)?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gxl")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &NodeRecord) -> Result<(), ExportError> {
    let mut start = BytesStart::new("node");
    start.push_attribute(("id", node.id.as_str()));
    if !node.label.is_empty() {
        start.push_attribute(("label", node.label.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    write_attr(writer, "x", "float", &node.x.to_string())?;
    write_attr(writer, "y", "float", &node.y.to_string())?;
    for (name, value) in &node.attrs {
        write_attr(writer, name, "string", &value_text(value))?;
    }

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}

fn write_edge<W: Write>(writer: &mut Writer<W>, edge: &EdgeRecord) -> Result<(), ExportError> {
    let mut start = BytesStart::new("edge");
    start.push_attribute(("from", edge.source.as_str()));
    start.push_attribute(("to", edge.target.as_str()));

    if edge.attrs.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for (name, value) in &edge.attrs {
        write_attr(writer, name, "string", &value_text(value))?;
    }
    writer.write_event(Event::End(BytesEnd::new("edge")))?;
    Ok(())
}

fn write_attr<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    kind: &str,
    value: &str,
) -> Result<(), ExportError> {
    let mut attr = BytesStart::new("attr");
    attr.push_attribute(("name", name));
    writer.write_event(Event::Start(attr))?;
    writer.write_event(Event::Start(BytesStart::new(kind)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(kind)))?;
    writer.write_event(Event::End(BytesEnd::new("attr")))?;
    Ok(())
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
