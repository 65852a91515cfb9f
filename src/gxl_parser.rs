use std::collections::BTreeMap;
use std::io::BufRead;
use std::str;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::gxl_ast::*;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("utf8 error: {0}")]
    Utf8(#[from] str::Utf8Error),

    #[error("no <graph> element found under the document root")]
    MissingGraph,

    #[error("missing required attribute: {0}")]
    MissingAttr(&'static str),

    #[error("<attr name=\"{name}\"> has no text content")]
    EmptyAttr { name: String },

    #[error("unexpected end of document")]
    UnexpectedEof,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a GXL document into its graph.
///
/// The first direct child of the document root named `graph` wins; other
/// siblings (format metadata and the like) are skipped wholesale. Inside the
/// graph, only `node` and `edge` children are collected, in source order.
pub fn parse_gxl(input: &str) -> ParseResult<GxlGraph> {
    let mut reader = Reader::from_str(input);
    let mut buf = Vec::new();

    // Document root: the first element, whatever its name.
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => break,
            Event::Empty(_) | Event::Eof => return Err(ParseError::MissingGraph),
            _ => {}
        }
        buf.clear();
    }
    buf.clear();

    // Linear scan over the root's direct children for the first <graph>.
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if local_name(&e)? == "graph" {
                    return parse_graph_element(&mut reader);
                }
                skip_subtree(&mut reader, &e)?;
            }
            Event::Empty(e) => {
                if local_name(&e)? == "graph" {
                    return Ok(GxlGraph { nodes: Vec::new(), edges: Vec::new() });
                }
            }
            Event::End(_) | Event::Eof => return Err(ParseError::MissingGraph),
            _ => {}
        }
        buf.clear();
    }
}

fn parse_graph_element<R: BufRead>(reader: &mut Reader<R>) -> ParseResult<GxlGraph> {
    let mut nodes: Vec<GxlNode> = Vec::new();
    let mut edges: Vec<GxlEdge> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "node" => {
                    let attrs = attrs_to_map(&e)?;
                    let children = parse_attr_children(reader)?;
                    nodes.push(node_from(attrs, children)?);
                }
                "edge" => {
                    let attrs = attrs_to_map(&e)?;
                    let children = parse_attr_children(reader)?;
                    edges.push(edge_from(attrs, children)?);
                }
                // Unrecognized tags are not an error; their subtrees are
                // dropped so nested <node>/<edge> elements stay invisible.
                _ => skip_subtree(reader, &e)?,
            },
            Event::Empty(e) => match local_name(&e)?.as_str() {
                "node" => nodes.push(node_from(attrs_to_map(&e)?, Vec::new())?),
                "edge" => edges.push(edge_from(attrs_to_map(&e)?, Vec::new())?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }

    Ok(GxlGraph { nodes, edges })
}

fn node_from(attrs: BTreeMap<String, String>, children: Vec<GxlAttr>) -> ParseResult<GxlNode> {
    let id = attrs
        .get("id")
        .cloned()
        .ok_or(ParseError::MissingAttr("node@id"))?;
    Ok(GxlNode {
        id,
        label: attrs.get("label").cloned(),
        attrs: children,
    })
}

fn edge_from(attrs: BTreeMap<String, String>, children: Vec<GxlAttr>) -> ParseResult<GxlEdge> {
    // Any id on the edge element is discarded; edges are renumbered on
    // conversion. from/to are required but not resolved against node ids.
    let from = attrs
        .get("from")
        .cloned()
        .ok_or(ParseError::MissingAttr("edge@from"))?;
    let to = attrs
        .get("to")
        .cloned()
        .ok_or(ParseError::MissingAttr("edge@to"))?;
    Ok(GxlEdge {
        from,
        to,
        attrs: children,
    })
}

/// Collect `<attr name="...">` children until the parent element closes.
fn parse_attr_children<R: BufRead>(reader: &mut Reader<R>) -> ParseResult<Vec<GxlAttr>> {
    let mut out = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if local_name(&e)? == "attr" {
                    let name = attr_name(&e)?;
                    let value = read_attr_text(reader)?;
                    if value.is_empty() {
                        return Err(ParseError::EmptyAttr { name });
                    }
                    out.push(GxlAttr { name, value });
                } else {
                    skip_subtree(reader, &e)?;
                }
            }
            Event::Empty(e) => {
                if local_name(&e)? == "attr" {
                    let name = attr_name(&e)?;
                    return Err(ParseError::EmptyAttr { name });
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

fn attr_name(e: &BytesStart<'_>) -> ParseResult<String> {
    attrs_to_map(e)?
        .get("name")
        .cloned()
        .ok_or(ParseError::MissingAttr("attr@name"))
}

/// Text content of an `<attr>` element. Typed wrapper children such as
/// `<string>`, `<int>` and `<float>` are transparent; only their text is
/// kept, trimmed of surrounding markup whitespace.
fn read_attr_text<R: BufRead>(reader: &mut Reader<R>) -> ParseResult<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::Empty(_) => {}
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Text(t) => {
                let raw = t.decode()?;
                text.push_str(&quick_xml::escape::unescape(&raw)?);
            }
            Event::CData(c) => text.push_str(&c.decode()?),
            Event::Eof => return Err(ParseError::UnexpectedEof),
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

fn skip_subtree<R: BufRead>(reader: &mut Reader<R>, e: &BytesStart<'_>) -> ParseResult<()> {
    let end = e.to_end().into_owned();
    let mut skip_buf = Vec::new();
    reader.read_to_end_into(end.name(), &mut skip_buf)?;
    Ok(())
}

fn attrs_to_map(e: &BytesStart<'_>) -> ParseResult<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for a in e.attributes() {
        let a = a?;
        let key = str::from_utf8(a.key.as_ref())?.to_string();
        let val = a.unescape_value()?.to_string();
        out.insert(key, val);
    }
    Ok(out)
}

fn local_name(e: &BytesStart<'_>) -> ParseResult<String> {
    Ok(str::from_utf8(e.name().as_ref())?.to_string())
}
