pub mod convert;
pub mod graph_doc;
pub mod gxl_ast;
pub mod gxl_parser;
pub mod gxl_writer;
pub mod layout;

use convert::{ConvertError, ConvertOptions};
use graph_doc::GraphDocument;
use gxl_writer::ExportError;

pub fn gxl_to_json(input: &str) -> Result<String, ConvertError> {
    gxl_to_json_with_options(input, &ConvertOptions::default())
}

pub fn gxl_to_json_with_options(
    input: &str,
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    let graph = gxl_parser::parse_gxl(input)?;
    let doc = convert::to_document(&graph, options)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn json_to_gxl(input: &str) -> Result<String, ExportError> {
    let doc: GraphDocument = serde_json::from_str(input)?;
    gxl_writer::to_gxl(&doc)
}
