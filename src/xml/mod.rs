//! # XML tree, serializer and validator
//!
//! The manifest is assembled as an owned [`XmlElement`] tree and only turned into text at the
//! very end. This module provides everything around that tree:
//!
//! - [`XmlElement`] / [`XmlNode`]: ordered element tree with fluent construction and lookups
//! - [`serialize`] / [`serialize_with_indent`]: compact write, re-parse, indented re-emit
//! - [`reformat`]: the re-parse/re-emit step for arbitrary documents
//! - [`XmlElement::parse`]: text back into a tree
//! - [`is_well_formed`] / [`check_well_formed`]: namespace-aware well-formedness checks
//!
//! All reading and writing goes through `quick-xml`.

mod chars;
mod node;
mod reader;
mod validate;
mod writer;

pub use node::{XmlElement, XmlNode};
pub use validate::{check_well_formed, is_well_formed};
pub use writer::{
    reformat, reformat_with_indent, serialize, serialize_with_indent, to_compact_bytes,
};

/// The declaration line every serialized document starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
