//! Serialization of [`XmlElement`] trees.
//!
//! Serialization is a two-pass process. The tree is first written as compact UTF-8 XML, then
//! that text is parsed again and re-emitted with indentation under a canonical
//! `<?xml version="1.0" encoding="UTF-8"?>` declaration. The second pass is the same code path
//! as [`reformat`], so any document this crate produces can be fed back through it unchanged.

use std::io::Write;

use quick_xml::{
    escape::partial_escape,
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::{
    config::DEFAULT_INDENT_WIDTH,
    xml::{
        chars::{first_invalid_char, is_qname},
        XmlElement, XmlNode, XML_DECLARATION,
    },
    Result,
};

/// Serializes `element` as a pretty-printed document with 4-space indentation.
///
/// # Errors
///
/// Returns an error if a name is not a valid XML name, if text, attribute values or comments
/// hold characters XML cannot represent (such as U+0001), if a comment contains `--`, or if
/// the compact output cannot be parsed back.
///
/// # Examples
///
/// ```rust
/// use mmcgen::{serialize, XmlElement};
///
/// let tree = XmlElement::new("manifest:Compatibility")
///     .with_text_child("manifest:SpecVersion", "1.5");
///
/// let xml = serialize(&tree)?;
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <manifest:Compatibility>\n    \
///      <manifest:SpecVersion>1.5</manifest:SpecVersion>\n\
///      </manifest:Compatibility>\n"
/// );
/// # Ok::<(), mmcgen::Error>(())
/// ```
pub fn serialize(element: &XmlElement) -> Result<String> {
    serialize_with_indent(element, DEFAULT_INDENT_WIDTH)
}

/// Serializes `element` as a pretty-printed document with `indent` spaces per level.
///
/// # Errors
///
/// See [`serialize`].
pub fn serialize_with_indent(element: &XmlElement, indent: usize) -> Result<String> {
    let compact = to_compact_bytes(element)?;
    let text = std::str::from_utf8(&compact)?;
    reformat_with_indent(text, indent)
}

/// Re-emits an XML document with 4-space indentation and the canonical declaration.
///
/// Any declaration already present is replaced, and whitespace-only text between elements is
/// dropped before indenting.
///
/// # Errors
///
/// Returns an error if `text` is not a well-formed document.
pub fn reformat(text: &str) -> Result<String> {
    reformat_with_indent(text, DEFAULT_INDENT_WIDTH)
}

/// Re-emits an XML document with `indent` spaces per level and the canonical declaration.
///
/// # Errors
///
/// See [`reformat`].
pub fn reformat_with_indent(text: &str, indent: usize) -> Result<String> {
    let tree = XmlElement::parse(text)?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);
    write_element(&mut writer, &tree)?;
    let body = String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?;

    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

/// Writes `element` without any whitespace between tags and without a declaration.
///
/// # Errors
///
/// Returns an error for invalid names, characters XML cannot represent, or a comment
/// containing `--`.
pub fn to_compact_bytes(element: &XmlElement) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    Ok(writer.into_inner())
}

fn check_name(name: &str) -> Result<()> {
    if is_qname(name) {
        Ok(())
    } else {
        Err(malformed_error!("'{}' is not a valid XML name", name))
    }
}

// Control characters have no escaped form in XML 1.0, so they cannot be written at all
fn check_content(element: &XmlElement, content: &str) -> Result<()> {
    match first_invalid_char(content) {
        Some(c) => Err(malformed_error!(
            "<{}> contains U+{:04X}, which XML cannot represent",
            element.name,
            u32::from(c)
        )),
        None => Ok(()),
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    check_name(&element.name)?;
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        check_name(key)?;
        check_content(element, value)?;
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => {
                check_content(element, text)?;
                writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
            }
            XmlNode::Comment(comment) => {
                if comment.contains("--") || comment.ends_with('-') {
                    return Err(malformed_error!(
                        "comment in <{}> cannot contain '--': {}",
                        element.name,
                        comment
                    ));
                }
                check_content(element, comment)?;
                writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;

    Ok(())
}
