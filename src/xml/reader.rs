//! Parsing XML text back into an [`XmlElement`] tree.

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::{
    xml::{XmlElement, XmlNode},
    Result,
};

impl XmlElement {
    /// Parses a complete XML document and returns its root element.
    ///
    /// The declaration, processing instructions, a doctype and comments outside the root are
    /// skipped. Inside an element that has child elements or comments, whitespace-only text
    /// is treated as formatting and dropped; text-only elements keep their text verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] for structural problems (no root, several roots,
    /// unclosed elements, text outside the root) and [`crate::Error::Xml`] for syntax errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mmcgen::XmlElement;
    ///
    /// let tree = XmlElement::parse("<a x=\"1\">\n  <b>text</b>\n</a>")?;
    /// assert_eq!(tree.attribute("x"), Some("1"));
    /// assert_eq!(tree.children.len(), 1);
    /// # Ok::<(), mmcgen::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<XmlElement> {
        let mut reader = Reader::from_str(text);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(element_from_start(&start)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| malformed_error!("Closing tag without an open element"))?;
                    drop_formatting_whitespace(&mut element);
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(content) => {
                    let content = content.unescape()?;
                    push_text(&mut stack, &content)?;
                }
                Event::CData(data) => {
                    let content = std::str::from_utf8(&data)?;
                    push_text(&mut stack, content)?;
                }
                Event::Comment(comment) => {
                    if let Some(parent) = stack.last_mut() {
                        let comment = std::str::from_utf8(&comment)?;
                        parent.push(XmlNode::Comment(comment.to_string()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed_error!("Element <{}> is never closed", open.name));
        }

        root.ok_or_else(|| malformed_error!("Document has no root element"))
    }
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement> {
    let qname = start.name();
    let name = std::str::from_utf8(qname.as_ref())?;
    let mut element = XmlElement::new(name);

    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push(XmlNode::Element(element));
        return Ok(());
    }

    if root.is_some() {
        return Err(malformed_error!(
            "Second root element <{}> after the document element",
            element.name
        ));
    }

    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [XmlElement], content: &str) -> Result<()> {
    let Some(parent) = stack.last_mut() else {
        if content.trim().is_empty() {
            return Ok(());
        }
        return Err(malformed_error!("Text outside the root element"));
    };

    if let Some(XmlNode::Text(previous)) = parent.children.last_mut() {
        previous.push_str(content);
    } else if !content.is_empty() {
        parent.push(XmlNode::Text(content.to_string()));
    }

    Ok(())
}

fn drop_formatting_whitespace(element: &mut XmlElement) {
    let has_markup = element
        .children
        .iter()
        .any(|child| matches!(child, XmlNode::Element(_) | XmlNode::Comment(_)));

    if has_markup {
        element
            .children
            .retain(|child| !matches!(child, XmlNode::Text(text) if text.trim().is_empty()));
    }
}
