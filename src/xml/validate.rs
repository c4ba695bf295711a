//! Well-formedness checking.

use quick_xml::{
    events::{BytesStart, Event},
    name::ResolveResult,
    NsReader,
};

use crate::{
    xml::chars::{first_invalid_char, is_qname, is_xml_whitespace},
    Result,
};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Returns `true` if `text` is a namespace-well-formed XML document.
///
/// The document must have exactly one root element, balanced and matching tags, attributes
/// without duplicates, only known entity references, no character data outside the root, and
/// every element or attribute prefix must be bound by an `xmlns:*` declaration in scope.
/// Characters, names and the attribute list follow the XML 1.0 grammar, and an XML
/// declaration may only open the document. Nothing is repaired; any failure yields `false`.
///
/// # Examples
///
/// ```rust
/// use mmcgen::is_well_formed;
///
/// assert!(is_well_formed("<md:a xmlns:md=\"urn:x\"><md:b/></md:a>"));
/// assert!(!is_well_formed("<a><b></a>"));
/// assert!(!is_well_formed("<md:a/>"));
/// assert!(!is_well_formed("<a>\u{1}</a>"));
/// ```
#[must_use]
pub fn is_well_formed(text: &str) -> bool {
    match check_well_formed(text) {
        Ok(()) => true,
        Err(error) => {
            log::debug!("document is not well-formed: {error}");
            false
        }
    }
}

/// Checks well-formedness like [`is_well_formed`] but reports the first problem found.
///
/// # Errors
///
/// Returns the first syntax, structure or namespace error in `text`.
pub fn check_well_formed(text: &str) -> Result<()> {
    if let Some(c) = first_invalid_char(text) {
        return Err(malformed_error!("Character U+{:04X} is not allowed in XML", u32::from(c)));
    }

    let mut reader = NsReader::from_str(text);
    let mut depth = 0usize;
    let mut roots = 0usize;
    let mut first_event = true;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        if let ResolveResult::Unknown(prefix) = resolved {
            return Err(malformed_error!(
                "Unbound namespace prefix '{}'",
                String::from_utf8_lossy(&prefix)
            ));
        }

        match event {
            Event::Start(start) => {
                check_start(&reader, &start, depth, &mut roots)?;
                depth += 1;
            }
            Event::Empty(start) => check_start(&reader, &start, depth, &mut roots)?,
            Event::End(end) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    malformed_error!(
                        "Unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    )
                })?;
            }
            Event::Text(content) => {
                if std::str::from_utf8(&content)?.contains("]]>") {
                    return Err(malformed_error!("']]>' is not allowed in character data"));
                }
                let content = content.unescape()?;
                check_chars(&content)?;
                if depth == 0 && !content.trim().is_empty() {
                    return Err(malformed_error!("Text outside the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed_error!("CDATA outside the root element"));
            }
            Event::Comment(comment) => {
                let comment = std::str::from_utf8(&comment)?;
                if comment.contains("--") || comment.ends_with('-') {
                    return Err(malformed_error!("'--' is not allowed inside a comment"));
                }
            }
            Event::Decl(_) if !first_event || !text.starts_with("<?xml") => {
                return Err(malformed_error!(
                    "XML declaration is only allowed at the start of the document"
                ));
            }
            Event::PI(pi) => {
                let target = std::str::from_utf8(pi.target())?;
                if target.eq_ignore_ascii_case("xml") {
                    return Err(malformed_error!("Processing instruction target '{}'", target));
                }
            }
            Event::DocType(_) if roots > 0 => {
                return Err(malformed_error!("DOCTYPE after the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
        first_event = false;
    }

    if depth != 0 {
        return Err(malformed_error!("{} element(s) never closed", depth));
    }
    if roots == 0 {
        return Err(malformed_error!("Document has no root element"));
    }

    Ok(())
}

fn check_chars(text: &str) -> Result<()> {
    match first_invalid_char(text) {
        Some(c) => Err(malformed_error!(
            "Character reference to U+{:04X} is not allowed in XML",
            u32::from(c)
        )),
        None => Ok(()),
    }
}

fn check_start(
    reader: &NsReader<&[u8]>,
    start: &BytesStart,
    depth: usize,
    roots: &mut usize,
) -> Result<()> {
    if depth == 0 {
        *roots += 1;
        if *roots > 1 {
            return Err(malformed_error!("More than one root element"));
        }
    }

    let qname = start.name();
    let name = std::str::from_utf8(qname.as_ref())?;
    if !is_qname(name) {
        return Err(malformed_error!("Invalid element name '{}'", name));
    }
    if name.starts_with("xmlns:") {
        return Err(malformed_error!("Element <{}> uses the reserved prefix 'xmlns'", name));
    }
    check_attribute_list(std::str::from_utf8(start.attributes_raw())?)?;

    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?;
        let value = attribute.unescape_value()?;
        check_chars(&value)?;

        if let Some(prefix) = key.strip_prefix("xmlns:") {
            check_prefix_binding(prefix, &value)?;
        } else if key != "xmlns" {
            if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attribute.key) {
                return Err(malformed_error!(
                    "Unbound namespace prefix '{}' on attribute",
                    String::from_utf8_lossy(&prefix)
                ));
            }
        }
    }

    Ok(())
}

fn check_prefix_binding(prefix: &str, uri: &str) -> Result<()> {
    if uri.is_empty() {
        return Err(malformed_error!("Prefix '{}' cannot be bound to an empty name", prefix));
    }
    match prefix {
        "xmlns" => Err(malformed_error!("The 'xmlns' prefix cannot be declared")),
        "xml" if uri != XML_NAMESPACE => {
            Err(malformed_error!("The 'xml' prefix cannot be rebound to '{}'", uri))
        }
        _ if prefix != "xml" && uri == XML_NAMESPACE => Err(malformed_error!(
            "Only the 'xml' prefix may be bound to the XML namespace"
        )),
        _ => Ok(()),
    }
}

/// Walks `raw` (everything after the element name) with the `(S Attribute)* S?` production.
///
/// Values must be quoted and free of `<`, and every attribute needs leading whitespace.
fn check_attribute_list(raw: &str) -> Result<()> {
    let mut rest = raw;
    loop {
        let trimmed = rest.trim_start_matches(is_xml_whitespace);
        if trimmed.is_empty() {
            return Ok(());
        }
        if trimmed.len() == rest.len() {
            return Err(malformed_error!("Missing whitespace before attribute at '{}'", trimmed));
        }

        let name_end = trimmed
            .find(|c: char| c == '=' || is_xml_whitespace(c))
            .ok_or_else(|| malformed_error!("Attribute '{}' has no value", trimmed))?;
        let name = &trimmed[..name_end];
        if !is_qname(name) {
            return Err(malformed_error!("Invalid attribute name '{}'", name));
        }

        let value = trimmed[name_end..]
            .trim_start_matches(is_xml_whitespace)
            .strip_prefix('=')
            .ok_or_else(|| malformed_error!("Attribute '{}' has no value", name))?
            .trim_start_matches(is_xml_whitespace);
        let quote = value
            .chars()
            .next()
            .filter(|q| matches!(q, '"' | '\''))
            .ok_or_else(|| malformed_error!("Value of attribute '{}' is not quoted", name))?;
        let body = &value[1..];
        let close = body
            .find(quote)
            .ok_or_else(|| malformed_error!("Value of attribute '{}' is not closed", name))?;
        if body[..close].contains('<') {
            return Err(malformed_error!("'<' in the value of attribute '{}'", name));
        }

        rest = &body[close + 1..];
    }
}
