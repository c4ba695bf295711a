//! Owned XML element tree.

/// A node inside an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A nested element
    Element(XmlElement),
    /// Character data, unescaped
    Text(String),
    /// A comment, without the `<!--`/`-->` delimiters
    Comment(String),
}

/// An XML element with ordered attributes and children.
///
/// Names are kept as written, prefix included (`manifest:Inventory`); namespace declarations
/// are ordinary `xmlns:*` attributes. Attribute and child order is exactly construction order.
///
/// # Examples
///
/// ```rust
/// use mmcgen::XmlElement;
///
/// let audio = XmlElement::new("manifest:Audio")
///     .with_attribute("AudioTrackID", "md:audtrackid:org:A1")
///     .with_text_child("md:Language", "en");
///
/// assert_eq!(audio.attribute("AudioTrackID"), Some("md:audtrackid:org:A1"));
/// assert_eq!(audio.find("md:Language").and_then(|e| e.text()).as_deref(), Some("en"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified element name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Creates an element without attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Appends a text node. Empty text is not stored, so the element stays self-closing.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(XmlNode::Text(text));
        }
        self
    }

    /// Appends a child element `name` holding `text`.
    #[must_use]
    pub fn with_text_child(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_child(XmlElement::new(name).with_text(text))
    }

    /// Appends a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.children.push(XmlNode::Comment(comment.into()));
        self
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: XmlNode) {
        self.children.push(node);
    }

    /// Looks up an attribute value by its qualified name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of the direct text children, or `None` if there are none.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let mut text = None::<String>;
        for child in &self.children {
            if let XmlNode::Text(chunk) = child {
                text.get_or_insert_with(String::new).push_str(chunk);
            }
        }
        text
    }

    /// Iterates over the direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// The first direct child element called `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|element| element.name == name)
    }

    /// Follows a `/`-separated path of child names, e.g. `"md:Picture/md:WidthPixels"`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .try_fold(self, |element, name| element.child(name))
    }

    /// All descendant elements in document order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.elements().collect();
        stack.reverse();
        while let Some(element) = stack.pop() {
            out.push(element);
            let mut children: Vec<&XmlElement> = element.elements().collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// All descendant elements called `name`, in document order.
    #[must_use]
    pub fn descendants_named(&self, name: &str) -> Vec<&XmlElement> {
        self.descendants()
            .into_iter()
            .filter(|element| element.name == name)
            .collect()
    }
}
