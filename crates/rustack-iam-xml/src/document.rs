//! A minimal XML element tree.
//!
//! IAM responses are small, so the decoder materializes the whole body as a
//! tree of [`XmlNode`]s and then walks it by element name. Only elements and
//! their text survive; attributes, comments and processing instructions are
//! dropped. Element names are stored without their namespace prefix.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;

/// Deepest element nesting accepted by [`XmlDocument::parse`].
pub const MAX_DEPTH: usize = 256;

/// A parsed XML document with at most one root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlDocument {
    root: Option<XmlNode>,
}

/// One element of an [`XmlDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    text: String,
    children: Vec<XmlNode>,
}

impl XmlDocument {
    /// Parse a byte slice into a document tree.
    ///
    /// Entity and character references in text are resolved; CDATA sections
    /// are taken verbatim. An input with no elements yields a document
    /// without a root.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the input is not well-formed, has more than one
    /// root element, has unclosed elements, or nests deeper than [`MAX_DEPTH`].
    pub fn parse(xml: &[u8]) -> Result<Self, XmlError> {
        let mut reader = Reader::from_reader(xml);
        let mut open: Vec<XmlNode> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let node = XmlNode::new(element_name(&e)?);
                    check_depth(&open, &node)?;
                    if open.is_empty() && root.is_some() {
                        return Err(XmlError::UnexpectedElement(format!(
                            "second root element <{}>",
                            node.name
                        )));
                    }
                    open.push(node);
                }
                Event::Empty(e) => {
                    let node = XmlNode::new(element_name(&e)?);
                    check_depth(&open, &node)?;
                    attach(&mut open, &mut root, node)?;
                }
                Event::End(_) => {
                    let node = open.pop().ok_or_else(|| {
                        XmlError::UnexpectedElement("end tag without start tag".to_owned())
                    })?;
                    attach(&mut open, &mut root, node)?;
                }
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| XmlError::Encoding(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    push_text(&mut open, &unescaped)?;
                }
                Event::GeneralRef(e) => {
                    if let Some(ch) = e.resolve_char_ref()? {
                        push_text(&mut open, ch.encode_utf8(&mut [0; 4]))?;
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| XmlError::Encoding(err.to_string()))?;
                        let resolved =
                            quick_xml::escape::resolve_predefined_entity(&name).ok_or_else(
                                || XmlError::ParseError(format!("unknown entity &{name};")),
                            )?;
                        push_text(&mut open, resolved)?;
                    }
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    let text = std::str::from_utf8(&raw)
                        .map_err(|err| XmlError::Encoding(err.to_string()))?;
                    push_text(&mut open, text)?;
                }
                Event::Eof => break,
                // Declaration, comments, processing instructions, doctype.
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(XmlError::MissingElement(format!("</{}>", unclosed.name)));
        }

        Ok(Self { root })
    }

    /// The root element, if the document has one.
    #[must_use]
    pub fn root(&self) -> Option<&XmlNode> {
        self.root.as_ref()
    }
}

impl XmlNode {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Element name without namespace prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped text directly inside this element, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// The first child element with the given name.
    #[must_use]
    pub fn first_child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Whether this element has no child elements.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn element_name(e: &BytesStart<'_>) -> Result<String, XmlError> {
    let local = e.local_name();
    std::str::from_utf8(local.as_ref())
        .map(str::to_owned)
        .map_err(|err| XmlError::Encoding(err.to_string()))
}

fn check_depth(open: &[XmlNode], node: &XmlNode) -> Result<(), XmlError> {
    if open.len() >= MAX_DEPTH {
        return Err(XmlError::UnexpectedElement(format!(
            "<{}> nested deeper than {MAX_DEPTH} levels",
            node.name
        )));
    }
    Ok(())
}

/// Hand a closed element to its parent, or make it the document root.
fn attach(
    open: &mut [XmlNode],
    root: &mut Option<XmlNode>,
    node: XmlNode,
) -> Result<(), XmlError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::UnexpectedElement(format!(
            "second root element <{}>",
            node.name
        )));
    }
    *root = Some(node);
    Ok(())
}

fn push_text(open: &mut [XmlNode], text: &str) -> Result<(), XmlError> {
    match open.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::ParseError(format!(
            "text outside of root element: {}",
            text.trim()
        ))),
    }
}
