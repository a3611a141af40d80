//! XML reader producing an owned element tree.

use crate::error::{ConvertError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// A child node of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Character data, whitespace-only runs included.
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
}

/// An XML element with its attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name as written in the document.
    pub name: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct element children, skipping text, comments and the like.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Whether the element has any child node at all.
    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    /// This element and all elements below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    fn from_start(
        start: &BytesStart<'_>,
        reader: &Reader<&[u8]>,
        position: usize,
    ) -> Result<Self> {
        let qname = start.name();
        let name = reader
            .decoder()
            .decode(qname.as_ref())
            .map_err(xml_error(position))?;
        let mut element = Element::new(name);
        for attr in start.attributes() {
            let attr = attr?;
            let key = reader
                .decoder()
                .decode(attr.key.as_ref())
                .map_err(xml_error(position))?
                .into_owned();
            let value = attr
                .decode_and_unescape_value(reader)
                .map_err(xml_error(position))?;
            element
                .attributes
                .push((key, normalize_attribute_value(&value)));
        }
        Ok(element)
    }
}

/// Replace literal line breaks and tabs in an attribute value with spaces.
///
/// `\r\n` counts as a single break.
fn normalize_attribute_value(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(|c: char| matches!(c, '\r' | '\n' | '\t'), " ")
}

fn xml_error(position: usize) -> impl FnOnce(quick_xml::Error) -> ConvertError {
    move |source| ConvertError::Xml { position, source }
}

/// Pre-order walk over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Reverse so the first child is visited next.
        let children: Vec<&Element> = element.element_children().collect();
        self.stack.extend(children.into_iter().rev());
        Some(element)
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    /// The single top-level element.
    pub root: Element,
}

impl XmlDocument {
    /// First element with the given tag name anywhere in the document.
    pub fn find_first(&self, tag: &str) -> Option<&Element> {
        self.root.descendants().find(|element| element.name == tag)
    }

    /// All elements with the given tag name anywhere in the document.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.root
            .descendants()
            .filter(move |element| element.name == tag)
    }
}

/// Parse an XML document from a string.
pub fn parse_xml_str(content: &str) -> Result<XmlDocument> {
    parse_xml_bytes(content.as_bytes())
}

/// Parse an XML document from raw bytes.
///
/// The encoding is taken from a BOM or the XML declaration, UTF-8 otherwise.
pub fn parse_xml_bytes(content: &[u8]) -> Result<XmlDocument> {
    let mut reader = Reader::from_reader(content);
    // Whitespace text is a child node too.
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(xml_error(reader.buffer_position()))?;
        let position = reader.buffer_position();

        match event {
            Event::Start(e) => {
                let element = Element::from_start(&e, &reader, position)?;
                if stack.is_empty() && root.is_some() {
                    return Err(ConvertError::MultipleRootElements { name: element.name });
                }
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = Element::from_start(&e, &reader, position)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(e) => {
                let element = stack.pop().ok_or_else(|| ConvertError::MismatchedEndTag {
                    found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                })?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(xml_error(position))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Text(text.into_owned())),
                    None if text.trim().is_empty() => {}
                    None => return Err(ConvertError::TextOutsideRoot),
                }
            }
            Event::CData(e) => {
                let text = reader.decoder().decode(&e).map_err(xml_error(position))?;
                let parent = stack.last_mut().ok_or(ConvertError::TextOutsideRoot)?;
                parent.children.push(Node::CData(text.into_owned()));
            }
            Event::Comment(e) => {
                let text = reader.decoder().decode(&e).map_err(xml_error(position))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Comment(text.into_owned()));
                }
            }
            Event::PI(e) => {
                let text = reader.decoder().decode(&e).map_err(xml_error(position))?;
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::ProcessingInstruction(text.into_owned()));
                }
            }
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(ConvertError::UnexpectedEof { open: open.name });
    }

    root.map(|root| XmlDocument { root })
        .ok_or(ConvertError::NoRootElement)
}

/// Attach a finished element to its parent, or make it the document root.
fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_some() => {
            return Err(ConvertError::MultipleRootElements { name: element.name });
        }
        None => *root = Some(element),
    }
    Ok(())
}

/// Parse an XML document from a file.
pub fn parse_xml_file(path: &Path) -> Result<XmlDocument> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    parse_xml_bytes(&content)
}
