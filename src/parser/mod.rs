//! XML parser module.

mod xml;

pub use xml::{parse_xml_bytes, parse_xml_file, parse_xml_str, Descendants, Element, Node, XmlDocument};
