//! Error types for XML to Steiner conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not well-formed XML.
    MalformedXml,
    /// Root node or its children have the wrong shape.
    Structure,
    /// Grid node is missing, has children or lacks a bound.
    Grid,
    /// A point is not a pin on the pins layer or lacks a coordinate.
    Point,
    /// Reading the input or writing the output failed.
    Io,
}

/// Which element a missing attribute belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Grid,
    Point,
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Grid => write!(f, "grid"),
            Owner::Point => write!(f, "point"),
        }
    }
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Malformed XML attribute: {0}")]
    XmlAttr(String),

    #[error("Malformed XML: unexpected end of input, <{open}> is not closed")]
    UnexpectedEof { open: String },

    #[error("Malformed XML: closing tag </{found}> has no matching start tag")]
    MismatchedEndTag { found: String },

    #[error("Malformed XML: document has no element")]
    NoRootElement,

    #[error("Malformed XML: second top-level element <{name}>")]
    MultipleRootElements { name: String },

    #[error("Malformed XML: text outside the root element")]
    TextOutsideRoot,

    #[error("Task node is missing: root element is named '{found}'")]
    TaskNodeMissing { found: String },

    #[error("Too many child nodes in task: expected 2 elements, found {count}")]
    WrongChildCount { count: usize },

    #[error("Grid node should be first, found <{found}>")]
    GridNotFirst { found: String },

    #[error("Net node should be second, found <{found}>")]
    NetNotSecond { found: String },

    #[error("Grid node is missing")]
    GridMissing,

    #[error("Malformed grid node: grid must not have child nodes")]
    MalformedGrid,

    #[error("Missing required attribute '{attribute}' on {owner} node")]
    MissingAttribute { owner: Owner, attribute: String },

    #[error("Bad point layer: point {index} has layer '{found}', expected 'pins'")]
    BadPointLayer { index: usize, found: String },

    #[error("Bad point type: point {index} has type '{found}', expected 'pin'")]
    BadPointType { index: usize, found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Xml { .. }
            | ConvertError::XmlAttr(_)
            | ConvertError::UnexpectedEof { .. }
            | ConvertError::MismatchedEndTag { .. }
            | ConvertError::NoRootElement
            | ConvertError::MultipleRootElements { .. }
            | ConvertError::TextOutsideRoot => ErrorKind::MalformedXml,
            ConvertError::TaskNodeMissing { .. }
            | ConvertError::WrongChildCount { .. }
            | ConvertError::GridNotFirst { .. }
            | ConvertError::NetNotSecond { .. } => ErrorKind::Structure,
            ConvertError::GridMissing | ConvertError::MalformedGrid => ErrorKind::Grid,
            ConvertError::MissingAttribute { owner, .. } => match owner {
                Owner::Grid => ErrorKind::Grid,
                Owner::Point => ErrorKind::Point,
            },
            ConvertError::BadPointLayer { .. } | ConvertError::BadPointType { .. } => {
                ErrorKind::Point
            }
            ConvertError::FileNotFound { .. } | ConvertError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for ConvertError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ConvertError::XmlAttr(err.to_string())
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
