//! xml-to-steiner - Convert XML net descriptions into Steiner solver input.
//!
//! The input is an XML document shaped like
//!
//! ```xml
//! <root>
//!   <grid min_x="0" min_y="0" max_x="10" max_y="10"/>
//!   <net>
//!     <point layer="pins" type="pin" x="1" y="2"/>
//!   </net>
//! </root>
//! ```
//!
//! and the output is one number per line: the four grid bounds, the pin
//! count, then the `x` and `y` of every pin.
//!
//! # Example
//!
//! ```no_run
//! use xml_to_steiner::convert;
//! use std::path::Path;
//!
//! let net = convert(Path::new("net.xml"), Path::new("net.txt")).unwrap();
//! println!("{} pins", net.pin_count());
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use error::{ConvertError, ErrorKind, Result};
pub use generator::generate_steiner;
pub use model::{Grid, Pin, SteinerNet};
pub use parser::{parse_xml_file, parse_xml_str, XmlDocument};
pub use validation::validate_document;

use std::path::Path;

/// Parse, validate and render an XML net file without writing anything.
///
/// Returns the extracted net together with the generated solver input.
pub fn convert_xml_to_steiner(input_path: &Path) -> Result<(SteinerNet, String)> {
    let doc = parse_xml_file(input_path)?;
    let net = validate_document(&doc)?;
    let output = generate_steiner(&net);
    Ok((net, output))
}

/// Convert an XML net file into a Steiner solver input file.
///
/// The output file is only written once every check has passed, so a
/// failed conversion leaves no output behind.
pub fn convert(input_path: &Path, output_path: &Path) -> Result<SteinerNet> {
    tracing::info!("Processing: {}", input_path.display());

    let (net, output) = convert_xml_to_steiner(input_path)?;
    tracing::info!("Found {} pin(s)", net.pin_count());

    std::fs::write(output_path, output)?;
    tracing::info!("Generated: {}", output_path.display());

    Ok(net)
}
