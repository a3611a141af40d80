//! Validation logic for XML to Steiner conversion.
//!
//! The shape check only looks at the root and its direct children. Grid and
//! point extraction search the whole document by tag name, so the nodes they
//! find are not necessarily the ones the shape check saw.

use crate::config::{
    ATTR_LAYER, ATTR_TYPE, ATTR_X, ATTR_Y, GRID_BOUNDS, GRID_TAG, NET_TAG, PIN_LAYER, PIN_TYPE,
    POINT_TAG, ROOT_CHILD_COUNT, ROOT_TAG,
};
use crate::error::{ConvertError, Owner, Result};
use crate::model::{Grid, Pin, SteinerNet};
use crate::parser::{Element, XmlDocument};

/// Check the document, then extract the grid and all pins.
pub fn validate_document(doc: &XmlDocument) -> Result<SteinerNet> {
    check_structure(doc)?;
    let grid = extract_grid(doc)?;
    let pins = extract_pins(doc)?;
    Ok(SteinerNet::new(grid, pins))
}

/// Check that the root is `<root>` with exactly `<grid>` then `<net>` below it.
pub fn check_structure(doc: &XmlDocument) -> Result<()> {
    let task = &doc.root;
    if task.name != ROOT_TAG {
        return Err(ConvertError::TaskNodeMissing {
            found: task.name.clone(),
        });
    }

    let children: Vec<&Element> = task.element_children().collect();
    if children.len() != ROOT_CHILD_COUNT {
        return Err(ConvertError::WrongChildCount {
            count: children.len(),
        });
    }
    if children[0].name != GRID_TAG {
        return Err(ConvertError::GridNotFirst {
            found: children[0].name.clone(),
        });
    }
    if children[1].name != NET_TAG {
        return Err(ConvertError::NetNotSecond {
            found: children[1].name.clone(),
        });
    }

    tracing::debug!("Document structure ok");
    Ok(())
}

/// Read the bounds of the first `<grid>` in the document.
pub fn extract_grid(doc: &XmlDocument) -> Result<Grid> {
    let grid = doc.find_first(GRID_TAG).ok_or(ConvertError::GridMissing)?;
    if grid.has_child_nodes() {
        return Err(ConvertError::MalformedGrid);
    }

    let [min_x, min_y, max_x, max_y] = GRID_BOUNDS;
    Ok(Grid::new(
        require_attribute(grid, Owner::Grid, min_x)?,
        require_attribute(grid, Owner::Grid, min_y)?,
        require_attribute(grid, Owner::Grid, max_x)?,
        require_attribute(grid, Owner::Grid, max_y)?,
    ))
}

/// Read every `<point>` in the document, stopping at the first bad one.
pub fn extract_pins(doc: &XmlDocument) -> Result<Vec<Pin>> {
    let mut pins = Vec::new();

    for (idx, point) in doc.find_all(POINT_TAG).enumerate() {
        let index = idx + 1;

        let layer = require_attribute(point, Owner::Point, ATTR_LAYER)?;
        if layer != PIN_LAYER {
            return Err(ConvertError::BadPointLayer {
                index,
                found: layer.to_string(),
            });
        }

        let kind = require_attribute(point, Owner::Point, ATTR_TYPE)?;
        if kind != PIN_TYPE {
            return Err(ConvertError::BadPointType {
                index,
                found: kind.to_string(),
            });
        }

        pins.push(Pin::new(
            require_attribute(point, Owner::Point, ATTR_X)?,
            require_attribute(point, Owner::Point, ATTR_Y)?,
        ));
    }

    tracing::debug!("Extracted {} pin(s)", pins.len());
    Ok(pins)
}

/// Get an attribute value, failing if it is absent.
pub fn require_attribute<'a>(element: &'a Element, owner: Owner, name: &str) -> Result<&'a str> {
    element
        .attribute(name)
        .ok_or_else(|| ConvertError::MissingAttribute {
            owner,
            attribute: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parser::parse_xml_str;

    fn doc(content: &str) -> XmlDocument {
        parse_xml_str(content).expect("valid xml")
    }

    const GRID: &str = r#"<grid min_x="0" min_y="0" max_x="10" max_y="10"/>"#;

    // ==================== Structure ====================

    #[test]
    fn test_structure_ok() {
        let d = doc(&format!("<root>\n  {GRID}\n  <net/>\n</root>"));
        assert!(check_structure(&d).is_ok());
    }

    #[test]
    fn test_wrong_root_name() {
        let d = doc(&format!("<task>{GRID}<net/></task>"));
        assert!(matches!(
            check_structure(&d),
            Err(ConvertError::TaskNodeMissing { found }) if found == "task"
        ));
    }

    #[test]
    fn test_three_children() {
        let d = doc(&format!("<root>{GRID}<net/><net/></root>"));
        assert!(matches!(
            check_structure(&d),
            Err(ConvertError::WrongChildCount { count: 3 })
        ));
    }

    #[test]
    fn test_one_child() {
        let d = doc(&format!("<root>{GRID}</root>"));
        assert!(matches!(
            check_structure(&d),
            Err(ConvertError::WrongChildCount { count: 1 })
        ));
    }

    #[test]
    fn test_children_in_wrong_order() {
        let d = doc(&format!("<root><net/>{GRID}</root>"));
        assert!(matches!(
            check_structure(&d),
            Err(ConvertError::GridNotFirst { found }) if found == "net"
        ));
    }

    #[test]
    fn test_second_child_not_net() {
        let d = doc(&format!("<root>{GRID}<pins/></root>"));
        assert!(matches!(
            check_structure(&d),
            Err(ConvertError::NetNotSecond { found }) if found == "pins"
        ));
    }

    #[test]
    fn test_comments_do_not_count_as_children() {
        let d = doc(&format!("<root><!-- bounds -->{GRID}<!-- pins --><net/></root>"));
        assert!(check_structure(&d).is_ok());
    }

    // ==================== Grid ====================

    #[test]
    fn test_grid_values_verbatim() {
        let d = doc(r#"<root><grid min_x="-1.50" min_y="0" max_x="1e3" max_y="abc"/><net/></root>"#);
        let grid = extract_grid(&d).unwrap();
        assert_eq!(grid.bounds(), ["-1.50", "0", "1e3", "abc"]);
    }

    #[test]
    fn test_grid_with_child_element() {
        let d = doc(r#"<root><grid min_x="0" min_y="0" max_x="1" max_y="1"><a/></grid><net/></root>"#);
        assert!(matches!(extract_grid(&d), Err(ConvertError::MalformedGrid)));
    }

    #[test]
    fn test_grid_with_whitespace_child() {
        let d = doc(r#"<root><grid min_x="0" min_y="0" max_x="1" max_y="1"> </grid><net/></root>"#);
        assert!(matches!(extract_grid(&d), Err(ConvertError::MalformedGrid)));
    }

    #[test]
    fn test_grid_missing_bound() {
        let d = doc(r#"<root><grid min_x="0" min_y="0" max_x="1"/><net/></root>"#);
        let err = extract_grid(&d).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Grid);
        assert!(matches!(
            err,
            ConvertError::MissingAttribute { attribute, .. } if attribute == "max_y"
        ));
    }

    #[test]
    fn test_grid_missing() {
        let d = doc("<root><net/></root>");
        assert!(matches!(extract_grid(&d), Err(ConvertError::GridMissing)));
    }

    #[test]
    fn test_first_grid_in_document_order_wins() {
        let d = doc(
            r#"<root><grid min_x="0" min_y="0" max_x="1" max_y="1"/><net><grid min_x="5" min_y="5" max_x="6" max_y="6"/></net></root>"#,
        );
        assert_eq!(extract_grid(&d).unwrap().max_x, "1");
    }

    // ==================== Points ====================

    #[test]
    fn test_pins_in_document_order() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point layer="pins" type="pin" x="1" y="2"/><point layer="pins" type="pin" x="3" y="4"/></net></root>"#
        ));
        let pins = extract_pins(&d).unwrap();
        assert_eq!(pins, vec![Pin::new("1", "2"), Pin::new("3", "4")]);
    }

    #[test]
    fn test_points_outside_net_are_found() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><group><point layer="pins" type="pin" x="7" y="8"/></group></net></root>"#
        ));
        assert_eq!(extract_pins(&d).unwrap(), vec![Pin::new("7", "8")]);
    }

    #[test]
    fn test_bad_layer() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point layer="pins" type="pin" x="1" y="2"/><point layer="signal" type="pin" x="3" y="4"/></net></root>"#
        ));
        assert!(matches!(
            extract_pins(&d),
            Err(ConvertError::BadPointLayer { index: 2, found }) if found == "signal"
        ));
    }

    #[test]
    fn test_bad_type() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point layer="pins" type="via" x="1" y="2"/></net></root>"#
        ));
        assert!(matches!(
            extract_pins(&d),
            Err(ConvertError::BadPointType { index: 1, found }) if found == "via"
        ));
    }

    #[test]
    fn test_missing_layer() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point type="pin" x="1" y="2"/></net></root>"#
        ));
        let err = extract_pins(&d).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Point);
    }

    #[test]
    fn test_missing_coordinate() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point layer="pins" type="pin" y="2"/></net></root>"#
        ));
        assert!(matches!(
            extract_pins(&d),
            Err(ConvertError::MissingAttribute { owner: Owner::Point, attribute }) if attribute == "x"
        ));
    }

    #[test]
    fn test_line_break_in_coordinate_does_not_split_value() {
        let d = doc(&format!(
            "<root>{GRID}<net><point layer=\"pins\" type=\"pin\" x=\"1\n\" y=\"2\"/></net></root>"
        ));
        let pins = extract_pins(&d).unwrap();
        assert_eq!(pins, vec![Pin::new("1 ", "2")]);
        assert!(!pins[0].x.contains('\n'));
    }

    #[test]
    fn test_no_points() {
        let d = doc(&format!("<root>{GRID}<net/></root>"));
        assert!(extract_pins(&d).unwrap().is_empty());
    }

    #[test]
    fn test_validate_document() {
        let d = doc(&format!(
            r#"<root>{GRID}<net><point layer="pins" type="pin" x="1" y="2"/></net></root>"#
        ));
        let net = validate_document(&d).unwrap();
        assert_eq!(net.grid, Grid::new("0", "0", "10", "10"));
        assert_eq!(net.pin_count(), 1);
    }
}
