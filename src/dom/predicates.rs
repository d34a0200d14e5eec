//! Shared tag predicates for the classifiers.

use super::{Dom, NodeId};

/// Check if a node is a `<table>` element.
pub fn is_table_tag(dom: &Dom, id: NodeId) -> bool {
    dom.tag_name(id) == Some("table")
}

/// Check if a node is an image element.
pub fn is_image_tag(dom: &Dom, id: NodeId) -> bool {
    matches!(dom.tag_name(id), Some("img" | "svg" | "picture"))
}

/// Heading level of an `h1`..`h6` element.
pub fn heading_tag_level(dom: &Dom, id: NodeId) -> Option<u8> {
    match dom.tag_name(id)? {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Check if a node is a table or has a table anywhere below it.
///
/// This is what makes a child "structural" for composite creation.
pub fn contains_table(dom: &Dom, id: NodeId) -> bool {
    is_table_tag(dom, id) || dom.contains_tag(id, "table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let mut dom = Dom::new();
        let h2 = dom.create_html_element("h2", &[]);
        let p = dom.create_html_element("p", &[]);
        assert_eq!(heading_tag_level(&dom, h2), Some(2));
        assert_eq!(heading_tag_level(&dom, p), None);
    }

    #[test]
    fn test_contains_table_is_recursive() {
        let mut dom = Dom::new();
        let outer = dom.create_html_element("div", &[]);
        let inner = dom.create_html_element("div", &[]);
        let table = dom.create_html_element("table", &[]);
        dom.append(dom.document(), outer);
        dom.append(outer, inner);
        dom.append(inner, table);

        assert!(contains_table(&dom, outer));
        assert!(contains_table(&dom, inner));
        assert!(contains_table(&dom, table));

        let p = dom.create_html_element("p", &[]);
        dom.append(dom.document(), p);
        assert!(!contains_table(&dom, p));
    }
}
