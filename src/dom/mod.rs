//! Arena DOM and the html5ever adapter that fills it.
//!
//! Parsing is lenient: html5ever repairs malformed markup the way a browser
//! would, which matters for EDGAR filings exported from word processors.

mod arena;
mod predicates;
mod style;
mod tree_sink;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use predicates::{contains_table, heading_tag_level, is_image_tag, is_table_tag};
pub use style::{FontWeight, InlineStyle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::DomSink;

/// Parse an HTML document into an arena DOM.
///
/// Fragments are accepted: the parser wraps them in `html`/`body` elements.
pub fn parse_html(html: &str) -> Dom {
    let sink = DomSink::new();
    let result = parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());
    result.into_dom()
}

/// Parse raw HTML bytes, detecting the encoding.
///
/// Uses the encoding declared in the document (XML declaration or `<meta>`
/// charset) as a hint when the bytes are not valid UTF-8.
pub fn parse_html_bytes(html: &[u8]) -> Dom {
    let hint = crate::util::extract_declared_encoding(html);
    let text = crate::util::decode_text(html, hint);
    parse_html(&text)
}

impl Dom {
    /// Parse an HTML document. See [`parse_html`].
    pub fn parse(html: &str) -> Dom {
        parse_html(html)
    }

    /// Parse raw HTML bytes. See [`parse_html_bytes`].
    pub fn parse_bytes(html: &[u8]) -> Dom {
        parse_html_bytes(html)
    }
}
