//! Constrained fragment parser for rendered field markup.
//!
//! The field renderer emits well-formed XHTML-like fragments limited to the
//! closed vocabulary in [`Tag`](super::node::Tag). This parser builds the
//! node tree from such a fragment; it does not attempt general HTML
//! recovery. Attributes carry no meaning for slide output and are dropped.

use super::node::{HtmlElement, HtmlNode, Tag};
use crate::common::{Error, Result, entities};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Parse a rendered markup fragment into a tree rooted at a `body` element.
///
/// Top-level nodes are wrapped in a synthetic `body` unless the fragment
/// already consists of a single `body` element. Whitespace-only text nodes
/// are kept: inline runs depend on them.
///
/// # Arguments
///
/// * `fragment` - The rendered markup of one record field
///
/// # Examples
///
/// ```
/// use longan::html::{Tag, parse_fragment};
///
/// let root = parse_fragment("<p>R&amp;D update</p>").unwrap();
/// assert_eq!(root.tag(), Tag::Body);
/// assert_eq!(root.text(), "R&D update");
/// ```
pub fn parse_fragment(fragment: &str) -> Result<HtmlElement> {
    let mut reader = Reader::from_reader(fragment.as_bytes());

    let mut root = HtmlElement::new("body");
    let mut stack: Vec<HtmlElement> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = tag_name(e.local_name().as_ref());
                stack.push(HtmlElement::new(name));
            },
            Ok(Event::Empty(e)) => {
                let name = tag_name(e.local_name().as_ref());
                attach(&mut root, &mut stack, HtmlNode::Element(HtmlElement::new(name)));
            },
            Ok(Event::End(_)) => {
                if let Some(done) = stack.pop() {
                    attach(&mut root, &mut stack, HtmlNode::Element(done));
                }
            },
            Ok(Event::Text(e)) => {
                let raw = std::str::from_utf8(e.as_ref())?;
                let text = entities::decode_entities(raw);
                if !text.is_empty() {
                    attach(&mut root, &mut stack, HtmlNode::Text(text));
                }
            },
            Ok(Event::CData(e)) => {
                let raw = std::str::from_utf8(e.as_ref())?;
                if !raw.is_empty() {
                    attach(&mut root, &mut stack, HtmlNode::Text(raw.to_string()));
                }
            },
            Ok(Event::GeneralRef(e)) => {
                let name = std::str::from_utf8(e.as_ref())?;
                let text = match entities::resolve_entity(name) {
                    Some(ch) => ch.to_string(),
                    // Unknown entity: keep it literally, matching decode_entities
                    None => format!("&{name};"),
                };
                attach(&mut root, &mut stack, HtmlNode::Text(text));
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => return Err(Error::from(e)),
        }
        buf.clear();
    }

    // A truncated fragment can leave elements open; close them in order
    while let Some(done) = stack.pop() {
        attach(&mut root, &mut stack, HtmlNode::Element(done));
    }

    Ok(unwrap_body(root))
}

fn tag_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_ascii_lowercase()
}

fn attach(root: &mut HtmlElement, stack: &mut Vec<HtmlElement>, node: HtmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.push_node(node),
        None => root.push_node(node),
    }
}

/// Collapse the synthetic wrapper when the fragment already had a `body` root.
fn unwrap_body(root: HtmlElement) -> HtmlElement {
    let mut elements = root.child_elements();
    let only_body = matches!(elements.next(), Some(first) if first.tag() == Tag::Body)
        && elements.next().is_none()
        && root.nodes().iter().all(|node| match node {
            HtmlNode::Element(_) => true,
            HtmlNode::Text(text) => text.trim().is_empty(),
        });
    drop(elements);

    if only_body {
        let inner = root
            .nodes()
            .iter()
            .find_map(HtmlNode::as_element)
            .cloned()
            .unwrap_or(root);
        return inner;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wraps_fragment_in_body() {
        let root = parse_fragment("<p>one</p><p>two</p>").unwrap();
        assert_eq!(root.tag(), Tag::Body);
        assert_eq!(root.child_elements().count(), 2);
    }

    #[test]
    fn test_parse_keeps_existing_body_root() {
        let root = parse_fragment("<body><div><p>x</p></div></body>").unwrap();
        assert_eq!(root.tag(), Tag::Body);
        assert_eq!(root.child_elements().count(), 1);
        assert_eq!(root.child_elements().next().unwrap().tag(), Tag::Div);
    }

    #[test]
    fn test_parse_preserves_inline_whitespace() {
        let root = parse_fragment("<p><b>Hi</b> <i>there</i></p>").unwrap();
        let paragraph = root.child_elements().next().unwrap();
        assert_eq!(paragraph.nodes().len(), 3);
        assert_eq!(paragraph.nodes()[1].as_text(), Some(" "));
    }

    #[test]
    fn test_parse_decodes_entities() {
        let root = parse_fragment("<p>R&amp;D &lt;lead&gt;</p>").unwrap();
        assert_eq!(root.text(), "R&D <lead>");
    }

    #[test]
    fn test_parse_keeps_unknown_tags() {
        let root = parse_fragment("<span>x</span>").unwrap();
        let span = root.child_elements().next().unwrap();
        assert_eq!(span.tag(), Tag::Unknown);
        assert_eq!(span.name(), "span");
    }

    #[test]
    fn test_parse_rejects_malformed_markup() {
        assert!(parse_fragment("<p></div>").is_err());
    }
}
