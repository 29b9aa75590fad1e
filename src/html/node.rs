//! Node types for the constrained markup tree.
//!
//! The tree covers only the closed tag vocabulary the field renderer
//! produces. Anything else is preserved as [`Tag::Unknown`] so the
//! converter can apply its unsupported-tag policy instead of the parser
//! guessing.

/// Recognized tag vocabulary.
///
/// `b` maps to [`Tag::Bold`]; both `i` and `em` map to [`Tag::Italic`].
/// The table tags are consumed only by the bounded row mapper, never by the
/// paragraph converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body,
    Div,
    P,
    Ul,
    Li,
    Bold,
    Italic,
    Table,
    TBody,
    THead,
    Tr,
    Td,
    Th,
    Unknown,
}

impl Tag {
    /// Map a lowercase tag name onto the vocabulary.
    pub fn from_name(name: &str) -> Self {
        match name {
            "body" => Tag::Body,
            "div" => Tag::Div,
            "p" => Tag::P,
            "ul" => Tag::Ul,
            "li" => Tag::Li,
            "b" => Tag::Bold,
            "i" | "em" => Tag::Italic,
            "table" => Tag::Table,
            "tbody" => Tag::TBody,
            "thead" => Tag::THead,
            "tr" => Tag::Tr,
            "td" => Tag::Td,
            "th" => Tag::Th,
            _ => Tag::Unknown,
        }
    }
}

/// A node in the markup tree: an element or a text node.
#[derive(Debug, Clone)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
}

impl HtmlNode {
    /// The element behind this node, if it is one.
    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        }
    }

    /// The text behind this node, if it is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HtmlNode::Element(_) => None,
            HtmlNode::Text(text) => Some(text),
        }
    }
}

/// An element with its ordered child nodes.
///
/// The original tag name is kept alongside the resolved [`Tag`] so
/// unsupported tags can be reported by name.
#[derive(Debug, Clone)]
pub struct HtmlElement {
    name: String,
    tag: Tag,
    children: Vec<HtmlNode>,
}

impl HtmlElement {
    /// Create an element with no children.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let tag = Tag::from_name(&name);
        Self {
            name,
            tag,
            children: Vec::new(),
        }
    }

    /// Original tag name as it appeared in the markup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved vocabulary tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Append a child node. Adjacent text nodes are merged.
    pub fn push_node(&mut self, node: HtmlNode) {
        if let HtmlNode::Text(text) = &node
            && let Some(HtmlNode::Text(last)) = self.children.last_mut()
        {
            last.push_str(text);
            return;
        }
        self.children.push(node);
    }

    /// Builder-style child element append.
    pub fn with_child(mut self, child: HtmlElement) -> Self {
        self.push_node(HtmlNode::Element(child));
        self
    }

    /// Builder-style text node append.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_node(HtmlNode::Text(text.into()));
        self
    }

    /// All child nodes, in document order.
    pub fn nodes(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Child elements only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &HtmlElement> {
        self.children.iter().filter_map(HtmlNode::as_element)
    }

    /// Flattened descendant text with whitespace runs collapsed to single
    /// spaces and the ends trimmed.
    pub fn text(&self) -> String {
        let mut raw = String::new();
        self.collect_text(&mut raw);
        normalize_whitespace(&raw)
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                HtmlNode::Text(text) => out.push_str(text),
                HtmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Depth-first search for the first descendant with the given tag.
    pub fn find_first(&self, tag: Tag) -> Option<&HtmlElement> {
        for child in self.child_elements() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find_first(tag) {
                return Some(found);
            }
        }
        None
    }
}

fn normalize_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace && !out.is_empty() {
            out.push(' ');
        }
        in_whitespace = false;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_vocabulary() {
        assert_eq!(Tag::from_name("p"), Tag::P);
        assert_eq!(Tag::from_name("i"), Tag::Italic);
        assert_eq!(Tag::from_name("em"), Tag::Italic);
        assert_eq!(Tag::from_name("blink"), Tag::Unknown);
    }

    #[test]
    fn test_flattened_text_is_normalized() {
        let element = HtmlElement::new("p")
            .with_child(HtmlElement::new("b").with_text("Hi"))
            .with_text("   there \n ");
        assert_eq!(element.text(), "Hi there");
    }

    #[test]
    fn test_adjacent_text_nodes_merge() {
        let element = HtmlElement::new("p").with_text("a").with_text("b");
        assert_eq!(element.nodes().len(), 1);
        assert_eq!(element.nodes()[0].as_text(), Some("ab"));
    }

    #[test]
    fn test_find_first_descends() {
        let root = HtmlElement::new("div")
            .with_child(HtmlElement::new("div").with_child(HtmlElement::new("table")));
        assert!(root.find_first(Tag::Table).is_some());
        assert!(root.find_first(Tag::Ul).is_none());
    }
}
