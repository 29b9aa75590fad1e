//! Markup tree for rendered record fields.
//!
//! Record fields arrive as rendered markup fragments. This module provides
//! the read-only tree the converter walks ([`HtmlNode`], [`HtmlElement`],
//! [`Tag`]) and the constrained parser that builds it
//! ([`parse_fragment`]).
//!
//! General HTML is out of scope: only the renderer's closed tag vocabulary
//! is recognized, and everything else is preserved as [`Tag::Unknown`] for
//! the converter's unsupported-tag policy to handle.

// Module declarations
mod node;
mod parser;

// Re-export public API
pub use node::{HtmlElement, HtmlNode, Tag};
pub use parser::parse_fragment;
