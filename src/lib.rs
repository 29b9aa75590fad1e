//! Longan - A Rust library for filling pre-built slide templates from
//! tracked work items
//!
//! This library takes one structured business record (a tracked work item)
//! and writes it into the named regions of a pre-built slide template,
//! substituting placeholder text while preserving the formatting the
//! template designer baked in. The template's own paragraphs and runs are
//! the only source of styling: writes overwrite text in place or duplicate
//! existing formatting, never invent it.
//!
//! # Features
//!
//! - **Constrained markup conversion**: rendered field markup (`p`, `ul`,
//!   `div`, inline `b`/`i`/`em`) becomes paragraphs and runs in place
//! - **Format preservation**: every write reuses the template's seed run;
//!   inline marks only flip the bold/italic flags
//! - **Bounded table mapping**: variable-length milestone rows are copied
//!   into a fixed grid with column remapping and truncation
//! - **Name-keyed routing**: regions are resolved once against a closed
//!   set of known names; unknown regions are reported, never fatal
//! - **Non-fatal signals**: recoverable conditions land on a serializable
//!   [`Report`] instead of aborting the export
//!
//! # Example - Exporting a record
//!
//! ```rust
//! use longan::export::{Exporter, MemoryRecord};
//! use longan::slide::{RunFormat, Shape, Slide, TextBody, TextRun};
//!
//! # fn main() -> Result<(), longan::Error> {
//! // The embedding application loads the template model; every region
//! // arrives pre-formatted with one paragraph holding one run.
//! let seed = TextRun::new(
//!     "",
//!     RunFormat {
//!         font_size: Some(20),
//!         ..Default::default()
//!     },
//! );
//! let mut slide = Slide::new();
//! slide.push_shape(Shape::text("Key Placeholder", TextBody::seeded(seed.clone())));
//! slide.push_shape(Shape::text("Summary Placeholder", TextBody::seeded(seed)));
//!
//! let record = MemoryRecord::new("PROJ-1234", "Ship the exporter");
//! let report = Exporter::new().export(&record, &mut slide)?;
//!
//! assert!(report.is_clean());
//! let key = slide.shape_by_name("Key Placeholder").unwrap();
//! assert_eq!(key.text_body().unwrap().text(), "PROJ-1234");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Converting one field by hand
//!
//! ```rust
//! use longan::convert::SlideWriter;
//! use longan::html::parse_fragment;
//! use longan::slide::{FormattedSlot, TextBody, TextRun};
//!
//! # fn main() -> Result<(), longan::Error> {
//! let root = parse_fragment("<p><b>Hi</b> <i>there</i></p>")?;
//! let mut body = TextBody::seeded(TextRun::plain(""));
//! let mut slot = FormattedSlot::new(&mut body)?;
//!
//! let mut writer = SlideWriter::new();
//! writer.write_to_shape(&root, &mut slot);
//!
//! let runs = body.paragraphs()[0].runs();
//! assert_eq!(runs.len(), 3);
//! assert!(runs[0].format().bold);
//! assert!(runs[2].format().italic);
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! The export is synchronous and per-request: one record, one freshly
//! loaded template model, one traversal. Loading the template from a file
//! and serializing the finished model back out are the embedding
//! application's responsibilities, as are authentication and delivery.

/// Common types, traits, and utilities shared across the crate
///
/// This module provides the unified error type, the non-fatal signal
/// report, entity decoding, and shared style primitives.
pub mod common;

/// Markup-to-rich-text conversion
///
/// This module converts constrained markup trees onto pre-formatted
/// template slots: paragraph/bullet conversion, sectioned fields, and
/// bounded table-row mapping.
pub mod convert;

/// Record-to-template export
///
/// This module routes record fields into named template regions and
/// collects the signals raised along the way.
pub mod export;

/// Markup tree for rendered record fields
///
/// This module provides the constrained fragment parser and the node types
/// the converter walks.
pub mod html;

/// In-memory model of the slide template
///
/// This module provides the rich-text primitives (runs, paragraphs,
/// bodies), fixed-size tables, named shapes, and validated slot access.
pub mod slide;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Report, Result, Signal};
pub use convert::SlideWriter;
pub use export::{Exporter, MemoryRecord, Record, RegionKind};
pub use html::{HtmlElement, HtmlNode, Tag, parse_fragment};
pub use slide::{
    FormattedSlot, Paragraph, RunFormat, Shape, ShapeContent, Slide, Table, TableCell, TextBody,
    TextRun,
};
