//! Markup-to-rich-text conversion against pre-formatted template slots.
//!
//! The converter walks the constrained markup tree of one record field and
//! rewrites a slot in place, reusing the formatting the template designer
//! baked into the slot's first run. Three entry surfaces exist:
//!
//! - [`SlideWriter::write_to_shape`] / [`SlideWriter::write_to_cell`]:
//!   paragraph and bullet-list conversion, with per-shape run policies
//! - [`SlideWriter::write_section_pairs`]: alternating header/body blocks
//!   for the structured summary field
//! - [`SlideWriter::map_table_rows`]: bounded row copying into a fixed grid
//!
//! All recoverable conditions land on the writer's
//! [`Report`](crate::common::report::Report) rather than aborting.

// Module declarations
mod blocks;
mod rowmap;
mod writer;

// Re-export public API
pub use blocks::SUMMARY_SECTIONS;
pub use rowmap::collect_rows;
pub use writer::SlideWriter;
