//! Slot routing: fills every named template region from one work item.
//!
//! The template exposes its regions by stable string names. Each name is
//! resolved once to a [`RegionKind`]; the matching handler reads the record
//! field behind it and writes the region through the converter. Unknown
//! names are expected during template evolution and never abort an export.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use longan::export::{Exporter, MemoryRecord};
//! use longan::slide::Slide;
//!
//! # fn main() -> Result<(), longan::Error> {
//! let record = MemoryRecord::new("PROJ-1", "Ship it");
//! let mut slide: Slide = load_template();
//!
//! let report = Exporter::new().export(&record, &mut slide)?;
//! for signal in report.signals() {
//!     eprintln!("export signal: {signal:?}");
//! }
//! # Ok(())
//! # }
//! # fn load_template() -> Slide { Slide::new() }
//! ```

// Module declarations
pub mod health;
pub mod record;
pub mod regions;
mod router;

// Re-export public API
pub use record::{MemoryRecord, Record, StatusCategory, fields};
pub use regions::RegionKind;
pub use router::Exporter;
