//! Sectioned field writer: alternating header/body child blocks.
//!
//! The structured summary field renders as a fixed sequence of
//! header/body pairs: child `2i` carries the section title, child `2i + 1`
//! the section content. The layout is positional, not searched for, so the
//! cardinality is validated before anything is written.

use super::writer::{Seed, SlideWriter};
use crate::common::{Error, Result};
use crate::html::HtmlElement;
use crate::slide::{FormattedSlot, Paragraph, TextRun};

/// Number of header/body sections in the structured summary field.
pub const SUMMARY_SECTIONS: usize = 4;

impl SlideWriter {
    /// Write a field made of alternating header/body children into a
    /// free-form region.
    ///
    /// Section headers are written bold on paragraphs inheriting the slot's
    /// seed formatting; each section body gets a dedicated seed paragraph
    /// and is converted with the free-form policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionMismatch`] — before any mutation — when the
    /// root holds fewer than `2 × sections` child elements. Children beyond
    /// that count are ignored.
    pub fn write_section_pairs(
        &mut self,
        root: &HtmlElement,
        slot: &mut FormattedSlot<'_>,
        sections: usize,
    ) -> Result<()> {
        let children: Vec<&HtmlElement> = root.child_elements().collect();
        let expected = sections * 2;
        if children.len() < expected {
            return Err(Error::SectionMismatch {
                expected,
                got: children.len(),
            });
        }

        let seed = Seed {
            run: slot.seed_run_format(),
            paragraph: slot.seed_paragraph_format(),
        };

        let body = slot.body_mut();
        body.clear();

        for section in 0..sections {
            let header = children[2 * section].text();
            let mut format = seed.run.clone();
            format.bold = true;

            let mut heading = Paragraph::new(seed.paragraph.clone());
            heading.set_bullet(false);
            heading.append_run(TextRun::new(header, format));
            body.push_paragraph(heading);

            // Dedicated seed paragraph for the section content
            let mut content = Paragraph::new(seed.paragraph.clone());
            content.append_run(TextRun::new("", seed.run.clone()));
            body.push_paragraph(content);
            let index = body.len() - 1;

            self.write_node(children[2 * section + 1], body, index, &seed, true, false);
        }

        Ok(())
    }
}
