//! Typed access to a pre-formatted template slot.

use super::text::{ParagraphFormat, RunFormat, TextBody};
use crate::common::{Error, Result};

/// A validated view over a region that satisfies the template contract:
/// at least one paragraph, whose first paragraph carries at least one run.
///
/// That first run is the single source of template formatting for the
/// slot. `FormattedSlot` captures it at construction, so the seed styling
/// stays available even after the body has been cleared or rewritten, and
/// every write path goes through a type that has proven the contract
/// instead of assuming it.
#[derive(Debug)]
pub struct FormattedSlot<'a> {
    body: &'a mut TextBody,
    seed_run: RunFormat,
    seed_paragraph: ParagraphFormat,
}

impl<'a> FormattedSlot<'a> {
    /// Validate the template contract and wrap the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTemplate`] when the body holds no
    /// paragraph, or its first paragraph holds no run.
    pub fn new(body: &'a mut TextBody) -> Result<Self> {
        let Some(first) = body.first_paragraph() else {
            return Err(Error::MalformedTemplate(
                "slot has no seed paragraph".to_string(),
            ));
        };
        let Some(run) = first.first_run() else {
            return Err(Error::MalformedTemplate(
                "slot's first paragraph has no seed run".to_string(),
            ));
        };
        let seed_run = run.format().clone();
        let seed_paragraph = first.format().clone();
        Ok(Self {
            body,
            seed_run,
            seed_paragraph,
        })
    }

    /// Formatting of the template's seed run.
    pub fn seed_run_format(&self) -> RunFormat {
        self.seed_run.clone()
    }

    /// Paragraph styling of the template's seed paragraph.
    pub fn seed_paragraph_format(&self) -> ParagraphFormat {
        self.seed_paragraph.clone()
    }

    /// The underlying body.
    pub fn body(&self) -> &TextBody {
        self.body
    }

    /// Mutable access to the underlying body.
    pub fn body_mut(&mut self) -> &mut TextBody {
        self.body
    }

    /// Append a paragraph copying the neighboring formatting; see
    /// [`TextBody::append_paragraph`].
    pub fn append_with_inherited_format(&mut self, text: &str) -> usize {
        self.body.append_paragraph(text)
    }

    /// Clear the slot to empty — the one intentional way a region ends up
    /// with no paragraphs.
    pub fn clear(&mut self) {
        self.body.clear();
    }
}
