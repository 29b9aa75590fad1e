//! Tag-dispatched conversion of markup trees onto template slots.
//!
//! Every write reuses the formatting already present in the slot instead of
//! specifying its own. Two policies exist, chosen by the call site:
//! free-form regions rebuild paragraph runs so inline marks survive
//! ([`SlideWriter::write_to_shape`]), grid cells overwrite the single
//! existing run in place ([`SlideWriter::write_to_cell`]).

use crate::common::report::{Report, Signal};
use crate::html::{HtmlElement, HtmlNode, Tag};
use crate::slide::{FontAlign, FormattedSlot, Paragraph, ParagraphFormat, RunFormat, TextAlign, TextBody, TextRun};

/// Template-derived layout applied to appended bullet paragraphs. Fixed at
/// conversion time, never recomputed from content.
const BULLET_LEFT_MARGIN: f64 = 28.5;
const BULLET_INDENT: f64 = -28.5;
const BULLET_SPACE_BEFORE: f64 = 6.0;

/// Seed formatting captured from a slot before it is rewritten.
pub(crate) struct Seed {
    pub run: RunFormat,
    pub paragraph: ParagraphFormat,
}

/// Converts markup trees into pre-formatted slots, collecting the
/// non-fatal signals raised along the way.
///
/// One writer serves one export run; consume it with
/// [`SlideWriter::into_report`] when the run is finished.
pub struct SlideWriter {
    report: Report,
}

impl SlideWriter {
    /// Create a writer with an empty report.
    pub fn new() -> Self {
        Self {
            report: Report::new(),
        }
    }

    /// Signals collected so far.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Finish the run and hand the report back.
    pub fn into_report(self) -> Report {
        self.report
    }

    pub(crate) fn record(&mut self, signal: Signal) {
        self.report.record(signal);
    }

    /// Write a markup tree into a free-form text region.
    ///
    /// Inline `b`/`i`/`em` marks are preserved by splitting paragraphs into
    /// separate runs; every run carries the slot's seed formatting with only
    /// the bold/italic flags adjusted.
    pub fn write_to_shape(&mut self, root: &HtmlElement, slot: &mut FormattedSlot<'_>) {
        self.write_html(root, slot, true);
    }

    /// Write a markup tree into one pre-formatted grid cell.
    ///
    /// The cell's single existing run is overwritten in place; inline marks
    /// are flattened into its text.
    pub fn write_to_cell(&mut self, root: &HtmlElement, slot: &mut FormattedSlot<'_>) {
        self.write_html(root, slot, false);
    }

    fn write_html(&mut self, root: &HtmlElement, slot: &mut FormattedSlot<'_>, split_runs: bool) {
        if root.nodes().is_empty() {
            slot.clear();
            self.record(Signal::EmptySource);
            return;
        }

        let seed = Seed {
            run: slot.seed_run_format(),
            paragraph: slot.seed_paragraph_format(),
        };

        // The template contract is one run per seed paragraph; drop any
        // leftovers from an earlier write before dispatching.
        if let Some(first) = slot.body_mut().first_paragraph_mut() {
            first.retain_first_run();
        }

        self.write_node(root, slot.body_mut(), 0, &seed, split_runs, true);
    }

    /// Dispatch one element onto the paragraph at `index`.
    ///
    /// `root` is true only for the outermost call: clearing then applies to
    /// the whole body rather than the current paragraph.
    pub(crate) fn write_node(
        &mut self,
        element: &HtmlElement,
        body: &mut TextBody,
        index: usize,
        seed: &Seed,
        split_runs: bool,
        root: bool,
    ) {
        match element.tag() {
            Tag::P => self.write_paragraph(element, body, index, seed, split_runs),
            Tag::Ul => self.write_bullet_list(element, body, index, seed, root),
            Tag::Body | Tag::Div => {
                self.write_body_or_div(element, body, index, seed, split_runs, root)
            },
            _ => {
                clear_target(body, index, root);
                self.record(Signal::UnsupportedTag {
                    tag: element.name().to_string(),
                });
            },
        }
    }

    fn write_paragraph(
        &mut self,
        element: &HtmlElement,
        body: &mut TextBody,
        index: usize,
        seed: &Seed,
        split_runs: bool,
    ) {
        let Some(paragraph) = body.paragraph_mut(index) else {
            return;
        };

        // The slot may be pre-styled as a bullet list; a `p` never is.
        paragraph.set_bullet(false);

        if split_runs {
            paragraph.clear_runs();
            for node in element.nodes() {
                match node {
                    HtmlNode::Text(text) if !text.is_empty() => {
                        paragraph.append_run(TextRun::new(text.clone(), seed.run.clone()));
                    },
                    HtmlNode::Element(child) => {
                        let text = child.text();
                        if text.is_empty() {
                            continue;
                        }
                        let mut format = seed.run.clone();
                        format.bold = child.tag() == Tag::Bold;
                        format.italic = child.tag() == Tag::Italic;
                        paragraph.append_run(TextRun::new(text, format));
                    },
                    _ => {},
                }
            }
        } else {
            paragraph.retain_first_run();
            match paragraph.first_run_mut() {
                Some(run) => run.set_text(element.text()),
                None => paragraph.append_run(TextRun::new(element.text(), seed.run.clone())),
            }
        }
    }

    /// First item overwrites the existing bullet point's text; every later
    /// item is appended with the inherited-format primitive. This is what
    /// keeps the template's bullet glyph and spacing without re-specifying
    /// them per item.
    fn write_bullet_list(
        &mut self,
        element: &HtmlElement,
        body: &mut TextBody,
        index: usize,
        seed: &Seed,
        root: bool,
    ) {
        let items: Vec<&HtmlElement> = element.child_elements().collect();

        if items.is_empty() {
            clear_target(body, index, root);
            if root {
                self.record(Signal::EmptySource);
            }
            return;
        }

        for (position, item) in items.iter().enumerate() {
            if position == 0 {
                let Some(paragraph) = body.paragraph_mut(index) else {
                    continue;
                };
                paragraph.retain_first_run();
                match paragraph.first_run_mut() {
                    Some(run) => run.set_text(item.text()),
                    None => paragraph.append_run(TextRun::new(item.text(), seed.run.clone())),
                }
            } else {
                let appended = body.append_paragraph(&item.text());
                if let Some(paragraph) = body.paragraph_mut(appended) {
                    style_bullet(paragraph);
                }
            }
        }
    }

    /// A `body` or `div` can hold several block children. Each child but the
    /// last gets a fresh paragraph appended up front, then every child is
    /// recursed into its paragraph.
    fn write_body_or_div(
        &mut self,
        element: &HtmlElement,
        body: &mut TextBody,
        index: usize,
        seed: &Seed,
        split_runs: bool,
        root: bool,
    ) {
        let children: Vec<&HtmlElement> = element.child_elements().collect();

        if children.is_empty() {
            clear_target(body, index, root);
            if root {
                self.record(Signal::EmptySource);
            }
            return;
        }

        let mut current;
        let mut next = index;
        for (position, child) in children.iter().enumerate() {
            current = next;
            if position < children.len() - 1 {
                next = body.append_paragraph(" ");
            }
            self.write_node(child, body, current, seed, split_runs, false);
        }
    }
}

impl Default for SlideWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn clear_target(body: &mut TextBody, index: usize, root: bool) {
    if root {
        body.clear();
    } else if let Some(paragraph) = body.paragraph_mut(index) {
        paragraph.clear_runs();
    }
}

/// Apply the fixed bullet layout to an appended bullet paragraph.
fn style_bullet(paragraph: &mut Paragraph) {
    let format = paragraph.format_mut();
    format.bullet = true;
    format.left_margin = Some(BULLET_LEFT_MARGIN);
    format.indent = Some(BULLET_INDENT);
    format.space_before = Some(BULLET_SPACE_BEFORE);
    format.text_align = Some(TextAlign::Left);
    format.font_align = Some(FontAlign::Top);
}
