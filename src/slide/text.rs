//! Rich-text model for pre-formatted template regions.
//!
//! Template shapes arrive holding one paragraph with one run whose font,
//! size, color, and bullet style were baked in by the template designer.
//! Everything in this module is built around reusing that formatting:
//! writes replace text in place, and new paragraphs are only created by
//! copying the formatting of an existing one.

use crate::common::RGBColor;
use smallvec::SmallVec;

/// Character formatting carried by a text run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFormat {
    /// Font name
    pub font_name: Option<String>,
    /// Font size in points
    pub font_size: Option<u16>,
    /// Font color
    pub color: Option<RGBColor>,
    /// Bold formatting
    pub bold: bool,
    /// Italic formatting
    pub italic: bool,
    /// Underline formatting
    pub underline: bool,
}

/// The smallest styled unit of text inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextRun {
    text: String,
    format: RunFormat,
}

impl TextRun {
    /// Create a run with the given text and formatting.
    pub fn new(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Create a run with default formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunFormat::default())
    }

    /// Text content of this run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without touching the formatting.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Formatting of this run.
    pub fn format(&self) -> &RunFormat {
        &self.format
    }

    /// Mutable access to the formatting.
    pub fn format_mut(&mut self) -> &mut RunFormat {
        &mut self.format
    }

    /// New run carrying this run's formatting with different text.
    pub fn inherit(&self, text: impl Into<String>) -> TextRun {
        TextRun::new(text, self.format.clone())
    }
}

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of the font within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAlign {
    Auto,
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Paragraph-level styling.
///
/// Margins and offsets are in points; a negative `indent` produces the
/// hanging layout used for bullet glyphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphFormat {
    /// Whether the paragraph renders a bullet glyph
    pub bullet: bool,
    /// Bullet nesting depth
    pub indent_level: u16,
    /// Left margin in points
    pub left_margin: Option<f64>,
    /// First-line indent offset in points
    pub indent: Option<f64>,
    /// Space before the paragraph in points
    pub space_before: Option<f64>,
    /// Horizontal alignment
    pub text_align: Option<TextAlign>,
    /// Vertical font alignment
    pub font_align: Option<FontAlign>,
}

/// An ordered sequence of runs sharing paragraph-level styling.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    format: ParagraphFormat,
    runs: SmallVec<[TextRun; 2]>,
}

impl Paragraph {
    /// Create an empty paragraph with the given styling.
    pub fn new(format: ParagraphFormat) -> Self {
        Self {
            format,
            runs: SmallVec::new(),
        }
    }

    /// Create a default-styled paragraph holding one run.
    pub fn with_run(run: TextRun) -> Self {
        let mut paragraph = Self::default();
        paragraph.runs.push(run);
        paragraph
    }

    /// Paragraph-level styling.
    pub fn format(&self) -> &ParagraphFormat {
        &self.format
    }

    /// Mutable access to the paragraph-level styling.
    pub fn format_mut(&mut self) -> &mut ParagraphFormat {
        &mut self.format
    }

    /// Enable or disable the bullet glyph.
    pub fn set_bullet(&mut self, bullet: bool) {
        self.format.bullet = bullet;
    }

    /// Whether the paragraph renders a bullet glyph.
    pub fn is_bullet(&self) -> bool {
        self.format.bullet
    }

    /// Runs in document order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// First run, if any.
    pub fn first_run(&self) -> Option<&TextRun> {
        self.runs.first()
    }

    /// Mutable first run, if any.
    pub fn first_run_mut(&mut self) -> Option<&mut TextRun> {
        self.runs.first_mut()
    }

    /// Append a run to the end of the paragraph.
    pub fn append_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Drop every run after the first one.
    pub fn retain_first_run(&mut self) {
        self.runs.truncate(1);
    }

    /// Remove all runs.
    pub fn clear_runs(&mut self) {
        self.runs.clear();
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(TextRun::text).collect()
    }
}

/// A mutable, pre-formatted paragraph container: one text region of the
/// output document.
#[derive(Debug, Clone, Default)]
pub struct TextBody {
    paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// Create an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// A body holding one paragraph with one run — the shape every
    /// template region starts in.
    pub fn seeded(run: TextRun) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_run(run)],
        }
    }

    /// Like [`TextBody::seeded`], with explicit paragraph styling.
    pub fn seeded_with(run: TextRun, format: ParagraphFormat) -> Self {
        let mut paragraph = Paragraph::new(format);
        paragraph.append_run(run);
        Self {
            paragraphs: vec![paragraph],
        }
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Paragraph at `index`, if it exists.
    pub fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    /// First paragraph, if any.
    pub fn first_paragraph(&self) -> Option<&Paragraph> {
        self.paragraphs.first()
    }

    /// Mutable first paragraph, if any.
    pub fn first_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        self.paragraphs.first_mut()
    }

    /// Append an already-built paragraph.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Append a new paragraph whose paragraph and run formatting are copied
    /// from the last existing paragraph, holding one run with `text`.
    /// Returns the index of the new paragraph.
    ///
    /// This is the append-with-inherited-format primitive: it never
    /// introduces style data of its own.
    pub fn append_paragraph(&mut self, text: &str) -> usize {
        let (paragraph_format, run_format) = match self.paragraphs.last() {
            Some(last) => (
                last.format().clone(),
                last.runs()
                    .last()
                    .map(|run| run.format().clone())
                    .unwrap_or_default(),
            ),
            None => Default::default(),
        };
        let mut paragraph = Paragraph::new(paragraph_format);
        paragraph.append_run(TextRun::new(text, run_format));
        self.paragraphs.push(paragraph);
        self.paragraphs.len() - 1
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the body holds no paragraphs at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Remove every paragraph.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
    }

    /// Concatenated paragraph texts, newline separated.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
