//! Named template regions and the slide that owns them.

use super::table::Table;
use super::text::TextBody;

/// Content held by a named region: free-form text or a fixed grid.
#[derive(Debug, Clone)]
pub enum ShapeContent {
    Text(TextBody),
    Table(Table),
}

/// A named region of the slide template.
///
/// The name is a string identity baked into the template by its designer;
/// the exporter routes record data by it.
#[derive(Debug, Clone)]
pub struct Shape {
    name: String,
    content: ShapeContent,
}

impl Shape {
    /// Create a text region.
    pub fn text(name: impl Into<String>, body: TextBody) -> Self {
        Self {
            name: name.into(),
            content: ShapeContent::Text(body),
        }
    }

    /// Create a table region.
    pub fn table(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            content: ShapeContent::Table(table),
        }
    }

    /// Declared region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The region's content.
    pub fn content(&self) -> &ShapeContent {
        &self.content
    }

    /// The text body, if this is a text region.
    pub fn text_body(&self) -> Option<&TextBody> {
        match &self.content {
            ShapeContent::Text(body) => Some(body),
            ShapeContent::Table(_) => None,
        }
    }

    /// Mutable text body, if this is a text region.
    pub fn text_body_mut(&mut self) -> Option<&mut TextBody> {
        match &mut self.content {
            ShapeContent::Text(body) => Some(body),
            ShapeContent::Table(_) => None,
        }
    }

    /// The table, if this is a table region.
    pub fn as_table(&self) -> Option<&Table> {
        match &self.content {
            ShapeContent::Text(_) => None,
            ShapeContent::Table(table) => Some(table),
        }
    }

    /// Mutable table, if this is a table region.
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.content {
            ShapeContent::Text(_) => None,
            ShapeContent::Table(table) => Some(table),
        }
    }
}

/// The in-memory model of the single template slide.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    shapes: Vec<Shape>,
}

impl Slide {
    /// Create a slide with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region in template order.
    pub fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Regions in template order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Mutable regions in template order.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Look a region up by its declared name.
    pub fn shape_by_name(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::text::TextRun;

    #[test]
    fn test_shape_kind_accessors() {
        let text = Shape::text("Key Placeholder", TextBody::seeded(TextRun::plain("KEY-1")));
        assert!(text.text_body().is_some());
        assert!(text.as_table().is_none());

        let table = Shape::table("Milestone Table", Table::seeded(2, 3, &TextRun::plain("")));
        assert!(table.as_table().is_some());
        assert!(table.text_body().is_none());
    }

    #[test]
    fn test_shape_lookup_by_name() {
        let mut slide = Slide::new();
        slide.push_shape(Shape::text("Date Placeholder", TextBody::new()));
        assert!(slide.shape_by_name("Date Placeholder").is_some());
        assert!(slide.shape_by_name("date placeholder").is_none());
    }
}
