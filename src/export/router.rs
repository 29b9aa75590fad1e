//! Per-region dispatch of record data into the template slide.
//!
//! The exporter walks the slide's regions in template order, resolves each
//! declared name to a [`RegionKind`] and fills the region from the record.
//! Handlers are side-effect-local to their own region: one bad field drops
//! or truncates its region and every other region is still written.

use log::warn;
use crate::common::report::{Report, Signal};
use crate::common::{RGBColor, Result};
use crate::convert::{SUMMARY_SECTIONS, SlideWriter, collect_rows};
use crate::html::parse_fragment;
use crate::slide::{FormattedSlot, Shape, Slide};
use super::health;
use super::record::{Record, fields};
use super::regions::{self, RegionKind};

/// Date format used by the date placeholder, e.g. `Jul 04, 2026`.
const DATE_FORMAT: &str = "%b %d, %Y";

/// Fields behind the top table's single data row, in destination column
/// order.
const TOP_TABLE_FIELDS: [&str; 3] = [fields::CONTACT, fields::CTA, fields::SW_LEAD];

/// Fills every named region of a template slide from one work item.
///
/// An exporter serves exactly one run: construct, [`export`](Self::export),
/// inspect the returned [`Report`].
pub struct Exporter {
    writer: SlideWriter,
}

impl Exporter {
    /// Create an exporter for one run.
    pub fn new() -> Self {
        Self {
            writer: SlideWriter::new(),
        }
    }

    /// Fill every region the template exposes, in template order.
    ///
    /// Unknown region names are reported and left untouched; region order
    /// has no semantic effect. Only structural template violations abort
    /// the export.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedTemplate`](crate::common::Error::MalformedTemplate)
    /// when a handled region misses its seed paragraph or run, and
    /// [`Error::SectionMismatch`](crate::common::Error::SectionMismatch)
    /// when the structured summary field does not carry its expected
    /// header/body pairs.
    pub fn export<R: Record>(mut self, record: &R, slide: &mut Slide) -> Result<Report> {
        for shape in slide.shapes_mut().iter_mut() {
            match regions::resolve(shape.name()) {
                Some(kind) => self.fill_region(kind, record, shape)?,
                None => self.writer.record(Signal::UnhandledRegion {
                    name: shape.name().to_string(),
                }),
            }
        }
        Ok(self.writer.into_report())
    }

    fn fill_region<R: Record>(
        &mut self,
        kind: RegionKind,
        record: &R,
        shape: &mut Shape,
    ) -> Result<()> {
        match kind {
            RegionKind::Key => self.fill_text(shape, record.key().to_string(), None),
            RegionKind::Summary => self.fill_text(shape, record.summary().to_string(), None),
            RegionKind::Date => {
                let text = match record.due_date() {
                    Some(date) => date.format(DATE_FORMAT).to_string(),
                    None => {
                        self.missing("duedate");
                        String::new()
                    },
                };
                self.fill_text(shape, text, None)
            },
            RegionKind::Phase => {
                let text = record.field_text(fields::PHASE).unwrap_or_else(|| {
                    self.missing(fields::PHASE);
                    String::new()
                });
                self.fill_text(shape, text, None)
            },
            RegionKind::Status => self.fill_text(
                shape,
                record.status_name().to_string(),
                Some(health::status_color(record.status_category())),
            ),
            RegionKind::OverallHealth => {
                let value = record.field_text(fields::STATUS_FLAG).unwrap_or_else(|| {
                    self.missing(fields::STATUS_FLAG);
                    String::new()
                });
                let color = health::overall_health_color(&value);
                self.fill_text(shape, value, color)
            },
            RegionKind::StructuredSummary => self.fill_structured_summary(record, shape),
            RegionKind::TopTable => self.fill_top_table(record, shape),
            RegionKind::Milestones => self.fill_milestones(record, shape),
        }
    }

    /// Overwrite the region's seed run with a plain value. Plain values are
    /// not markup, so this bypasses the converter entirely.
    fn fill_text(&mut self, shape: &mut Shape, text: String, color: Option<RGBColor>) -> Result<()> {
        let name = shape.name().to_string();
        let Some(body) = shape.text_body_mut() else {
            self.mismatch(name);
            return Ok(());
        };
        let mut slot = FormattedSlot::new(body)?;
        overwrite_seed_text(&mut slot, &text, color);
        Ok(())
    }

    fn fill_structured_summary<R: Record>(&mut self, record: &R, shape: &mut Shape) -> Result<()> {
        let name = shape.name().to_string();
        let Some(body) = shape.text_body_mut() else {
            self.mismatch(name);
            return Ok(());
        };
        let mut slot = FormattedSlot::new(body)?;

        let Some(html) = record.field_html(fields::PXT_SUMMARY) else {
            slot.clear();
            self.missing(fields::PXT_SUMMARY);
            return Ok(());
        };

        match parse_fragment(&html) {
            Ok(root) => self
                .writer
                .write_section_pairs(&root, &mut slot, SUMMARY_SECTIONS),
            Err(error) => {
                // Malformed renderer output: drop the region, keep exporting
                warn!(
                    "Field [{}] markup failed to parse: {error}",
                    fields::PXT_SUMMARY
                );
                slot.clear();
                Ok(())
            },
        }
    }

    fn fill_top_table<R: Record>(&mut self, record: &R, shape: &mut Shape) -> Result<()> {
        let name = shape.name().to_string();
        let Some(table) = shape.as_table_mut() else {
            self.mismatch(name);
            return Ok(());
        };

        for (column, field) in TOP_TABLE_FIELDS.iter().enumerate() {
            let Some(cell) = table.cell_mut(1, column) else {
                continue;
            };
            let mut slot = FormattedSlot::new(cell.body_mut())?;

            match record.field_html(field) {
                Some(html) => match parse_fragment(&html) {
                    Ok(root) => self.writer.write_to_cell(&root, &mut slot),
                    Err(error) => {
                        warn!("Field [{field}] markup failed to parse: {error}");
                        slot.clear();
                    },
                },
                None => {
                    overwrite_seed_text(&mut slot, "", None);
                    self.missing(field);
                },
            }
        }
        Ok(())
    }

    fn fill_milestones<R: Record>(&mut self, record: &R, shape: &mut Shape) -> Result<()> {
        let name = shape.name().to_string();
        let Some(table) = shape.as_table_mut() else {
            self.mismatch(name);
            return Ok(());
        };

        let Some(html) = record.field_html(fields::MILESTONES) else {
            self.missing(fields::MILESTONES);
            return Ok(());
        };

        match parse_fragment(&html) {
            Ok(root) => {
                let rows = collect_rows(&root);
                self.writer.map_table_rows(&rows, table);
            },
            Err(error) => {
                warn!(
                    "Field [{}] markup failed to parse: {error}",
                    fields::MILESTONES
                );
            },
        }
        Ok(())
    }

    fn missing(&mut self, field: &str) {
        self.writer.record(Signal::MissingField {
            field: field.to_string(),
        });
    }

    fn mismatch(&mut self, name: String) {
        warn!("Template region [{name}] does not hold the expected shape kind");
        self.writer.record(Signal::UnhandledRegion { name });
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

fn overwrite_seed_text(slot: &mut FormattedSlot<'_>, text: &str, color: Option<RGBColor>) {
    let Some(paragraph) = slot.body_mut().first_paragraph_mut() else {
        return;
    };
    paragraph.retain_first_run();
    let Some(run) = paragraph.first_run_mut() else {
        return;
    };
    run.set_text(text);
    if let Some(color) = color {
        run.format_mut().color = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::record::{MemoryRecord, StatusCategory};
    use crate::slide::{ParagraphFormat, RunFormat, Table, TextBody, TextRun};
    use chrono::NaiveDate;

    fn seeded_text_shape(name: &str) -> Shape {
        Shape::text(
            name,
            TextBody::seeded(TextRun::new(
                "template",
                RunFormat {
                    font_size: Some(18),
                    ..Default::default()
                },
            )),
        )
    }

    fn template_slide() -> Slide {
        let mut slide = Slide::new();
        slide.push_shape(seeded_text_shape("Key Placeholder"));
        slide.push_shape(seeded_text_shape("Summary Placeholder"));
        slide.push_shape(seeded_text_shape("Date Placeholder"));
        slide.push_shape(seeded_text_shape("Overall Health Placeholder"));
        slide.push_shape(Shape::text(
            "PXT Summary Placeholder",
            TextBody::seeded_with(
                TextRun::plain("template"),
                ParagraphFormat {
                    bullet: true,
                    ..Default::default()
                },
            ),
        ));
        slide.push_shape(Shape::table(
            "Top Table",
            Table::seeded(2, 3, &TextRun::plain("cell")),
        ));
        slide.push_shape(Shape::table(
            "Milestone Table",
            Table::seeded(18, 3, &TextRun::plain("cell")),
        ));
        slide
    }

    fn full_record() -> MemoryRecord {
        MemoryRecord::new("PROJ-7", "Deliver the exporter")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap())
            .with_status("In Progress", StatusCategory::InProgress)
            .with_field_text(fields::STATUS_FLAG, "Yellow")
            .with_field_html(
                fields::PXT_SUMMARY,
                "<p>Accomplishments</p><ul><li>a</li></ul>\
                 <p>Plans</p><ul><li>b</li></ul>\
                 <p>Risks</p><ul><li>c</li></ul>\
                 <p>Asks</p><ul><li>d</li></ul>",
            )
            .with_field_html(fields::CONTACT, "<p>Alice</p>")
            .with_field_html(fields::CTA, "<p>Review the beta</p>")
            .with_field_html(fields::SW_LEAD, "<p>Bob</p>")
            .with_field_html(
                fields::MILESTONES,
                "<table><tbody>\
                 <tr><th>Date</th><th></th><th>Milestone</th><th></th><th>Status</th></tr>\
                 <tr><td>Q3</td><td>|</td><td>Beta</td><td>|</td><td>On track</td></tr>\
                 </tbody></table>",
            )
    }

    #[test]
    fn test_export_fills_every_known_region() {
        let mut slide = template_slide();
        let report = Exporter::new().export(&full_record(), &mut slide).unwrap();

        assert!(report.is_clean());

        let key = slide.shape_by_name("Key Placeholder").unwrap();
        assert_eq!(key.text_body().unwrap().text(), "PROJ-7");
        // template formatting still on the overwritten run
        assert_eq!(
            key.text_body().unwrap().paragraphs()[0].runs()[0]
                .format()
                .font_size,
            Some(18)
        );

        let date = slide.shape_by_name("Date Placeholder").unwrap();
        assert_eq!(date.text_body().unwrap().text(), "Jul 04, 2026");

        let health = slide.shape_by_name("Overall Health Placeholder").unwrap();
        let health_run = &health.text_body().unwrap().paragraphs()[0].runs()[0];
        assert_eq!(health_run.text(), "Yellow");
        assert_eq!(health_run.format().color, Some(health::HEALTH_YELLOW));

        let top = slide.shape_by_name("Top Table").unwrap().as_table().unwrap();
        assert_eq!(top.cell(1, 0).unwrap().text(), "Alice");
        assert_eq!(top.cell(1, 1).unwrap().text(), "Review the beta");
        assert_eq!(top.cell(1, 2).unwrap().text(), "Bob");

        let milestones = slide
            .shape_by_name("Milestone Table")
            .unwrap()
            .as_table()
            .unwrap();
        assert_eq!(milestones.cell(1, 0).unwrap().text(), "Q3");
        assert_eq!(milestones.cell(1, 1).unwrap().text(), "Beta");
        assert_eq!(milestones.cell(1, 2).unwrap().text(), "On track");

        let summary = slide.shape_by_name("PXT Summary Placeholder").unwrap();
        let paragraphs = summary.text_body().unwrap().paragraphs();
        assert_eq!(paragraphs.len(), 8);
        assert_eq!(paragraphs[0].text(), "Accomplishments");
        assert!(paragraphs[0].runs()[0].format().bold);
        assert_eq!(paragraphs[1].text(), "a");
    }

    #[test]
    fn test_unknown_region_is_left_untouched() {
        let mut slide = template_slide();
        slide.push_shape(seeded_text_shape("Unknown Placeholder"));

        let report = Exporter::new().export(&full_record(), &mut slide).unwrap();

        let unknown = slide.shape_by_name("Unknown Placeholder").unwrap();
        assert_eq!(unknown.text_body().unwrap().text(), "template");

        let unhandled: Vec<_> = report
            .signals()
            .iter()
            .filter(|signal| matches!(signal, Signal::UnhandledRegion { .. }))
            .collect();
        assert_eq!(
            unhandled,
            vec![&Signal::UnhandledRegion {
                name: "Unknown Placeholder".to_string()
            }]
        );
    }

    #[test]
    fn test_missing_fields_write_empty_strings() {
        let mut slide = template_slide();
        let record = MemoryRecord::new("PROJ-8", "Bare record");

        let report = Exporter::new().export(&record, &mut slide).unwrap();

        let date = slide.shape_by_name("Date Placeholder").unwrap();
        assert_eq!(date.text_body().unwrap().text(), "");

        let top = slide.shape_by_name("Top Table").unwrap().as_table().unwrap();
        assert_eq!(top.cell(1, 0).unwrap().text(), "");

        // milestones grid keeps its template content
        let milestones = slide
            .shape_by_name("Milestone Table")
            .unwrap()
            .as_table()
            .unwrap();
        assert_eq!(milestones.cell(1, 0).unwrap().text(), "cell");

        assert!(
            report
                .signals()
                .iter()
                .any(|signal| *signal == Signal::MissingField {
                    field: fields::MILESTONES.to_string()
                })
        );
        // the structured summary region was cleared, not half-written
        let summary = slide.shape_by_name("PXT Summary Placeholder").unwrap();
        assert!(summary.text_body().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_summary_aborts_export() {
        let mut slide = template_slide();
        let record = MemoryRecord::new("PROJ-9", "Short summary")
            .with_field_html(fields::PXT_SUMMARY, "<p>Only</p><ul><li>one</li></ul>");

        let result = Exporter::new().export(&record, &mut slide);
        assert!(matches!(
            result,
            Err(crate::common::Error::SectionMismatch { expected: 8, got: 2 })
        ));
    }

    #[test]
    fn test_region_shape_mismatch_is_recoverable() {
        let mut slide = Slide::new();
        // a text region declared with the milestone table's name
        slide.push_shape(seeded_text_shape("Milestone Table"));

        let report = Exporter::new().export(&full_record(), &mut slide).unwrap();

        assert_eq!(
            report.signals(),
            &[Signal::UnhandledRegion {
                name: "Milestone Table".to_string()
            }]
        );
        let shape = slide.shape_by_name("Milestone Table").unwrap();
        assert_eq!(shape.text_body().unwrap().text(), "template");
    }
}
