//! Read-only view of the tracked work item being exported.

use chrono::NaiveDate;
use std::collections::HashMap;

/// Well-known custom field names, as configured in the tracker.
pub mod fields {
    /// Overall health flag: `Green`, `Yellow` or `Red`.
    pub const STATUS_FLAG: &str = "Status-Flag2";
    /// Structured summary rendered as alternating header/list blocks.
    pub const PXT_SUMMARY: &str = "PXT Summary";
    /// Primary contact, rendered as a user mention.
    pub const CONTACT: &str = "Contact";
    /// Call to action.
    pub const CTA: &str = "CTA";
    /// Software lead, rendered as a user mention.
    pub const SW_LEAD: &str = "SW Lead";
    /// Current delivery phase.
    pub const PHASE: &str = "Phase";
    /// Milestone table rendered from the tracker's wiki markup.
    pub const MILESTONES: &str = "Milestones";
}

/// Lifecycle bucket of the work item's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCategory {
    #[default]
    Undefined,
    ToDo,
    InProgress,
    Complete,
}

/// Read-only, field-name-keyed view of one tracked work item.
///
/// The owning application supplies the implementation — typically a thin
/// adapter over its issue store and field renderer. The exporter only ever
/// reads from it.
pub trait Record {
    /// Item key, e.g. `PROJ-1234`.
    fn key(&self) -> &str;

    /// One-line item summary.
    fn summary(&self) -> &str;

    /// Due date, when one is set.
    fn due_date(&self) -> Option<NaiveDate>;

    /// Display name of the current status.
    fn status_name(&self) -> &str;

    /// Lifecycle bucket of the current status.
    fn status_category(&self) -> StatusCategory;

    /// Raw text value of a custom field.
    fn field_text(&self, field: &str) -> Option<String>;

    /// Rendered markup of a custom field.
    fn field_html(&self, field: &str) -> Option<String>;
}

/// Owned, in-memory [`Record`] for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    key: String,
    summary: String,
    due_date: Option<NaiveDate>,
    status_name: String,
    status_category: StatusCategory,
    text_fields: HashMap<String, String>,
    html_fields: HashMap<String, String>,
}

impl MemoryRecord {
    /// Create a record with the given key and summary.
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    /// Set the due date.
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Set the status name and category.
    pub fn with_status(mut self, name: impl Into<String>, category: StatusCategory) -> Self {
        self.status_name = name.into();
        self.status_category = category;
        self
    }

    /// Set a raw text field value.
    pub fn with_field_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.text_fields.insert(field.into(), value.into());
        self
    }

    /// Set a rendered markup field value.
    pub fn with_field_html(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.html_fields.insert(field.into(), value.into());
        self
    }
}

impl Record for MemoryRecord {
    fn key(&self) -> &str {
        &self.key
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn status_name(&self) -> &str {
        &self.status_name
    }

    fn status_category(&self) -> StatusCategory {
        self.status_category
    }

    fn field_text(&self, field: &str) -> Option<String> {
        self.text_fields.get(field).cloned()
    }

    fn field_html(&self, field: &str) -> Option<String> {
        self.html_fields.get(field).cloned()
    }
}
