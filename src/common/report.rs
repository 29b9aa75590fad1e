//! Non-fatal export signals.
//!
//! Every recoverable condition raised while filling a slide is recorded as a
//! [`Signal`] on a [`Report`] and logged through the `log` facade. Signals
//! never abort an export: a bad field drops or truncates its own region and
//! the rest of the document is still produced.

use log::warn;
use serde::Serialize;

/// A recoverable condition observed during an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Signal {
    /// A markup tag outside the supported vocabulary was dropped.
    UnsupportedTag {
        /// Tag name as it appeared in the rendered markup
        tag: String,
    },
    /// Source table rows beyond the destination grid capacity were dropped.
    Overflow {
        /// Number of data rows that did not fit
        dropped: usize,
    },
    /// A field rendered to empty markup where content was expected.
    EmptySource,
    /// A template region name has no registered handler.
    UnhandledRegion {
        /// Region name as declared in the template
        name: String,
    },
    /// A record field had no value; an empty string was written instead.
    MissingField {
        /// Field name that was looked up
        field: String,
    },
}

/// Ordered log of the signals raised during one export run.
///
/// The report is serializable so embedding applications can surface it next
/// to the produced document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    signals: Vec<Signal>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal and emit the matching warning.
    pub fn record(&mut self, signal: Signal) {
        match &signal {
            Signal::UnsupportedTag { tag } => {
                warn!("The markup tag [{tag}] is not handled for slide output; content dropped");
            },
            Signal::Overflow { dropped } => {
                warn!("Source table exceeds the destination grid capacity; dropped {dropped} rows");
            },
            Signal::EmptySource => {
                warn!("Source markup is empty; the target slot was cleared");
            },
            Signal::UnhandledRegion { name } => {
                warn!("No handler is registered for template region [{name}]; left untouched");
            },
            Signal::MissingField { field } => {
                warn!("Record field [{field}] has no value; wrote an empty string");
            },
        }
        self.signals.push(signal);
    }

    /// All signals in the order they were raised.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Whether the export finished without raising any signal.
    pub fn is_clean(&self) -> bool {
        self.signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_records_in_order() {
        let mut report = Report::new();
        report.record(Signal::EmptySource);
        report.record(Signal::MissingField {
            field: "Contact".to_string(),
        });

        assert_eq!(report.signals().len(), 2);
        assert_eq!(report.signals()[0], Signal::EmptySource);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_new_report_is_clean() {
        assert!(Report::new().is_clean());
    }
}
